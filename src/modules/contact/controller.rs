use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use crate::middleware::role::RequireAdmin;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::contact::model::{
    Appointment, ContactMessage, CreateAppointmentDto, CreateContactMessageDto,
};
use crate::modules::contact::service::ContactService;
use crate::state::AppState;
use crate::utils::email::EmailService;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Submit a contact message (public)
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = CreateContactMessageDto,
    responses(
        (status = 201, description = "Message received", body = ContactMessage),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Contact"
)]
#[instrument(skip(state, dto))]
pub async fn create_contact_message(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateContactMessageDto>,
) -> Result<(StatusCode, Json<ContactMessage>), AppError> {
    let message = ContactService::create_message(&state.db, dto).await?;

    // The message is persisted either way; mail trouble is ours, not the
    // visitor's.
    let email = EmailService::new(state.email_config.clone());
    if let Err(err) = email.send_contact_emails(&message).await {
        tracing::warn!(error = %err.error, "contact notification dispatch failed");
    }

    Ok((StatusCode::CREATED, Json(message)))
}

/// List contact messages (admin)
#[utoipa::path(
    get,
    path = "/api/contact",
    responses(
        (status = 200, description = "Contact messages", body = [ContactMessage]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Admin only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Contact"
)]
#[instrument(skip(state))]
pub async fn get_contact_messages(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactMessage>>, AppError> {
    let messages = ContactService::list_messages(&state.db).await?;
    Ok(Json(messages))
}

/// Request an appointment (public)
#[utoipa::path(
    post,
    path = "/api/appointments",
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Appointment request received", body = Appointment),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Contact"
)]
#[instrument(skip(state, dto))]
pub async fn create_appointment(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateAppointmentDto>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let appointment = ContactService::create_appointment(&state.db, dto).await?;

    let email = EmailService::new(state.email_config.clone());
    if let Err(err) = email.send_appointment_emails(&appointment).await {
        tracing::warn!(error = %err.error, "appointment notification dispatch failed");
    }

    Ok((StatusCode::CREATED, Json(appointment)))
}

/// List appointment requests (admin)
#[utoipa::path(
    get,
    path = "/api/appointments",
    responses(
        (status = 200, description = "Appointment requests", body = [Appointment]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Admin only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Contact"
)]
#[instrument(skip(state))]
pub async fn get_appointments(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let appointments = ContactService::list_appointments(&state.db).await?;
    Ok(Json(appointments))
}
