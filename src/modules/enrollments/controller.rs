use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::RequireAdmin;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::enrollments::model::{
    CreateEnrollmentDto, Enrollment, EnrollmentFilterParams, PaginatedEnrollmentsResponse,
    UpdateEnrollmentStatusDto,
};
use crate::modules::enrollments::service::EnrollmentService;
use crate::state::AppState;
use crate::utils::email::EmailService;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Submit an enrollment application (public)
#[utoipa::path(
    post,
    path = "/api/enrollments",
    request_body = CreateEnrollmentDto,
    responses(
        (status = 201, description = "Application created with PENDING status", body = Enrollment),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Enrollments"
)]
#[instrument(skip(state, dto))]
pub async fn create_enrollment(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateEnrollmentDto>,
) -> Result<(StatusCode, Json<Enrollment>), AppError> {
    let enrollment = EnrollmentService::create_enrollment(&state.db, dto).await?;

    // The application is already saved; a mail outage must not fail it.
    let email = EmailService::new(state.email_config.clone());
    if let Err(err) = email.send_enrollment_emails(&enrollment).await {
        tracing::warn!(error = %err.error, "enrollment notification dispatch failed");
    }

    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// List enrollment applications (admin)
#[utoipa::path(
    get,
    path = "/api/enrollments",
    params(
        ("status" = Option<String>, Query, description = "Filter by status"),
        ("limit" = Option<i64>, Query, description = "Page size"),
        ("offset" = Option<i64>, Query, description = "Page offset")
    ),
    responses(
        (status = 200, description = "List of applications", body = PaginatedEnrollmentsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Admin only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Enrollments"
)]
#[instrument(skip(state))]
pub async fn get_enrollments(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<EnrollmentFilterParams>,
) -> Result<Json<PaginatedEnrollmentsResponse>, AppError> {
    let (enrollments, total) = EnrollmentService::get_enrollments(&state.db, &params).await?;

    Ok(Json(PaginatedEnrollmentsResponse {
        data: enrollments,
        meta: params.pagination.meta(total),
    }))
}

/// Review an application: PENDING -> ACTIVE or PENDING -> REJECTED (admin)
#[utoipa::path(
    put,
    path = "/api/enrollments/{id}/status",
    params(("id" = Uuid, Path, description = "Enrollment ID")),
    request_body = UpdateEnrollmentStatusDto,
    responses(
        (status = 200, description = "Status updated", body = Enrollment),
        (status = 400, description = "Invalid target status", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Admin only", body = ErrorResponse),
        (status = 404, description = "Enrollment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Enrollments"
)]
#[instrument(skip(state))]
pub async fn update_enrollment_status(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateEnrollmentStatusDto>,
) -> Result<Json<Enrollment>, AppError> {
    let enrollment = EnrollmentService::update_status(&state.db, id, dto.status).await?;
    Ok(Json(enrollment))
}
