use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireFaculty;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::schedule::model::{
    CreateScheduleSlotDto, ScheduleFilterParams, ScheduleSlot, UpdateScheduleSlotDto,
};
use crate::modules::schedule::service::ScheduleService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Create a weekly schedule slot (faculty)
#[utoipa::path(
    post,
    path = "/api/schedule",
    request_body = CreateScheduleSlotDto,
    responses(
        (status = 201, description = "Slot created", body = ScheduleSlot),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Schedule"
)]
#[instrument(skip(state, dto))]
pub async fn create_schedule_slot(
    _faculty: RequireFaculty,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateScheduleSlotDto>,
) -> Result<(StatusCode, Json<ScheduleSlot>), AppError> {
    let slot = ScheduleService::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(slot)))
}

/// List schedule slots, filtered by course or day
#[utoipa::path(
    get,
    path = "/api/schedule",
    params(
        ("course_id" = Option<Uuid>, Query, description = "Filter by course"),
        ("day_of_week" = Option<String>, Query, description = "Filter by day of week")
    ),
    responses(
        (status = 200, description = "Schedule slots", body = [ScheduleSlot]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Schedule"
)]
#[instrument(skip(state, _auth))]
pub async fn get_schedule(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ScheduleFilterParams>,
) -> Result<Json<Vec<ScheduleSlot>>, AppError> {
    let slots = ScheduleService::list(&state.db, &params).await?;
    Ok(Json(slots))
}

/// Update a schedule slot (faculty)
#[utoipa::path(
    put,
    path = "/api/schedule/{id}",
    params(("id" = Uuid, Path, description = "Slot ID")),
    request_body = UpdateScheduleSlotDto,
    responses(
        (status = 200, description = "Slot updated", body = ScheduleSlot),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 404, description = "Slot not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Schedule"
)]
#[instrument(skip(state, dto))]
pub async fn update_schedule_slot(
    _faculty: RequireFaculty,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateScheduleSlotDto>,
) -> Result<Json<ScheduleSlot>, AppError> {
    let slot = ScheduleService::update(&state.db, id, dto).await?;
    Ok(Json(slot))
}

/// Delete a schedule slot (faculty)
#[utoipa::path(
    delete,
    path = "/api/schedule/{id}",
    params(("id" = Uuid, Path, description = "Slot ID")),
    responses(
        (status = 200, description = "Slot deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 404, description = "Slot not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Schedule"
)]
#[instrument(skip(state))]
pub async fn delete_schedule_slot(
    _faculty: RequireFaculty,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    ScheduleService::delete(&state.db, id).await?;
    Ok(Json(json!({"message": "Schedule slot deleted successfully"})))
}
