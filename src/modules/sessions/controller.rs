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
use crate::modules::sessions::model::{
    CreateLiveSessionDto, LiveSession, LiveSessionFilterParams, UpdateLiveSessionDto,
};
use crate::modules::sessions::service::LiveSessionService;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Schedule a live session (faculty)
#[utoipa::path(
    post,
    path = "/api/sessions",
    request_body = CreateLiveSessionDto,
    responses(
        (status = 201, description = "Session scheduled", body = LiveSession),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Live Sessions"
)]
#[instrument(skip(state, dto))]
pub async fn create_session(
    faculty: RequireFaculty,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateLiveSessionDto>,
) -> Result<(StatusCode, Json<LiveSession>), AppError> {
    let faculty_id = match UserService::faculty_profile_id(&state.db, faculty.0.user_id()?).await? {
        Some(id) => id,
        None => dto.faculty_id.ok_or_else(|| {
            AppError::bad_request(anyhow::anyhow!("faculty_id is required"))
        })?,
    };

    let session = LiveSessionService::create(&state.db, dto, faculty_id).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// List live sessions, filtered by course or status
#[utoipa::path(
    get,
    path = "/api/sessions",
    params(
        ("course_id" = Option<Uuid>, Query, description = "Filter by course"),
        ("status" = Option<String>, Query, description = "Filter by status")
    ),
    responses(
        (status = 200, description = "Live sessions", body = [LiveSession]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Live Sessions"
)]
#[instrument(skip(state, _auth))]
pub async fn get_sessions(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<LiveSessionFilterParams>,
) -> Result<Json<Vec<LiveSession>>, AppError> {
    let sessions = LiveSessionService::list(&state.db, &params).await?;
    Ok(Json(sessions))
}

/// Update a live session; completing one is where the recording lands (faculty)
#[utoipa::path(
    put,
    path = "/api/sessions/{id}",
    params(("id" = Uuid, Path, description = "Session ID")),
    request_body = UpdateLiveSessionDto,
    responses(
        (status = 200, description = "Session updated", body = LiveSession),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 404, description = "Session not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Live Sessions"
)]
#[instrument(skip(state, dto))]
pub async fn update_session(
    _faculty: RequireFaculty,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateLiveSessionDto>,
) -> Result<Json<LiveSession>, AppError> {
    let session = LiveSessionService::update(&state.db, id, dto).await?;
    Ok(Json(session))
}

/// Delete a live session (faculty)
#[utoipa::path(
    delete,
    path = "/api/sessions/{id}",
    params(("id" = Uuid, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 404, description = "Session not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Live Sessions"
)]
#[instrument(skip(state))]
pub async fn delete_session(
    _faculty: RequireFaculty,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    LiveSessionService::delete(&state.db, id).await?;
    Ok(Json(json!({"message": "Live session deleted successfully"})))
}
