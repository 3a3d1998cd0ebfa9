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
use crate::modules::announcements::model::{
    Announcement, AnnouncementFilterParams, CreateAnnouncementDto, UpdateAnnouncementDto,
};
use crate::modules::announcements::service::AnnouncementService;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Post an announcement (faculty)
#[utoipa::path(
    post,
    path = "/api/announcements",
    request_body = CreateAnnouncementDto,
    responses(
        (status = 201, description = "Announcement posted", body = Announcement),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Announcements"
)]
#[instrument(skip(state, dto))]
pub async fn create_announcement(
    faculty: RequireFaculty,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateAnnouncementDto>,
) -> Result<(StatusCode, Json<Announcement>), AppError> {
    // Attribution only; admin-posted announcements carry no faculty id.
    let faculty_id = UserService::faculty_profile_id(&state.db, faculty.0.user_id()?).await?;

    let announcement = AnnouncementService::create(&state.db, dto, faculty_id).await?;
    Ok((StatusCode::CREATED, Json(announcement)))
}

/// List announcements, pinned first then newest first
#[utoipa::path(
    get,
    path = "/api/announcements",
    params(("target_role" = Option<String>, Query, description = "Role to fetch for; 'all' rows always included")),
    responses(
        (status = 200, description = "Announcements", body = [Announcement]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Announcements"
)]
#[instrument(skip(state, _auth))]
pub async fn get_announcements(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<AnnouncementFilterParams>,
) -> Result<Json<Vec<Announcement>>, AppError> {
    let announcements = AnnouncementService::list(&state.db, &params).await?;
    Ok(Json(announcements))
}

/// Update an announcement (faculty)
#[utoipa::path(
    put,
    path = "/api/announcements/{id}",
    params(("id" = Uuid, Path, description = "Announcement ID")),
    request_body = UpdateAnnouncementDto,
    responses(
        (status = 200, description = "Announcement updated", body = Announcement),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 404, description = "Announcement not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Announcements"
)]
#[instrument(skip(state, dto))]
pub async fn update_announcement(
    _faculty: RequireFaculty,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateAnnouncementDto>,
) -> Result<Json<Announcement>, AppError> {
    let announcement = AnnouncementService::update(&state.db, id, dto).await?;
    Ok(Json(announcement))
}

/// Delete an announcement (faculty)
#[utoipa::path(
    delete,
    path = "/api/announcements/{id}",
    params(("id" = Uuid, Path, description = "Announcement ID")),
    responses(
        (status = 200, description = "Announcement deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 404, description = "Announcement not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Announcements"
)]
#[instrument(skip(state))]
pub async fn delete_announcement(
    _faculty: RequireFaculty,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    AnnouncementService::delete(&state.db, id).await?;
    Ok(Json(json!({"message": "Announcement deleted successfully"})))
}
