use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::RequireFaculty;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::service::UserService;
use crate::modules::videos::model::{
    CreateVideoLectureDto, UpdateVideoLectureDto, VideoFilterParams, VideoLecture,
};
use crate::modules::videos::service::VideoService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List published video lectures (public/student-facing)
#[utoipa::path(
    get,
    path = "/api/videos",
    params(
        ("course_id" = Option<Uuid>, Query, description = "Filter by course"),
        ("chapter" = Option<String>, Query, description = "Filter by chapter")
    ),
    responses(
        (status = 200, description = "Published video lectures", body = [VideoLecture]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Videos"
)]
#[instrument(skip(state))]
pub async fn get_published_videos(
    State(state): State<AppState>,
    Query(params): Query<VideoFilterParams>,
) -> Result<Json<Vec<VideoLecture>>, AppError> {
    let videos = VideoService::list_published(&state.db, &params).await?;
    Ok(Json(videos))
}

/// List all video lectures including unpublished drafts (faculty)
#[utoipa::path(
    get,
    path = "/api/videos/all",
    params(
        ("course_id" = Option<Uuid>, Query, description = "Filter by course"),
        ("chapter" = Option<String>, Query, description = "Filter by chapter")
    ),
    responses(
        (status = 200, description = "All video lectures", body = [VideoLecture]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Videos"
)]
#[instrument(skip(state))]
pub async fn get_all_videos(
    _faculty: RequireFaculty,
    State(state): State<AppState>,
    Query(params): Query<VideoFilterParams>,
) -> Result<Json<Vec<VideoLecture>>, AppError> {
    let videos = VideoService::list_all(&state.db, &params).await?;
    Ok(Json(videos))
}

/// Upload a video lecture record (faculty)
#[utoipa::path(
    post,
    path = "/api/videos",
    request_body = CreateVideoLectureDto,
    responses(
        (status = 201, description = "Video lecture created", body = VideoLecture),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Videos"
)]
#[instrument(skip(state, dto))]
pub async fn create_video(
    faculty: RequireFaculty,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateVideoLectureDto>,
) -> Result<(StatusCode, Json<VideoLecture>), AppError> {
    let faculty_id = match UserService::faculty_profile_id(&state.db, faculty.0.user_id()?).await? {
        Some(id) => id,
        None => dto.faculty_id.ok_or_else(|| {
            AppError::bad_request(anyhow::anyhow!("faculty_id is required"))
        })?,
    };

    let video = VideoService::create(&state.db, dto, faculty_id).await?;
    Ok((StatusCode::CREATED, Json(video)))
}

/// Update a video lecture, including the publish flag (faculty)
#[utoipa::path(
    put,
    path = "/api/videos/{id}",
    params(("id" = Uuid, Path, description = "Video lecture ID")),
    request_body = UpdateVideoLectureDto,
    responses(
        (status = 200, description = "Video lecture updated", body = VideoLecture),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 404, description = "Video lecture not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Videos"
)]
#[instrument(skip(state, dto))]
pub async fn update_video(
    _faculty: RequireFaculty,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateVideoLectureDto>,
) -> Result<Json<VideoLecture>, AppError> {
    let video = VideoService::update(&state.db, id, dto).await?;
    Ok(Json(video))
}

/// Delete a video lecture (faculty)
#[utoipa::path(
    delete,
    path = "/api/videos/{id}",
    params(("id" = Uuid, Path, description = "Video lecture ID")),
    responses(
        (status = 200, description = "Video lecture deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 404, description = "Video lecture not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Videos"
)]
#[instrument(skip(state))]
pub async fn delete_video(
    _faculty: RequireFaculty,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    VideoService::delete(&state.db, id).await?;
    Ok(Json(json!({"message": "Video lecture deleted successfully"})))
}
