use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::RequireAdmin;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::gallery::model::{
    CreateGalleryImageDto, GalleryFilterParams, GalleryImage,
};
use crate::modules::gallery::service::GalleryService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List gallery images (public)
#[utoipa::path(
    get,
    path = "/api/gallery",
    params(("category" = Option<String>, Query, description = "Filter by category")),
    responses(
        (status = 200, description = "Gallery images", body = [GalleryImage]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Gallery"
)]
#[instrument(skip(state))]
pub async fn get_gallery(
    State(state): State<AppState>,
    Query(params): Query<GalleryFilterParams>,
) -> Result<Json<Vec<GalleryImage>>, AppError> {
    let images = GalleryService::list(&state.db, &params).await?;
    Ok(Json(images))
}

/// Add a gallery image (admin)
#[utoipa::path(
    post,
    path = "/api/gallery",
    request_body = CreateGalleryImageDto,
    responses(
        (status = 201, description = "Image added", body = GalleryImage),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Admin only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Gallery"
)]
#[instrument(skip(state, dto))]
pub async fn create_gallery_image(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateGalleryImageDto>,
) -> Result<(StatusCode, Json<GalleryImage>), AppError> {
    let image = GalleryService::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

/// Remove a gallery image (admin)
#[utoipa::path(
    delete,
    path = "/api/gallery/{id}",
    params(("id" = Uuid, Path, description = "Image ID")),
    responses(
        (status = 200, description = "Image removed"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Admin only", body = ErrorResponse),
        (status = 404, description = "Image not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Gallery"
)]
#[instrument(skip(state))]
pub async fn delete_gallery_image(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    GalleryService::delete(&state.db, id).await?;
    Ok(Json(json!({"message": "Gallery image deleted successfully"})))
}
