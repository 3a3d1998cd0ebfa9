use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::RequireAdmin;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::testimonials::model::{CreateTestimonialDto, Testimonial};
use crate::modules::testimonials::service::TestimonialService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List approved testimonials (public)
#[utoipa::path(
    get,
    path = "/api/testimonials",
    responses(
        (status = 200, description = "Approved testimonials", body = [Testimonial]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Testimonials"
)]
#[instrument(skip(state))]
pub async fn get_testimonials(
    State(state): State<AppState>,
) -> Result<Json<Vec<Testimonial>>, AppError> {
    let testimonials = TestimonialService::list_approved(&state.db).await?;
    Ok(Json(testimonials))
}

/// List all testimonials including unapproved submissions (admin)
#[utoipa::path(
    get,
    path = "/api/testimonials/all",
    responses(
        (status = 200, description = "All testimonials", body = [Testimonial]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Admin only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Testimonials"
)]
#[instrument(skip(state))]
pub async fn get_all_testimonials(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Testimonial>>, AppError> {
    let testimonials = TestimonialService::list_all(&state.db).await?;
    Ok(Json(testimonials))
}

/// Submit a testimonial (public). Held for moderation until approved.
#[utoipa::path(
    post,
    path = "/api/testimonials",
    request_body = CreateTestimonialDto,
    responses(
        (status = 201, description = "Testimonial submitted for review", body = Testimonial),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Testimonials"
)]
#[instrument(skip(state, dto))]
pub async fn create_testimonial(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateTestimonialDto>,
) -> Result<(StatusCode, Json<Testimonial>), AppError> {
    let testimonial = TestimonialService::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// Approve a testimonial for public display (admin)
#[utoipa::path(
    put,
    path = "/api/testimonials/{id}/approve",
    params(("id" = Uuid, Path, description = "Testimonial ID")),
    responses(
        (status = 200, description = "Testimonial approved", body = Testimonial),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Admin only", body = ErrorResponse),
        (status = 404, description = "Testimonial not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Testimonials"
)]
#[instrument(skip(state))]
pub async fn approve_testimonial(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Testimonial>, AppError> {
    let testimonial = TestimonialService::approve(&state.db, id).await?;
    Ok(Json(testimonial))
}

/// Delete a testimonial (admin)
#[utoipa::path(
    delete,
    path = "/api/testimonials/{id}",
    params(("id" = Uuid, Path, description = "Testimonial ID")),
    responses(
        (status = 200, description = "Testimonial deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Admin only", body = ErrorResponse),
        (status = 404, description = "Testimonial not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Testimonials"
)]
#[instrument(skip(state))]
pub async fn delete_testimonial(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    TestimonialService::delete(&state.db, id).await?;
    Ok(Json(json!({"message": "Testimonial deleted successfully"})))
}
