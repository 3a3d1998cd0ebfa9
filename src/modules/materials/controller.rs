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
use crate::modules::materials::model::{
    CourseMaterial, CreateCourseMaterialDto, MaterialFilterParams,
};
use crate::modules::materials::service::MaterialService;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Share a course material (faculty)
#[utoipa::path(
    post,
    path = "/api/materials",
    request_body = CreateCourseMaterialDto,
    responses(
        (status = 201, description = "Material created", body = CourseMaterial),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Materials"
)]
#[instrument(skip(state, dto))]
pub async fn create_material(
    faculty: RequireFaculty,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateCourseMaterialDto>,
) -> Result<(StatusCode, Json<CourseMaterial>), AppError> {
    let faculty_id = match UserService::faculty_profile_id(&state.db, faculty.0.user_id()?).await? {
        Some(id) => id,
        None => dto.faculty_id.ok_or_else(|| {
            AppError::bad_request(anyhow::anyhow!("faculty_id is required"))
        })?,
    };

    let material = MaterialService::create(&state.db, dto, faculty_id).await?;
    Ok((StatusCode::CREATED, Json(material)))
}

/// List course materials
#[utoipa::path(
    get,
    path = "/api/materials",
    params(("course_id" = Option<Uuid>, Query, description = "Filter by course")),
    responses(
        (status = 200, description = "Course materials", body = [CourseMaterial]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Materials"
)]
#[instrument(skip(state, _auth))]
pub async fn get_materials(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<MaterialFilterParams>,
) -> Result<Json<Vec<CourseMaterial>>, AppError> {
    let materials = MaterialService::list(&state.db, &params).await?;
    Ok(Json(materials))
}

/// Delete a course material (faculty)
#[utoipa::path(
    delete,
    path = "/api/materials/{id}",
    params(("id" = Uuid, Path, description = "Material ID")),
    responses(
        (status = 200, description = "Material deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 404, description = "Material not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Materials"
)]
#[instrument(skip(state))]
pub async fn delete_material(
    _faculty: RequireFaculty,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    MaterialService::delete(&state.db, id).await?;
    Ok(Json(json!({"message": "Course material deleted successfully"})))
}
