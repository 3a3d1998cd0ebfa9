use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireFaculty;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::grades::model::{CreateGradeDto, Grade, GradeFilterParams};
use crate::modules::grades::service::GradeService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Record an exam result (faculty). Grade records are append-only.
#[utoipa::path(
    post,
    path = "/api/grades",
    request_body = CreateGradeDto,
    responses(
        (status = 201, description = "Grade recorded", body = Grade),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
#[instrument(skip(state, dto))]
pub async fn create_grade(
    _faculty: RequireFaculty,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateGradeDto>,
) -> Result<(StatusCode, Json<Grade>), AppError> {
    let grade = GradeService::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(grade)))
}

/// List exam results, filtered by student, course, or exam
#[utoipa::path(
    get,
    path = "/api/grades",
    params(
        ("student_id" = Option<Uuid>, Query, description = "Filter by student profile"),
        ("course_id" = Option<Uuid>, Query, description = "Filter by course"),
        ("exam_name" = Option<String>, Query, description = "Filter by exam name")
    ),
    responses(
        (status = 200, description = "Grade records", body = [Grade]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Grades"
)]
#[instrument(skip(state, _auth))]
pub async fn get_grades(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<GradeFilterParams>,
) -> Result<Json<Vec<Grade>>, AppError> {
    let grades = GradeService::list(&state.db, &params).await?;
    Ok(Json(grades))
}
