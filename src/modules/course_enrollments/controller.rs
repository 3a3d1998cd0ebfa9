use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireAdmin;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::course_enrollments::model::{
    CourseEnrollment, CourseEnrollmentFilterParams, CreateCourseEnrollmentDto,
    UpdateCourseEnrollmentStatusDto,
};
use crate::modules::course_enrollments::service::CourseEnrollmentService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Enroll a student account in a course (admin)
#[utoipa::path(
    post,
    path = "/api/course-enrollments",
    request_body = CreateCourseEnrollmentDto,
    responses(
        (status = 201, description = "Enrollment created", body = CourseEnrollment),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Admin only", body = ErrorResponse),
        (status = 404, description = "Student or course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Course Enrollments"
)]
#[instrument(skip(state))]
pub async fn create_course_enrollment(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(dto): Json<CreateCourseEnrollmentDto>,
) -> Result<(StatusCode, Json<CourseEnrollment>), AppError> {
    let enrollment = CourseEnrollmentService::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// List course enrollments, filtered by student or course
#[utoipa::path(
    get,
    path = "/api/course-enrollments",
    params(
        ("student_id" = Option<Uuid>, Query, description = "Filter by student profile"),
        ("course_id" = Option<Uuid>, Query, description = "Filter by course")
    ),
    responses(
        (status = 200, description = "List of course enrollments", body = [CourseEnrollment]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Course Enrollments"
)]
#[instrument(skip(state, _auth))]
pub async fn get_course_enrollments(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<CourseEnrollmentFilterParams>,
) -> Result<Json<Vec<CourseEnrollment>>, AppError> {
    let enrollments = CourseEnrollmentService::list(&state.db, &params).await?;
    Ok(Json(enrollments))
}

/// Update a course enrollment's status (admin)
#[utoipa::path(
    put,
    path = "/api/course-enrollments/{id}/status",
    params(("id" = Uuid, Path, description = "Course enrollment ID")),
    request_body = UpdateCourseEnrollmentStatusDto,
    responses(
        (status = 200, description = "Status updated", body = CourseEnrollment),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Admin only", body = ErrorResponse),
        (status = 404, description = "Course enrollment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Course Enrollments"
)]
#[instrument(skip(state))]
pub async fn update_course_enrollment_status(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateCourseEnrollmentStatusDto>,
) -> Result<Json<CourseEnrollment>, AppError> {
    let enrollment = CourseEnrollmentService::update_status(&state.db, id, dto.status).await?;
    Ok(Json(enrollment))
}
