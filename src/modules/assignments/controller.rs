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
use crate::modules::assignments::model::{
    Assignment, AssignmentFilterParams, AssignmentSubmission, CreateAssignmentDto,
    GradeSubmissionDto, SubmitAssignmentDto, UpdateAssignmentDto,
};
use crate::modules::assignments::service::AssignmentService;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::UserRole;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Create an assignment (faculty)
#[utoipa::path(
    post,
    path = "/api/assignments",
    request_body = CreateAssignmentDto,
    responses(
        (status = 201, description = "Assignment created", body = Assignment),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Assignments"
)]
#[instrument(skip(state, dto))]
pub async fn create_assignment(
    faculty: RequireFaculty,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateAssignmentDto>,
) -> Result<(StatusCode, Json<Assignment>), AppError> {
    // Faculty are attributed from their own profile; admins must name one.
    let faculty_id = match UserService::faculty_profile_id(&state.db, faculty.0.user_id()?).await? {
        Some(id) => id,
        None => dto.faculty_id.ok_or_else(|| {
            AppError::bad_request(anyhow::anyhow!("faculty_id is required"))
        })?,
    };

    let assignment = AssignmentService::create(&state.db, dto, faculty_id).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// List assignments, optionally filtered by course
#[utoipa::path(
    get,
    path = "/api/assignments",
    params(("course_id" = Option<Uuid>, Query, description = "Filter by course")),
    responses(
        (status = 200, description = "List of assignments", body = [Assignment]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Assignments"
)]
#[instrument(skip(state, _auth))]
pub async fn get_assignments(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<AssignmentFilterParams>,
) -> Result<Json<Vec<Assignment>>, AppError> {
    let assignments = AssignmentService::list(&state.db, &params).await?;
    Ok(Json(assignments))
}

/// Update an assignment (faculty)
#[utoipa::path(
    put,
    path = "/api/assignments/{id}",
    params(("id" = Uuid, Path, description = "Assignment ID")),
    request_body = UpdateAssignmentDto,
    responses(
        (status = 200, description = "Assignment updated", body = Assignment),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Assignments"
)]
#[instrument(skip(state, dto))]
pub async fn update_assignment(
    _faculty: RequireFaculty,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateAssignmentDto>,
) -> Result<Json<Assignment>, AppError> {
    let assignment = AssignmentService::update(&state.db, id, dto).await?;
    Ok(Json(assignment))
}

/// Delete an assignment (faculty)
#[utoipa::path(
    delete,
    path = "/api/assignments/{id}",
    params(("id" = Uuid, Path, description = "Assignment ID")),
    responses(
        (status = 200, description = "Assignment deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Assignments"
)]
#[instrument(skip(state))]
pub async fn delete_assignment(
    _faculty: RequireFaculty,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    AssignmentService::delete(&state.db, id).await?;
    Ok(Json(json!({"message": "Assignment deleted successfully"})))
}

/// Submit work for an assignment (student). Resubmission overwrites.
#[utoipa::path(
    post,
    path = "/api/assignments/{id}/submissions",
    params(("id" = Uuid, Path, description = "Assignment ID")),
    request_body = SubmitAssignmentDto,
    responses(
        (status = 200, description = "Submission recorded", body = AssignmentSubmission),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Students only", body = ErrorResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Assignments"
)]
#[instrument(skip(state, auth, dto))]
pub async fn submit_assignment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<SubmitAssignmentDto>,
) -> Result<Json<AssignmentSubmission>, AppError> {
    if auth.role() != UserRole::Student {
        return Err(AppError::forbidden("Only students can submit assignments"));
    }

    // The submitting student is always the caller; the client cannot
    // submit on someone else's behalf.
    let student_id = UserService::student_profile_id(&state.db, auth.user_id()?).await?;

    let submission = AssignmentService::submit(&state.db, id, student_id, dto).await?;
    Ok(Json(submission))
}

/// List submissions for an assignment (faculty)
#[utoipa::path(
    get,
    path = "/api/assignments/{id}/submissions",
    params(("id" = Uuid, Path, description = "Assignment ID")),
    responses(
        (status = 200, description = "List of submissions", body = [AssignmentSubmission]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Assignments"
)]
#[instrument(skip(state))]
pub async fn get_submissions(
    _faculty: RequireFaculty,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<AssignmentSubmission>>, AppError> {
    let submissions = AssignmentService::list_submissions(&state.db, id).await?;
    Ok(Json(submissions))
}

/// Grade a submission (faculty)
#[utoipa::path(
    put,
    path = "/api/assignments/submissions/{id}/grade",
    params(("id" = Uuid, Path, description = "Submission ID")),
    request_body = GradeSubmissionDto,
    responses(
        (status = 200, description = "Submission graded", body = AssignmentSubmission),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 404, description = "Submission not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Assignments"
)]
#[instrument(skip(state, dto))]
pub async fn grade_submission(
    _faculty: RequireFaculty,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<GradeSubmissionDto>,
) -> Result<Json<AssignmentSubmission>, AppError> {
    let submission = AssignmentService::grade_submission(&state.db, id, dto).await?;
    Ok(Json(submission))
}
