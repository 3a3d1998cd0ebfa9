use axum::{
    Json,
    extract::{Query, State},
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireFaculty;
use crate::modules::attendance::model::{
    Attendance, AttendanceFilterParams, MarkAttendanceDto,
};
use crate::modules::attendance::service::AttendanceService;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Mark attendance for a student (faculty). Upserts on (student, course, date).
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendanceDto,
    responses(
        (status = 200, description = "Attendance recorded", body = Attendance),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Faculty only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
#[instrument(skip(state))]
pub async fn mark_attendance(
    _faculty: RequireFaculty,
    State(state): State<AppState>,
    Json(dto): Json<MarkAttendanceDto>,
) -> Result<Json<Attendance>, AppError> {
    let attendance = AttendanceService::mark(&state.db, dto).await?;
    Ok(Json(attendance))
}

/// List attendance records, filtered by student, course, or date
#[utoipa::path(
    get,
    path = "/api/attendance",
    params(
        ("student_id" = Option<Uuid>, Query, description = "Filter by student profile"),
        ("course_id" = Option<Uuid>, Query, description = "Filter by course"),
        ("date" = Option<String>, Query, description = "Filter by date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Attendance records", body = [Attendance]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
#[instrument(skip(state, _auth))]
pub async fn get_attendance(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<AttendanceFilterParams>,
) -> Result<Json<Vec<Attendance>>, AppError> {
    let records = AttendanceService::list(&state.db, &params).await?;
    Ok(Json(records))
}
