use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::attendance::model::{
    Attendance, AttendanceFilterParams, MarkAttendanceDto,
};
use crate::utils::errors::AppError;

const ATTENDANCE_COLUMNS: &str = "id, student_id, course_id, date, status, created_at";

pub struct AttendanceService;

impl AttendanceService {
    /// Idempotent per (student, course, date): the database upsert is the
    /// atomicity boundary, no application-level locking.
    #[instrument(skip(db))]
    pub async fn mark(db: &PgPool, dto: MarkAttendanceDto) -> Result<Attendance, AppError> {
        let attendance = sqlx::query_as::<_, Attendance>(&format!(
            "INSERT INTO attendance (student_id, course_id, date, status)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (student_id, course_id, date)
             DO UPDATE SET status = EXCLUDED.status
             RETURNING {ATTENDANCE_COLUMNS}"
        ))
        .bind(dto.student_id)
        .bind(dto.course_id)
        .bind(dto.date)
        .bind(dto.status)
        .fetch_one(db)
        .await
        .context("Failed to mark attendance")
        .map_err(AppError::database)?;

        Ok(attendance)
    }

    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        params: &AttendanceFilterParams,
    ) -> Result<Vec<Attendance>, AppError> {
        let records = sqlx::query_as::<_, Attendance>(&format!(
            "SELECT {ATTENDANCE_COLUMNS}
             FROM attendance
             WHERE ($1::UUID IS NULL OR student_id = $1)
               AND ($2::UUID IS NULL OR course_id = $2)
               AND ($3::DATE IS NULL OR date = $3)
             ORDER BY date DESC"
        ))
        .bind(params.student_id)
        .bind(params.course_id)
        .bind(params.date)
        .fetch_all(db)
        .await
        .context("Failed to fetch attendance")
        .map_err(AppError::database)?;

        Ok(records)
    }
}
