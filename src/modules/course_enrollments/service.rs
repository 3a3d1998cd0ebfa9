use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::course_enrollments::model::{
    CourseEnrollment, CourseEnrollmentFilterParams, CreateCourseEnrollmentDto, EnrollmentStatus,
};
use crate::utils::errors::AppError;

const COLUMNS: &str = "id, student_id, course_id, status, enrollment_date";

pub struct CourseEnrollmentService;

impl CourseEnrollmentService {
    #[instrument(skip(db))]
    pub async fn create(
        db: &PgPool,
        dto: CreateCourseEnrollmentDto,
    ) -> Result<CourseEnrollment, AppError> {
        let student_exists =
            sqlx::query_scalar::<_, Uuid>("SELECT id FROM student_profiles WHERE id = $1")
                .bind(dto.student_id)
                .fetch_optional(db)
                .await
                .context("Failed to check student")
                .map_err(AppError::database)?;

        if student_exists.is_none() {
            return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
        }

        let course_exists = sqlx::query_scalar::<_, Uuid>("SELECT id FROM courses WHERE id = $1")
            .bind(dto.course_id)
            .fetch_optional(db)
            .await
            .context("Failed to check course")
            .map_err(AppError::database)?;

        if course_exists.is_none() {
            return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
        }

        let enrollment = sqlx::query_as::<_, CourseEnrollment>(&format!(
            "INSERT INTO course_enrollments (student_id, course_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        ))
        .bind(dto.student_id)
        .bind(dto.course_id)
        .fetch_one(db)
        .await
        .context("Failed to create course enrollment")
        .map_err(AppError::database)?;

        Ok(enrollment)
    }

    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        params: &CourseEnrollmentFilterParams,
    ) -> Result<Vec<CourseEnrollment>, AppError> {
        let enrollments = sqlx::query_as::<_, CourseEnrollment>(&format!(
            "SELECT {COLUMNS}
             FROM course_enrollments
             WHERE ($1::UUID IS NULL OR student_id = $1)
               AND ($2::UUID IS NULL OR course_id = $2)
             ORDER BY enrollment_date DESC"
        ))
        .bind(params.student_id)
        .bind(params.course_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch course enrollments")
        .map_err(AppError::database)?;

        Ok(enrollments)
    }

    #[instrument(skip(db))]
    pub async fn update_status(
        db: &PgPool,
        id: Uuid,
        status: EnrollmentStatus,
    ) -> Result<CourseEnrollment, AppError> {
        sqlx::query_as::<_, CourseEnrollment>(&format!(
            "UPDATE course_enrollments SET status = $1 WHERE id = $2
             RETURNING {COLUMNS}"
        ))
        .bind(status)
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to update course enrollment")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course enrollment not found")))
    }
}
