use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::enrollments::model::{
    ApplicationStatus, CreateEnrollmentDto, Enrollment, EnrollmentFilterParams,
};
use crate::utils::errors::AppError;

const ENROLLMENT_COLUMNS: &str =
    "id, student_name, parent_name, email, phone, class, medium, course, status, created_at";

pub struct EnrollmentService;

impl EnrollmentService {
    /// Creates a new application. The status column defaults to PENDING;
    /// nothing the client sends can override it.
    #[instrument(skip(db, dto))]
    pub async fn create_enrollment(
        db: &PgPool,
        dto: CreateEnrollmentDto,
    ) -> Result<Enrollment, AppError> {
        let enrollment = sqlx::query_as::<_, Enrollment>(&format!(
            "INSERT INTO enrollments
                 (student_name, parent_name, email, phone, class, medium, course)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {ENROLLMENT_COLUMNS}"
        ))
        .bind(&dto.student_name)
        .bind(&dto.parent_name)
        .bind(&dto.email)
        .bind(dto.phone.as_deref().unwrap_or(""))
        .bind(&dto.class)
        .bind(dto.medium.as_deref().unwrap_or(""))
        .bind(dto.course.as_deref().unwrap_or(""))
        .fetch_one(db)
        .await
        .context("Failed to create enrollment")
        .map_err(AppError::database)?;

        Ok(enrollment)
    }

    #[instrument(skip(db))]
    pub async fn get_enrollments(
        db: &PgPool,
        params: &EnrollmentFilterParams,
    ) -> Result<(Vec<Enrollment>, i64), AppError> {
        let enrollments = sqlx::query_as::<_, Enrollment>(&format!(
            "SELECT {ENROLLMENT_COLUMNS}
             FROM enrollments
             WHERE ($1::application_status IS NULL OR status = $1)
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        ))
        .bind(params.status)
        .bind(params.pagination.limit())
        .bind(params.pagination.offset())
        .fetch_all(db)
        .await
        .context("Failed to fetch enrollments")
        .map_err(AppError::database)?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM enrollments
             WHERE ($1::application_status IS NULL OR status = $1)",
        )
        .bind(params.status)
        .fetch_one(db)
        .await
        .context("Failed to count enrollments")
        .map_err(AppError::database)?;

        Ok((enrollments, total))
    }

    /// Moves an application to a review outcome. PENDING is the initial
    /// state only; it is not a valid target.
    #[instrument(skip(db))]
    pub async fn update_status(
        db: &PgPool,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Enrollment, AppError> {
        if status == ApplicationStatus::Pending {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Status must be ACTIVE or REJECTED"
            )));
        }

        sqlx::query_as::<_, Enrollment>(&format!(
            "UPDATE enrollments SET status = $1 WHERE id = $2
             RETURNING {ENROLLMENT_COLUMNS}"
        ))
        .bind(status)
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to update enrollment status")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Enrollment not found")))
    }
}
