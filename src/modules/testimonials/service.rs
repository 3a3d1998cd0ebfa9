use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::testimonials::model::{CreateTestimonialDto, Testimonial};
use crate::utils::errors::AppError;

const TESTIMONIAL_COLUMNS: &str = "id, student_name, parent_name, class, rating, message, \
                                   photo_url, is_approved, created_at";

pub struct TestimonialService;

impl TestimonialService {
    /// Public submissions land unapproved and wait for moderation.
    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreateTestimonialDto) -> Result<Testimonial, AppError> {
        let testimonial = sqlx::query_as::<_, Testimonial>(&format!(
            "INSERT INTO testimonials
                 (student_name, parent_name, class, rating, message, photo_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {TESTIMONIAL_COLUMNS}"
        ))
        .bind(&dto.student_name)
        .bind(&dto.parent_name)
        .bind(&dto.class)
        .bind(dto.rating)
        .bind(&dto.message)
        .bind(&dto.photo_url)
        .fetch_one(db)
        .await
        .context("Failed to create testimonial")
        .map_err(AppError::database)?;

        Ok(testimonial)
    }

    /// Public listing. The approval gate lives in the query itself.
    #[instrument(skip(db))]
    pub async fn list_approved(db: &PgPool) -> Result<Vec<Testimonial>, AppError> {
        let testimonials = sqlx::query_as::<_, Testimonial>(&format!(
            "SELECT {TESTIMONIAL_COLUMNS}
             FROM testimonials
             WHERE is_approved = TRUE
             ORDER BY created_at DESC"
        ))
        .fetch_all(db)
        .await
        .context("Failed to fetch testimonials")
        .map_err(AppError::database)?;

        Ok(testimonials)
    }

    /// Moderation queue view: everything, pending first.
    #[instrument(skip(db))]
    pub async fn list_all(db: &PgPool) -> Result<Vec<Testimonial>, AppError> {
        let testimonials = sqlx::query_as::<_, Testimonial>(&format!(
            "SELECT {TESTIMONIAL_COLUMNS}
             FROM testimonials
             ORDER BY is_approved, created_at DESC"
        ))
        .fetch_all(db)
        .await
        .context("Failed to fetch testimonials")
        .map_err(AppError::database)?;

        Ok(testimonials)
    }

    #[instrument(skip(db))]
    pub async fn approve(db: &PgPool, id: Uuid) -> Result<Testimonial, AppError> {
        sqlx::query_as::<_, Testimonial>(&format!(
            "UPDATE testimonials SET is_approved = TRUE WHERE id = $1
             RETURNING {TESTIMONIAL_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to approve testimonial")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Testimonial not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete testimonial")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Testimonial not found"
            )));
        }

        Ok(())
    }
}
