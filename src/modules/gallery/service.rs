use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::gallery::model::{
    CreateGalleryImageDto, GalleryFilterParams, GalleryImage,
};
use crate::utils::errors::AppError;

const IMAGE_COLUMNS: &str = "id, title, category, image_url, description, taken_on, created_at";

pub struct GalleryService;

impl GalleryService {
    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreateGalleryImageDto) -> Result<GalleryImage, AppError> {
        let image = sqlx::query_as::<_, GalleryImage>(&format!(
            "INSERT INTO gallery_images (title, category, image_url, description, taken_on)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {IMAGE_COLUMNS}"
        ))
        .bind(&dto.title)
        .bind(&dto.category)
        .bind(&dto.image_url)
        .bind(&dto.description)
        .bind(dto.taken_on)
        .fetch_one(db)
        .await
        .context("Failed to create gallery image")
        .map_err(AppError::database)?;

        Ok(image)
    }

    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        params: &GalleryFilterParams,
    ) -> Result<Vec<GalleryImage>, AppError> {
        let images = sqlx::query_as::<_, GalleryImage>(&format!(
            "SELECT {IMAGE_COLUMNS}
             FROM gallery_images
             WHERE ($1::TEXT IS NULL OR category = $1)
             ORDER BY created_at DESC"
        ))
        .bind(&params.category)
        .fetch_all(db)
        .await
        .context("Failed to fetch gallery images")
        .map_err(AppError::database)?;

        Ok(images)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM gallery_images WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete gallery image")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Gallery image not found"
            )));
        }

        Ok(())
    }
}
