use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::announcements::model::{
    Announcement, AnnouncementFilterParams, CreateAnnouncementDto, UpdateAnnouncementDto,
};
use crate::utils::errors::AppError;

const ANNOUNCEMENT_COLUMNS: &str =
    "id, title, content, faculty_id, target_role, is_pinned, created_at";

pub struct AnnouncementService;

impl AnnouncementService {
    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        dto: CreateAnnouncementDto,
        faculty_id: Option<Uuid>,
    ) -> Result<Announcement, AppError> {
        let announcement = sqlx::query_as::<_, Announcement>(&format!(
            "INSERT INTO announcements (title, content, faculty_id, target_role, is_pinned)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {ANNOUNCEMENT_COLUMNS}"
        ))
        .bind(&dto.title)
        .bind(&dto.content)
        .bind(faculty_id)
        .bind(&dto.target_role)
        .bind(dto.is_pinned)
        .fetch_one(db)
        .await
        .context("Failed to create announcement")
        .map_err(AppError::database)?;

        Ok(announcement)
    }

    /// Pinned rows first, then newest first.
    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        params: &AnnouncementFilterParams,
    ) -> Result<Vec<Announcement>, AppError> {
        let announcements = sqlx::query_as::<_, Announcement>(&format!(
            "SELECT {ANNOUNCEMENT_COLUMNS}
             FROM announcements
             WHERE ($1::TEXT IS NULL OR target_role = 'all' OR target_role = $1)
             ORDER BY is_pinned DESC, created_at DESC"
        ))
        .bind(&params.target_role)
        .fetch_all(db)
        .await
        .context("Failed to fetch announcements")
        .map_err(AppError::database)?;

        Ok(announcements)
    }

    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        dto: UpdateAnnouncementDto,
    ) -> Result<Announcement, AppError> {
        let existing = sqlx::query_as::<_, Announcement>(&format!(
            "SELECT {ANNOUNCEMENT_COLUMNS} FROM announcements WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch announcement")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Announcement not found")))?;

        let announcement = sqlx::query_as::<_, Announcement>(&format!(
            "UPDATE announcements
             SET title = $1, content = $2, target_role = $3, is_pinned = $4
             WHERE id = $5
             RETURNING {ANNOUNCEMENT_COLUMNS}"
        ))
        .bind(dto.title.unwrap_or(existing.title))
        .bind(dto.content.unwrap_or(existing.content))
        .bind(dto.target_role.unwrap_or(existing.target_role))
        .bind(dto.is_pinned.unwrap_or(existing.is_pinned))
        .bind(id)
        .fetch_one(db)
        .await
        .context("Failed to update announcement")
        .map_err(AppError::database)?;

        Ok(announcement)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete announcement")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Announcement not found"
            )));
        }

        Ok(())
    }
}
