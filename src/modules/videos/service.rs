use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::videos::model::{
    CreateVideoLectureDto, UpdateVideoLectureDto, VideoFilterParams, VideoLecture,
};
use crate::utils::errors::AppError;

const VIDEO_COLUMNS: &str = "id, course_id, faculty_id, title, video_url, thumbnail_url, \
                             duration, chapter, topic, is_published, created_at";

pub struct VideoService;

impl VideoService {
    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        dto: CreateVideoLectureDto,
        faculty_id: Uuid,
    ) -> Result<VideoLecture, AppError> {
        let video = sqlx::query_as::<_, VideoLecture>(&format!(
            "INSERT INTO video_lectures
                 (course_id, faculty_id, title, video_url, thumbnail_url,
                  duration, chapter, topic, is_published)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {VIDEO_COLUMNS}"
        ))
        .bind(dto.course_id)
        .bind(faculty_id)
        .bind(&dto.title)
        .bind(&dto.video_url)
        .bind(&dto.thumbnail_url)
        .bind(&dto.duration)
        .bind(&dto.chapter)
        .bind(&dto.topic)
        .bind(dto.is_published)
        .fetch_one(db)
        .await
        .context("Failed to create video lecture")
        .map_err(AppError::database)?;

        Ok(video)
    }

    /// Public/student listing. The publication gate is applied here, in
    /// SQL, so no unpublished row can leak through a response mapping.
    #[instrument(skip(db))]
    pub async fn list_published(
        db: &PgPool,
        params: &VideoFilterParams,
    ) -> Result<Vec<VideoLecture>, AppError> {
        let videos = sqlx::query_as::<_, VideoLecture>(&format!(
            "SELECT {VIDEO_COLUMNS}
             FROM video_lectures
             WHERE is_published = TRUE
               AND ($1::UUID IS NULL OR course_id = $1)
               AND ($2::TEXT IS NULL OR chapter = $2)
             ORDER BY created_at DESC"
        ))
        .bind(params.course_id)
        .bind(&params.chapter)
        .fetch_all(db)
        .await
        .context("Failed to fetch published videos")
        .map_err(AppError::database)?;

        Ok(videos)
    }

    /// Faculty listing: everything, including unpublished drafts.
    #[instrument(skip(db))]
    pub async fn list_all(
        db: &PgPool,
        params: &VideoFilterParams,
    ) -> Result<Vec<VideoLecture>, AppError> {
        let videos = sqlx::query_as::<_, VideoLecture>(&format!(
            "SELECT {VIDEO_COLUMNS}
             FROM video_lectures
             WHERE ($1::UUID IS NULL OR course_id = $1)
               AND ($2::TEXT IS NULL OR chapter = $2)
             ORDER BY created_at DESC"
        ))
        .bind(params.course_id)
        .bind(&params.chapter)
        .fetch_all(db)
        .await
        .context("Failed to fetch videos")
        .map_err(AppError::database)?;

        Ok(videos)
    }

    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        dto: UpdateVideoLectureDto,
    ) -> Result<VideoLecture, AppError> {
        let existing = sqlx::query_as::<_, VideoLecture>(&format!(
            "SELECT {VIDEO_COLUMNS} FROM video_lectures WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch video lecture")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Video lecture not found")))?;

        let video = sqlx::query_as::<_, VideoLecture>(&format!(
            "UPDATE video_lectures
             SET title = $1, video_url = $2, thumbnail_url = $3, duration = $4,
                 chapter = $5, topic = $6, is_published = $7
             WHERE id = $8
             RETURNING {VIDEO_COLUMNS}"
        ))
        .bind(dto.title.unwrap_or(existing.title))
        .bind(dto.video_url.unwrap_or(existing.video_url))
        .bind(dto.thumbnail_url.or(existing.thumbnail_url))
        .bind(dto.duration.or(existing.duration))
        .bind(dto.chapter.or(existing.chapter))
        .bind(dto.topic.or(existing.topic))
        .bind(dto.is_published.unwrap_or(existing.is_published))
        .bind(id)
        .fetch_one(db)
        .await
        .context("Failed to update video lecture")
        .map_err(AppError::database)?;

        Ok(video)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM video_lectures WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete video lecture")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Video lecture not found"
            )));
        }

        Ok(())
    }
}
