use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::sessions::model::{
    CreateLiveSessionDto, LiveSession, LiveSessionFilterParams, UpdateLiveSessionDto,
};
use crate::utils::errors::AppError;

const SESSION_COLUMNS: &str = "id, course_id, faculty_id, title, session_type, scheduled_at, \
                               duration_minutes, meeting_link, status, recording_url, created_at";

pub struct LiveSessionService;

impl LiveSessionService {
    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        dto: CreateLiveSessionDto,
        faculty_id: Uuid,
    ) -> Result<LiveSession, AppError> {
        let session = sqlx::query_as::<_, LiveSession>(&format!(
            "INSERT INTO live_sessions
                 (course_id, faculty_id, title, session_type, scheduled_at,
                  duration_minutes, meeting_link)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {SESSION_COLUMNS}"
        ))
        .bind(dto.course_id)
        .bind(faculty_id)
        .bind(&dto.title)
        .bind(&dto.session_type)
        .bind(dto.scheduled_at)
        .bind(dto.duration_minutes)
        .bind(&dto.meeting_link)
        .fetch_one(db)
        .await
        .context("Failed to create live session")
        .map_err(AppError::database)?;

        Ok(session)
    }

    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        params: &LiveSessionFilterParams,
    ) -> Result<Vec<LiveSession>, AppError> {
        let sessions = sqlx::query_as::<_, LiveSession>(&format!(
            "SELECT {SESSION_COLUMNS}
             FROM live_sessions
             WHERE ($1::UUID IS NULL OR course_id = $1)
               AND ($2::session_status IS NULL OR status = $2)
             ORDER BY scheduled_at"
        ))
        .bind(params.course_id)
        .bind(params.status)
        .fetch_all(db)
        .await
        .context("Failed to fetch live sessions")
        .map_err(AppError::database)?;

        Ok(sessions)
    }

    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        dto: UpdateLiveSessionDto,
    ) -> Result<LiveSession, AppError> {
        let existing = sqlx::query_as::<_, LiveSession>(&format!(
            "SELECT {SESSION_COLUMNS} FROM live_sessions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch live session")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Live session not found")))?;

        let session = sqlx::query_as::<_, LiveSession>(&format!(
            "UPDATE live_sessions
             SET title = $1, scheduled_at = $2, duration_minutes = $3,
                 meeting_link = $4, status = $5, recording_url = $6
             WHERE id = $7
             RETURNING {SESSION_COLUMNS}"
        ))
        .bind(dto.title.unwrap_or(existing.title))
        .bind(dto.scheduled_at.unwrap_or(existing.scheduled_at))
        .bind(dto.duration_minutes.unwrap_or(existing.duration_minutes))
        .bind(dto.meeting_link.or(existing.meeting_link))
        .bind(dto.status.unwrap_or(existing.status))
        .bind(dto.recording_url.or(existing.recording_url))
        .bind(id)
        .fetch_one(db)
        .await
        .context("Failed to update live session")
        .map_err(AppError::database)?;

        Ok(session)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM live_sessions WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete live session")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Live session not found"
            )));
        }

        Ok(())
    }
}
