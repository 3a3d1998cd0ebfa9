use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::schedule::model::{
    CreateScheduleSlotDto, ScheduleFilterParams, ScheduleSlot, UpdateScheduleSlotDto,
};
use crate::utils::errors::AppError;

const SLOT_COLUMNS: &str = "id, course_id, faculty_id, day_of_week, start_time, end_time, \
                            subject, room_number, created_at";

pub struct ScheduleService;

impl ScheduleService {
    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreateScheduleSlotDto) -> Result<ScheduleSlot, AppError> {
        let slot = sqlx::query_as::<_, ScheduleSlot>(&format!(
            "INSERT INTO schedule
                 (course_id, faculty_id, day_of_week, start_time, end_time, subject, room_number)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {SLOT_COLUMNS}"
        ))
        .bind(dto.course_id)
        .bind(dto.faculty_id)
        .bind(&dto.day_of_week)
        .bind(&dto.start_time)
        .bind(&dto.end_time)
        .bind(&dto.subject)
        .bind(&dto.room_number)
        .fetch_one(db)
        .await
        .context("Failed to create schedule slot")
        .map_err(AppError::database)?;

        Ok(slot)
    }

    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        params: &ScheduleFilterParams,
    ) -> Result<Vec<ScheduleSlot>, AppError> {
        let slots = sqlx::query_as::<_, ScheduleSlot>(&format!(
            "SELECT {SLOT_COLUMNS}
             FROM schedule
             WHERE ($1::UUID IS NULL OR course_id = $1)
               AND ($2::TEXT IS NULL OR day_of_week = $2)
             ORDER BY day_of_week, start_time"
        ))
        .bind(params.course_id)
        .bind(&params.day_of_week)
        .fetch_all(db)
        .await
        .context("Failed to fetch schedule")
        .map_err(AppError::database)?;

        Ok(slots)
    }

    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        dto: UpdateScheduleSlotDto,
    ) -> Result<ScheduleSlot, AppError> {
        let existing = sqlx::query_as::<_, ScheduleSlot>(&format!(
            "SELECT {SLOT_COLUMNS} FROM schedule WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch schedule slot")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Schedule slot not found")))?;

        let slot = sqlx::query_as::<_, ScheduleSlot>(&format!(
            "UPDATE schedule
             SET faculty_id = $1, day_of_week = $2, start_time = $3, end_time = $4,
                 subject = $5, room_number = $6
             WHERE id = $7
             RETURNING {SLOT_COLUMNS}"
        ))
        .bind(dto.faculty_id.or(existing.faculty_id))
        .bind(dto.day_of_week.unwrap_or(existing.day_of_week))
        .bind(dto.start_time.unwrap_or(existing.start_time))
        .bind(dto.end_time.unwrap_or(existing.end_time))
        .bind(dto.subject.unwrap_or(existing.subject))
        .bind(dto.room_number.or(existing.room_number))
        .bind(id)
        .fetch_one(db)
        .await
        .context("Failed to update schedule slot")
        .map_err(AppError::database)?;

        Ok(slot)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM schedule WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete schedule slot")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Schedule slot not found"
            )));
        }

        Ok(())
    }
}
