use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::courses::model::{
    Course, CourseFilterParams, CreateCourseDto, UpdateCourseDto,
};
use crate::utils::errors::AppError;

const COURSE_COLUMNS: &str = "id, name, description, subjects, target_class, fee, duration, \
                              features, syllabus, is_active, image_url, created_at, updated_at";

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db, dto))]
    pub async fn create_course(db: &PgPool, dto: CreateCourseDto) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(&format!(
            "INSERT INTO courses
                 (name, description, subjects, target_class, fee, duration,
                  features, syllabus, is_active, image_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COURSE_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(&dto.subjects)
        .bind(&dto.target_class)
        .bind(dto.fee)
        .bind(&dto.duration)
        .bind(&dto.features)
        .bind(&dto.syllabus)
        .bind(dto.is_active)
        .bind(&dto.image_url)
        .fetch_one(db)
        .await
        .context("Failed to create course")
        .map_err(AppError::database)?;

        Ok(course)
    }

    #[instrument(skip(db))]
    pub async fn get_courses(
        db: &PgPool,
        params: &CourseFilterParams,
    ) -> Result<Vec<Course>, AppError> {
        let search_pattern = params.search.as_ref().map(|s| format!("%{}%", s));

        let courses = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS}
             FROM courses
             WHERE ($1::TEXT IS NULL OR name ILIKE $1 OR description ILIKE $1)
               AND ($2::BOOLEAN IS NULL OR is_active = $2)
             ORDER BY created_at DESC"
        ))
        .bind(&search_pattern)
        .bind(params.active)
        .fetch_all(db)
        .await
        .context("Failed to fetch courses")
        .map_err(AppError::database)?;

        Ok(courses)
    }

    #[instrument(skip(db))]
    pub async fn get_course(db: &PgPool, id: Uuid) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch course")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_course(
        db: &PgPool,
        id: Uuid,
        dto: UpdateCourseDto,
    ) -> Result<Course, AppError> {
        let existing = Self::get_course(db, id).await?;

        let course = sqlx::query_as::<_, Course>(&format!(
            "UPDATE courses
             SET name = $1, description = $2, subjects = $3, target_class = $4,
                 fee = $5, duration = $6, features = $7, syllabus = $8,
                 is_active = $9, image_url = $10, updated_at = NOW()
             WHERE id = $11
             RETURNING {COURSE_COLUMNS}"
        ))
        .bind(dto.name.unwrap_or(existing.name))
        .bind(dto.description.or(existing.description))
        .bind(dto.subjects.unwrap_or(existing.subjects))
        .bind(dto.target_class.unwrap_or(existing.target_class))
        .bind(dto.fee.unwrap_or(existing.fee))
        .bind(dto.duration.or(existing.duration))
        .bind(dto.features.unwrap_or(existing.features))
        .bind(dto.syllabus.or(existing.syllabus))
        .bind(dto.is_active.unwrap_or(existing.is_active))
        .bind(dto.image_url.or(existing.image_url))
        .bind(id)
        .fetch_one(db)
        .await
        .context("Failed to update course")
        .map_err(AppError::database)?;

        Ok(course)
    }

    /// Hard delete. Dependent rows go with the course via FK cascade.
    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete course")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
        }

        Ok(())
    }
}
