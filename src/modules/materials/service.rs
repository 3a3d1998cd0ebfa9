use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::materials::model::{
    CourseMaterial, CreateCourseMaterialDto, MaterialFilterParams,
};
use crate::utils::errors::AppError;

const MATERIAL_COLUMNS: &str = "id, course_id, faculty_id, title, file_url, file_type, created_at";

pub struct MaterialService;

impl MaterialService {
    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        dto: CreateCourseMaterialDto,
        faculty_id: Uuid,
    ) -> Result<CourseMaterial, AppError> {
        let material = sqlx::query_as::<_, CourseMaterial>(&format!(
            "INSERT INTO course_materials (course_id, faculty_id, title, file_url, file_type)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {MATERIAL_COLUMNS}"
        ))
        .bind(dto.course_id)
        .bind(faculty_id)
        .bind(&dto.title)
        .bind(&dto.file_url)
        .bind(&dto.file_type)
        .fetch_one(db)
        .await
        .context("Failed to create course material")
        .map_err(AppError::database)?;

        Ok(material)
    }

    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        params: &MaterialFilterParams,
    ) -> Result<Vec<CourseMaterial>, AppError> {
        let materials = sqlx::query_as::<_, CourseMaterial>(&format!(
            "SELECT {MATERIAL_COLUMNS}
             FROM course_materials
             WHERE ($1::UUID IS NULL OR course_id = $1)
             ORDER BY created_at DESC"
        ))
        .bind(params.course_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch course materials")
        .map_err(AppError::database)?;

        Ok(materials)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM course_materials WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete course material")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Course material not found"
            )));
        }

        Ok(())
    }
}
