use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::grades::model::{CreateGradeDto, Grade, GradeFilterParams};
use crate::utils::errors::AppError;

const GRADE_COLUMNS: &str =
    "id, student_id, course_id, exam_name, marks, max_marks, grade, remarks, created_at";

pub struct GradeService;

impl GradeService {
    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreateGradeDto) -> Result<Grade, AppError> {
        if dto.marks > dto.max_marks {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Marks cannot exceed max marks"
            )));
        }

        let grade = sqlx::query_as::<_, Grade>(&format!(
            "INSERT INTO grades
                 (student_id, course_id, exam_name, marks, max_marks, grade, remarks)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {GRADE_COLUMNS}"
        ))
        .bind(dto.student_id)
        .bind(dto.course_id)
        .bind(&dto.exam_name)
        .bind(dto.marks)
        .bind(dto.max_marks)
        .bind(&dto.grade)
        .bind(&dto.remarks)
        .fetch_one(db)
        .await
        .context("Failed to create grade")
        .map_err(AppError::database)?;

        Ok(grade)
    }

    #[instrument(skip(db))]
    pub async fn list(db: &PgPool, params: &GradeFilterParams) -> Result<Vec<Grade>, AppError> {
        let grades = sqlx::query_as::<_, Grade>(&format!(
            "SELECT {GRADE_COLUMNS}
             FROM grades
             WHERE ($1::UUID IS NULL OR student_id = $1)
               AND ($2::UUID IS NULL OR course_id = $2)
               AND ($3::TEXT IS NULL OR exam_name = $3)
             ORDER BY created_at DESC"
        ))
        .bind(params.student_id)
        .bind(params.course_id)
        .bind(&params.exam_name)
        .fetch_all(db)
        .await
        .context("Failed to fetch grades")
        .map_err(AppError::database)?;

        Ok(grades)
    }
}
