use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::serde::deserialize_optional_uuid;

/// An exam result. Records are append-only; corrections are new records.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Grade {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub exam_name: String,
    pub marks: i32,
    pub max_marks: i32,
    pub grade: String,
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateGradeDto {
    pub student_id: Uuid,
    pub course_id: Uuid,
    #[validate(length(min = 1, message = "Exam name is required"))]
    pub exam_name: String,
    #[validate(range(min = 0, message = "Marks cannot be negative"))]
    pub marks: i32,
    #[validate(range(min = 1, message = "Max marks must be positive"))]
    pub max_marks: i32,
    #[validate(length(min = 1, message = "Grade is required"))]
    pub grade: String,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GradeFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub student_id: Option<Uuid>,
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub course_id: Option<Uuid>,
    pub exam_name: Option<String>,
}
