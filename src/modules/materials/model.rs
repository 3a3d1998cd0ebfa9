use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::serde::deserialize_optional_uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CourseMaterial {
    pub id: Uuid,
    pub course_id: Uuid,
    pub faculty_id: Uuid,
    pub title: String,
    pub file_url: String,
    pub file_type: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCourseMaterialDto {
    pub course_id: Uuid,
    pub faculty_id: Option<Uuid>,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "File URL is required"))]
    pub file_url: String,
    #[validate(length(min = 1, message = "File type is required"))]
    pub file_type: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MaterialFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub course_id: Option<Uuid>,
}
