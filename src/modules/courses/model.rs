use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::serde::{deserialize_fee, deserialize_optional_fee};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub subjects: Vec<String>,
    pub target_class: String,
    pub fee: f64,
    pub duration: Option<String>,
    pub features: Vec<String>,
    pub syllabus: Option<String>,
    pub is_active: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(length(min = 1, message = "Course name is required"))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[validate(length(min = 1, message = "Target class is required"))]
    pub target_class: String,
    #[serde(deserialize_with = "deserialize_fee")]
    pub fee: f64,
    pub duration: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub syllabus: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseDto {
    #[validate(length(min = 1, message = "Course name cannot be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub subjects: Option<Vec<String>>,
    pub target_class: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_fee")]
    pub fee: Option<f64>,
    pub duration: Option<String>,
    pub features: Option<Vec<String>>,
    pub syllabus: Option<String>,
    pub is_active: Option<bool>,
    pub image_url: Option<String>,
}

/// `search` matches course name or description by substring; `active`
/// restricts to (in)active courses, defaulting to everything.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CourseFilterParams {
    pub search: Option<String>,
    pub active: Option<bool>,
}
