use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// `is_approved` is the moderation gate: submissions start unapproved and
/// only approved rows reach the public listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Testimonial {
    pub id: Uuid,
    pub student_name: String,
    pub parent_name: Option<String>,
    pub class: Option<String>,
    pub rating: i32,
    pub message: String,
    pub photo_url: Option<String>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTestimonialDto {
    #[serde(alias = "studentName")]
    #[validate(length(min = 1, message = "Student name is required"))]
    pub student_name: String,
    #[serde(alias = "parentName")]
    pub parent_name: Option<String>,
    pub class: Option<String>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
    #[serde(alias = "photoUrl")]
    pub photo_url: Option<String>,
}
