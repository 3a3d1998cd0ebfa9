use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::serde::deserialize_optional_uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Assignment {
    pub id: Uuid,
    pub course_id: Uuid,
    pub faculty_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub due_date: DateTime<Utc>,
    pub max_marks: i32,
    pub attachments: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Submission lifecycle: submitted (marks/feedback/graded_at all null),
/// then graded. Resubmission before grading overwrites the first phase.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AssignmentSubmission {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub student_id: Uuid,
    pub submission_text: Option<String>,
    pub attachments: Vec<String>,
    pub submitted_at: DateTime<Utc>,
    pub marks: Option<i32>,
    pub feedback: Option<String>,
    pub graded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAssignmentDto {
    pub course_id: Uuid,
    /// Required for admin callers; faculty callers are attributed from
    /// their own profile and this field is ignored.
    pub faculty_id: Option<Uuid>,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub due_date: DateTime<Utc>,
    #[validate(range(min = 1, message = "Max marks must be positive"))]
    pub max_marks: i32,
    #[serde(default)]
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateAssignmentDto {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    #[validate(range(min = 1, message = "Max marks must be positive"))]
    pub max_marks: Option<i32>,
    pub attachments: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubmitAssignmentDto {
    pub submission_text: Option<String>,
    #[serde(default)]
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct GradeSubmissionDto {
    #[validate(range(min = 0, message = "Marks cannot be negative"))]
    pub marks: i32,
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AssignmentFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub course_id: Option<Uuid>,
}
