use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::serde::deserialize_optional_uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "session_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum SessionStatus {
    Scheduled,
    Live,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LiveSession {
    pub id: Uuid,
    pub course_id: Uuid,
    pub faculty_id: Uuid,
    pub title: String,
    pub session_type: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub meeting_link: Option<String>,
    pub status: SessionStatus,
    /// Set once a completed session has its recording uploaded.
    pub recording_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateLiveSessionDto {
    pub course_id: Uuid,
    pub faculty_id: Option<Uuid>,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Session type is required"))]
    pub session_type: String,
    pub scheduled_at: DateTime<Utc>,
    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration_minutes: i32,
    pub meeting_link: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateLiveSessionDto {
    pub title: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
    pub meeting_link: Option<String>,
    pub status: Option<SessionStatus>,
    pub recording_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LiveSessionFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub course_id: Option<Uuid>,
    pub status: Option<SessionStatus>,
}
