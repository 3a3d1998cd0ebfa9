use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::serde::deserialize_optional_uuid;

/// A recorded lecture. `is_published` is the visibility gate: unpublished
/// videos never appear in the public/student listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct VideoLecture {
    pub id: Uuid,
    pub course_id: Uuid,
    pub faculty_id: Uuid,
    pub title: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub duration: Option<String>,
    pub chapter: Option<String>,
    pub topic: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateVideoLectureDto {
    pub course_id: Uuid,
    pub faculty_id: Option<Uuid>,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Video URL is required"))]
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub duration: Option<String>,
    pub chapter: Option<String>,
    pub topic: Option<String>,
    #[serde(default)]
    pub is_published: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateVideoLectureDto {
    pub title: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub duration: Option<String>,
    pub chapter: Option<String>,
    pub topic: Option<String>,
    pub is_published: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct VideoFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub course_id: Option<Uuid>,
    pub chapter: Option<String>,
}
