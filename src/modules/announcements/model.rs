use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Notices for the portals. `target_role` is "all" or a role name; pinned
/// announcements sort ahead of everything else.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Announcement {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub faculty_id: Option<Uuid>,
    pub target_role: String,
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
}

fn default_target_role() -> String {
    "all".to_string()
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAnnouncementDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[serde(default = "default_target_role")]
    pub target_role: String,
    #[serde(default)]
    pub is_pinned: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateAnnouncementDto {
    pub title: Option<String>,
    pub content: Option<String>,
    pub target_role: Option<String>,
    pub is_pinned: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AnnouncementFilterParams {
    /// Role to fetch announcements for; rows targeting "all" always match.
    pub target_role: Option<String>,
}
