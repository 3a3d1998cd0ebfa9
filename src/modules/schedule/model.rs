use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::serde::deserialize_optional_uuid;

/// A recurring weekly slot declaration. Nothing checks for room or faculty
/// double-booking; slots are plain declarative rows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ScheduleSlot {
    pub id: Uuid,
    pub course_id: Uuid,
    pub faculty_id: Option<Uuid>,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
    pub subject: String,
    pub room_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateScheduleSlotDto {
    pub course_id: Uuid,
    pub faculty_id: Option<Uuid>,
    #[validate(length(min = 1, message = "Day of week is required"))]
    pub day_of_week: String,
    #[validate(length(min = 1, message = "Start time is required"))]
    pub start_time: String,
    #[validate(length(min = 1, message = "End time is required"))]
    pub end_time: String,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    pub room_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateScheduleSlotDto {
    pub faculty_id: Option<Uuid>,
    pub day_of_week: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub subject: Option<String>,
    pub room_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ScheduleFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub course_id: Option<Uuid>,
    pub day_of_week: Option<String>,
}
