use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::utils::serde::deserialize_optional_uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "enrollment_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum EnrollmentStatus {
    Active,
    Completed,
    Dropped,
}

/// Links an enrolled student account to a catalog course. Distinct from
/// the public application records, which predate any account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CourseEnrollment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub status: EnrollmentStatus,
    pub enrollment_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCourseEnrollmentDto {
    pub student_id: Uuid,
    pub course_id: Uuid,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateCourseEnrollmentStatusDto {
    pub status: EnrollmentStatus,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CourseEnrollmentFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub student_id: Option<Uuid>,
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub course_id: Option<Uuid>,
}
