use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::pagination::{PaginationMeta, PaginationParams};

/// Lifecycle of a public enrollment application: created PENDING, reviewed
/// by an admin into ACTIVE or REJECTED. Both review outcomes are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "application_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ApplicationStatus {
    Pending,
    Active,
    Rejected,
}

/// A lead captured by the public enroll form. `course` is whatever the
/// applicant typed, not a catalog reference; no account exists yet.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Enrollment {
    pub id: Uuid,
    pub student_name: String,
    pub parent_name: String,
    pub email: String,
    pub phone: String,
    pub class: String,
    pub medium: String,
    pub course: String,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

/// Public creation payload. Status is not accepted from the client; every
/// application starts PENDING. The camelCase aliases keep the existing
/// site forms working unchanged.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateEnrollmentDto {
    #[serde(alias = "studentName")]
    #[validate(length(min = 1, message = "Student name is required"))]
    pub student_name: String,
    #[serde(alias = "parentName")]
    #[validate(length(min = 1, message = "Parent name is required"))]
    pub parent_name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Class is required"))]
    pub class: String,
    pub medium: Option<String>,
    pub course: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateEnrollmentStatusDto {
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EnrollmentFilterParams {
    pub status: Option<ApplicationStatus>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginatedEnrollmentsResponse {
    pub data: Vec<Enrollment>,
    pub meta: PaginationMeta,
}
