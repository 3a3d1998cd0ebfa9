//! User and profile models.
//!
//! Every account has exactly one of the three role profiles (except
//! admins, which have none). Profiles are created in the same transaction
//! as the user row; see the auth module.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::utils::pagination::{PaginationMeta, PaginationParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    Faculty,
    Parent,
    Student,
}

impl UserRole {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ADMIN" => Some(UserRole::Admin),
            "FACULTY" => Some(UserRole::Faculty),
            "PARENT" => Some(UserRole::Parent),
            "STUDENT" => Some(UserRole::Student),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Faculty => "FACULTY",
            UserRole::Parent => "PARENT",
            UserRole::Student => "STUDENT",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account. The password hash never leaves the service layer; this
/// struct is what every response serializes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StudentProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date_of_birth: Option<NaiveDate>,
    pub class: String,
    pub medium: String,
    pub school_name: Option<String>,
    /// Weak reference to a parent profile, lookup only.
    pub parent_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ParentProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub occupation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FacultyProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub qualification: Option<String>,
    pub subjects: Vec<String>,
    pub experience_years: i32,
    pub bio: Option<String>,
    pub is_owner: bool,
}

/// A user together with whichever role profile is attached.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserWithProfile {
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_profile: Option<StudentProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_profile: Option<ParentProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty_profile: Option<FacultyProfile>,
}

/// Query parameters for filtering the user list. `search` matches first
/// name, last name, or email by substring.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserFilterParams {
    pub role: Option<UserRole>,
    pub search: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginatedUsersResponse {
    pub data: Vec<UserWithProfile>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!(UserRole::parse("student"), Some(UserRole::Student));
        assert_eq!(UserRole::parse("FACULTY"), Some(UserRole::Faculty));
        assert_eq!(UserRole::parse("Admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::parse("teacher"), None);
    }

    #[test]
    fn test_role_round_trip() {
        for role in [
            UserRole::Admin,
            UserRole::Faculty,
            UserRole::Parent,
            UserRole::Student,
        ] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
    }
}
