use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::modules::users::model::{UserRole, UserWithProfile};

/// JWT claims. The role here is set at login from the database row and is
/// the single source of truth for authorization checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: UserRole,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Portal the client is logging into. Optional; when present the
    /// stored role must match unless the account is an admin.
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserWithProfile,
}

/// Registration payload. The role arrives as a string and is parsed in the
/// service so an unknown role surfaces as a validation error rather than a
/// deserialization failure. Profile fields are role-specific; the service
/// checks the ones its role requires.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    pub role: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[serde(alias = "firstName")]
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[serde(alias = "lastName")]
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    pub phone: Option<String>,

    // Student profile fields
    #[serde(alias = "dateOfBirth")]
    pub date_of_birth: Option<NaiveDate>,
    pub class: Option<String>,
    pub medium: Option<String>,
    #[serde(alias = "schoolName")]
    pub school_name: Option<String>,
    #[serde(alias = "parentId")]
    pub parent_id: Option<Uuid>,

    // Parent profile fields
    pub occupation: Option<String>,

    // Faculty profile fields
    pub qualification: Option<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(alias = "experienceYears")]
    pub experience_years: Option<i32>,
    pub bio: Option<String>,
}
