use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::modules::auth::model::Claims;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that validates the bearer token and exposes the caller's
/// verified claims. The role carried here is the only role authorization
/// decisions are allowed to trust.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.0.sub)
            .map_err(|_| AppError::unauthorized("Invalid user ID in token"))
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn role(&self) -> UserRole {
        self.0.role
    }

    pub fn is_admin(&self) -> bool {
        self.0.role == UserRole::Admin
    }

    /// Faculty-level access: faculty members and admins.
    pub fn is_faculty(&self) -> bool {
        matches!(self.0.role, UserRole::Admin | UserRole::Faculty)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_with_role(role: UserRole) -> Claims {
        Claims {
            sub: Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            role,
            exp: 9999999999,
            iat: 1234567890,
        }
    }

    #[test]
    fn test_is_admin() {
        assert!(AuthUser(claims_with_role(UserRole::Admin)).is_admin());
        assert!(!AuthUser(claims_with_role(UserRole::Faculty)).is_admin());
        assert!(!AuthUser(claims_with_role(UserRole::Student)).is_admin());
    }

    #[test]
    fn test_is_faculty_includes_admin() {
        assert!(AuthUser(claims_with_role(UserRole::Admin)).is_faculty());
        assert!(AuthUser(claims_with_role(UserRole::Faculty)).is_faculty());
        assert!(!AuthUser(claims_with_role(UserRole::Parent)).is_faculty());
        assert!(!AuthUser(claims_with_role(UserRole::Student)).is_faculty());
    }

    #[test]
    fn test_user_id_round_trip() {
        let user_id = Uuid::new_v4();
        let claims = Claims {
            sub: user_id.to_string(),
            email: "test@example.com".to_string(),
            role: UserRole::Student,
            exp: 9999999999,
            iat: 1234567890,
        };

        assert_eq!(AuthUser(claims).user_id().unwrap(), user_id);
    }
}
