//! Role-based authorization for protected routes.
//!
//! Two forms, both backed by the verified JWT claims:
//! 1. Layer middleware (`require_admin`, `require_faculty`) for routers
//!    where every route shares one role requirement.
//! 2. Extractors (`RequireAdmin`, `RequireFaculty`) for routers that mix
//!    public and role-gated handlers.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: Vec<UserRole>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    if !allowed_roles.contains(&auth_user.role()) {
        return Err(AppError::forbidden(format!(
            "Access denied. Required roles: {:?}, but user has role: {:?}",
            allowed_roles,
            auth_user.role()
        )));
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![UserRole::Admin]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

pub async fn require_faculty(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(
        State(state),
        req,
        next,
        vec![UserRole::Admin, UserRole::Faculty],
    )
    .await
    {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Extractor for admin-only handlers inside routers with public routes.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        if !auth_user.is_admin() {
            return Err(AppError::forbidden(
                "Access denied. Administrator privileges required.",
            ));
        }

        Ok(RequireAdmin(auth_user))
    }
}

/// Extractor for faculty-level handlers (faculty members and admins).
#[derive(Debug, Clone)]
pub struct RequireFaculty(pub AuthUser);

impl FromRequestParts<AppState> for RequireFaculty {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        if !auth_user.is_faculty() {
            return Err(AppError::forbidden(
                "Access denied. Faculty privileges required.",
            ));
        }

        Ok(RequireFaculty(auth_user))
    }
}
