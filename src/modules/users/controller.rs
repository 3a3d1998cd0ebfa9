use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::{PaginatedUsersResponse, UserFilterParams, UserWithProfile};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[utoipa::path(
    get,
    path = "/api/users",
    params(
        ("role" = Option<String>, Query, description = "Filter by role"),
        ("search" = Option<String>, Query, description = "Substring match on name or email"),
        ("limit" = Option<i64>, Query, description = "Page size"),
        ("offset" = Option<i64>, Query, description = "Page offset")
    ),
    responses(
        (status = 200, description = "List of users with profiles", body = PaginatedUsersResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Admin only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    Query(params): Query<UserFilterParams>,
) -> Result<Json<PaginatedUsersResponse>, AppError> {
    let (users, total) = UserService::get_users(&state.db, &params).await?;

    Ok(Json(PaginatedUsersResponse {
        data: users,
        meta: params.pagination.meta(total),
    }))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User with profile", body = UserWithProfile),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Admin only", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserWithProfile>, AppError> {
    let user = UserService::get_user(&state.db, id).await?;
    Ok(Json(user))
}
