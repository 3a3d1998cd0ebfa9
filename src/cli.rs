//! Bootstrap commands for the main binary. Admin accounts are created here
//! rather than through the registration endpoint.

use sqlx::PgPool;

use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

pub async fn create_admin(
    pool: &PgPool,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<(), AppError> {
    let existing = sqlx::query_scalar::<_, uuid::Uuid>("SELECT id FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(AppError::database)?;

    if existing.is_some() {
        return Err(AppError::conflict(anyhow::anyhow!(
            "A user with email {} already exists",
            email
        )));
    }

    let hashed = hash_password(password)?;

    sqlx::query(
        "INSERT INTO users (email, password, role, first_name, last_name)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(email)
    .bind(&hashed)
    .bind(UserRole::Admin)
    .bind(first_name)
    .bind(last_name)
    .execute(pool)
    .await
    .map_err(AppError::database)?;

    Ok(())
}
