use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::{LoginRequest, LoginResponse, RegisterRequest};
use crate::modules::users::model::{User, UserRole, UserWithProfile};
use crate::modules::users::service::UserService;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::{hash_password, verify_password};

/// Internal row carrying the password hash. Never serialized.
#[derive(sqlx::FromRow)]
struct UserAuthRow {
    id: Uuid,
    email: String,
    password: String,
    role: UserRole,
    first_name: String,
    last_name: String,
    phone: Option<String>,
    is_active: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl UserAuthRow {
    fn into_user(self) -> User {
        User {
            id: self.id,
            email: self.email,
            role: self.role,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let row = sqlx::query_as::<_, UserAuthRow>(
            "SELECT id, email, password, role, first_name, last_name, phone,
                    is_active, created_at, updated_at
             FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        // Unknown email and wrong password produce the same response so the
        // endpoint cannot be used to enumerate accounts.
        .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        if !verify_password(&dto.password, &row.password)? {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        // Admins may log into any portal; everyone else must match the
        // portal role they asked for.
        if let Some(requested) = dto.role {
            if row.role != requested && row.role != UserRole::Admin {
                return Err(AppError::unauthorized(format!(
                    "This account is not registered for the {} portal",
                    requested
                )));
            }
        }

        if !row.is_active {
            return Err(AppError::unauthorized("Account is deactivated"));
        }

        let access_token = create_access_token(row.id, &row.email, row.role, jwt_config)?;
        let user = UserService::attach_profile(db, row.into_user()).await?;

        Ok(LoginResponse { access_token, user })
    }

    #[instrument(skip(db, dto))]
    pub async fn register(db: &PgPool, dto: RegisterRequest) -> Result<UserWithProfile, AppError> {
        let role = UserRole::parse(&dto.role)
            .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("Invalid role")))?;

        // Admin accounts are provisioned through the CLI, never the public
        // registration endpoint.
        if role == UserRole::Admin {
            return Err(AppError::forbidden(
                "Admin accounts cannot be registered through the API",
            ));
        }

        let existing = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?;

        if existing.is_some() {
            return Err(AppError::conflict(anyhow::anyhow!("Email already exists")));
        }

        let hashed_password = hash_password(&dto.password)?;

        // The user row and its role profile are one unit: a profile failure
        // rolls the user back.
        let mut tx = db.begin().await.map_err(AppError::database)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password, role, first_name, last_name, phone)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, email, role, first_name, last_name, phone,
                       is_active, created_at, updated_at",
        )
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(role)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.phone)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::database)?;

        match role {
            UserRole::Student => {
                let class = dto
                    .class
                    .filter(|c| !c.is_empty())
                    .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("class is required")))?;
                let medium = dto
                    .medium
                    .filter(|m| !m.is_empty())
                    .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("medium is required")))?;

                sqlx::query(
                    "INSERT INTO student_profiles
                         (user_id, date_of_birth, class, medium, school_name, parent_id)
                     VALUES ($1, $2, $3, $4, $5, $6)",
                )
                .bind(user.id)
                .bind(dto.date_of_birth)
                .bind(&class)
                .bind(&medium)
                .bind(&dto.school_name)
                .bind(dto.parent_id)
                .execute(&mut *tx)
                .await
                .map_err(AppError::database)?;
            }
            UserRole::Parent => {
                sqlx::query("INSERT INTO parent_profiles (user_id, occupation) VALUES ($1, $2)")
                    .bind(user.id)
                    .bind(&dto.occupation)
                    .execute(&mut *tx)
                    .await
                    .map_err(AppError::database)?;
            }
            UserRole::Faculty => {
                sqlx::query(
                    "INSERT INTO faculty_profiles
                         (user_id, qualification, subjects, experience_years, bio)
                     VALUES ($1, $2, $3, $4, $5)",
                )
                .bind(user.id)
                .bind(&dto.qualification)
                .bind(&dto.subjects)
                .bind(dto.experience_years.unwrap_or(0))
                .bind(&dto.bio)
                .execute(&mut *tx)
                .await
                .map_err(AppError::database)?;
            }
            UserRole::Admin => unreachable!("rejected above"),
        }

        tx.commit().await.map_err(AppError::database)?;

        UserService::attach_profile(db, user).await
    }
}
