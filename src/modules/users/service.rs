use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{
    FacultyProfile, ParentProfile, StudentProfile, User, UserFilterParams, UserRole,
    UserWithProfile,
};
use crate::utils::errors::AppError;

const USER_COLUMNS: &str =
    "id, email, role, first_name, last_name, phone, is_active, created_at, updated_at";

/// One row of the user list query: user columns plus the LEFT JOINed
/// profile columns, all nullable on the profile side.
#[derive(sqlx::FromRow)]
struct UserProfileRow {
    id: Uuid,
    email: String,
    role: UserRole,
    first_name: String,
    last_name: String,
    phone: Option<String>,
    is_active: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
    sp_id: Option<Uuid>,
    sp_date_of_birth: Option<chrono::NaiveDate>,
    sp_class: Option<String>,
    sp_medium: Option<String>,
    sp_school_name: Option<String>,
    sp_parent_id: Option<Uuid>,
    pp_id: Option<Uuid>,
    pp_occupation: Option<String>,
    fp_id: Option<Uuid>,
    fp_qualification: Option<String>,
    fp_subjects: Option<Vec<String>>,
    fp_experience_years: Option<i32>,
    fp_bio: Option<String>,
    fp_is_owner: Option<bool>,
}

impl UserProfileRow {
    fn into_user_with_profile(self) -> UserWithProfile {
        let user = User {
            id: self.id,
            email: self.email,
            role: self.role,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        };

        let student_profile = self.sp_id.map(|id| StudentProfile {
            id,
            user_id: user.id,
            date_of_birth: self.sp_date_of_birth,
            class: self.sp_class.unwrap_or_default(),
            medium: self.sp_medium.unwrap_or_default(),
            school_name: self.sp_school_name,
            parent_id: self.sp_parent_id,
        });

        let parent_profile = self.pp_id.map(|id| ParentProfile {
            id,
            user_id: user.id,
            occupation: self.pp_occupation,
        });

        let faculty_profile = self.fp_id.map(|id| FacultyProfile {
            id,
            user_id: user.id,
            qualification: self.fp_qualification,
            subjects: self.fp_subjects.unwrap_or_default(),
            experience_years: self.fp_experience_years.unwrap_or_default(),
            bio: self.fp_bio,
            is_owner: self.fp_is_owner.unwrap_or_default(),
        });

        UserWithProfile {
            user,
            student_profile,
            parent_profile,
            faculty_profile,
        }
    }
}

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn get_users(
        db: &PgPool,
        params: &UserFilterParams,
    ) -> Result<(Vec<UserWithProfile>, i64), AppError> {
        let search_pattern = params.search.as_ref().map(|s| format!("%{}%", s));

        let rows = sqlx::query_as::<_, UserProfileRow>(
            r#"
            SELECT u.id, u.email, u.role, u.first_name, u.last_name, u.phone,
                   u.is_active, u.created_at, u.updated_at,
                   sp.id AS sp_id, sp.date_of_birth AS sp_date_of_birth,
                   sp.class AS sp_class, sp.medium AS sp_medium,
                   sp.school_name AS sp_school_name, sp.parent_id AS sp_parent_id,
                   pp.id AS pp_id, pp.occupation AS pp_occupation,
                   fp.id AS fp_id, fp.qualification AS fp_qualification,
                   fp.subjects AS fp_subjects,
                   fp.experience_years AS fp_experience_years,
                   fp.bio AS fp_bio, fp.is_owner AS fp_is_owner
            FROM users u
            LEFT JOIN student_profiles sp ON sp.user_id = u.id
            LEFT JOIN parent_profiles pp ON pp.user_id = u.id
            LEFT JOIN faculty_profiles fp ON fp.user_id = u.id
            WHERE ($1::user_role IS NULL OR u.role = $1)
              AND ($2::TEXT IS NULL
                   OR u.first_name ILIKE $2
                   OR u.last_name ILIKE $2
                   OR u.email ILIKE $2)
            ORDER BY u.created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(params.role)
        .bind(&search_pattern)
        .bind(params.pagination.limit())
        .bind(params.pagination.offset())
        .fetch_all(db)
        .await
        .context("Failed to fetch users")
        .map_err(AppError::database)?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM users u
            WHERE ($1::user_role IS NULL OR u.role = $1)
              AND ($2::TEXT IS NULL
                   OR u.first_name ILIKE $2
                   OR u.last_name ILIKE $2
                   OR u.email ILIKE $2)
            "#,
        )
        .bind(params.role)
        .bind(&search_pattern)
        .fetch_one(db)
        .await
        .context("Failed to count users")
        .map_err(AppError::database)?;

        let users = rows
            .into_iter()
            .map(UserProfileRow::into_user_with_profile)
            .collect();

        Ok((users, total))
    }

    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, id: Uuid) -> Result<UserWithProfile, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Self::attach_profile(db, user).await
    }

    /// Loads the role profile for a user and pairs them up. Admins have no
    /// profile row.
    #[instrument(skip(db, user))]
    pub async fn attach_profile(db: &PgPool, user: User) -> Result<UserWithProfile, AppError> {
        let mut result = UserWithProfile {
            user,
            student_profile: None,
            parent_profile: None,
            faculty_profile: None,
        };

        match result.user.role {
            UserRole::Student => {
                result.student_profile = sqlx::query_as::<_, StudentProfile>(
                    "SELECT id, user_id, date_of_birth, class, medium, school_name, parent_id
                     FROM student_profiles WHERE user_id = $1",
                )
                .bind(result.user.id)
                .fetch_optional(db)
                .await
                .context("Failed to fetch student profile")
                .map_err(AppError::database)?;
            }
            UserRole::Parent => {
                result.parent_profile = sqlx::query_as::<_, ParentProfile>(
                    "SELECT id, user_id, occupation FROM parent_profiles WHERE user_id = $1",
                )
                .bind(result.user.id)
                .fetch_optional(db)
                .await
                .context("Failed to fetch parent profile")
                .map_err(AppError::database)?;
            }
            UserRole::Faculty => {
                result.faculty_profile = sqlx::query_as::<_, FacultyProfile>(
                    "SELECT id, user_id, qualification, subjects, experience_years, bio, is_owner
                     FROM faculty_profiles WHERE user_id = $1",
                )
                .bind(result.user.id)
                .fetch_optional(db)
                .await
                .context("Failed to fetch faculty profile")
                .map_err(AppError::database)?;
            }
            UserRole::Admin => {}
        }

        Ok(result)
    }

    /// Resolves the student profile id for an authenticated student. Used
    /// by handlers that must act on the caller's own records.
    #[instrument(skip(db))]
    pub async fn student_profile_id(db: &PgPool, user_id: Uuid) -> Result<Uuid, AppError> {
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM student_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(db)
            .await
            .context("Failed to resolve student profile")
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::forbidden("No student profile attached to this account"))
    }

    /// Resolves the faculty profile id for an authenticated faculty member.
    /// Admins have no faculty profile, hence the Option.
    #[instrument(skip(db))]
    pub async fn faculty_profile_id(
        db: &PgPool,
        user_id: Uuid,
    ) -> Result<Option<Uuid>, AppError> {
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM faculty_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(db)
            .await
            .context("Failed to resolve faculty profile")
            .map_err(AppError::database)
    }
}
