use axum::Router;
use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use sarthak_api::config::cors::CorsConfig;
use sarthak_api::config::email::EmailConfig;
use sarthak_api::config::jwt::JwtConfig;
use sarthak_api::modules::users::model::UserRole;
use sarthak_api::router::init_router;
use sarthak_api::state::AppState;
use sarthak_api::utils::jwt::create_access_token;
use sarthak_api::utils::password::hash_password;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn setup_test_app(pool: PgPool) -> Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
        email_config: EmailConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

pub async fn create_test_user(
    pool: &PgPool,
    email: &str,
    password: &str,
    role: UserRole,
) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (email, password, role, first_name, last_name)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(email)
    .bind(&hashed)
    .bind(role)
    .bind("Test")
    .bind("User")
    .fetch_one(pool)
    .await
    .unwrap();

    match role {
        UserRole::Student => {
            sqlx::query(
                "INSERT INTO student_profiles (user_id, class, medium) VALUES ($1, '9', 'English')",
            )
            .bind(id)
            .execute(pool)
            .await
            .unwrap();
        }
        UserRole::Parent => {
            sqlx::query("INSERT INTO parent_profiles (user_id) VALUES ($1)")
                .bind(id)
                .execute(pool)
                .await
                .unwrap();
        }
        UserRole::Faculty => {
            sqlx::query("INSERT INTO faculty_profiles (user_id) VALUES ($1)")
                .bind(id)
                .execute(pool)
                .await
                .unwrap();
        }
        UserRole::Admin => {}
    }

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
        role,
    }
}

/// Mints a bearer token for a test user without going through the login
/// endpoint.
#[allow(dead_code)]
pub fn token_for(user: &TestUser) -> String {
    dotenvy::dotenv().ok();
    create_access_token(user.id, &user.email, user.role, &JwtConfig::from_env()).unwrap()
}

#[allow(dead_code)]
pub async fn student_profile_id(pool: &PgPool, user_id: Uuid) -> Uuid {
    sqlx::query_scalar::<_, Uuid>("SELECT id FROM student_profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn faculty_profile_id(pool: &PgPool, user_id: Uuid) -> Uuid {
    sqlx::query_scalar::<_, Uuid>("SELECT id FROM faculty_profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_course(pool: &PgPool, name: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO courses (name, target_class, fee) VALUES ($1, '9', 1500)
         RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Builds a JSON request, optionally authenticated.
pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let body = match body {
        Some(value) => Body::from(serde_json::to_string(&value).unwrap()),
        None => Body::empty(),
    };

    builder.body(body).unwrap()
}

pub async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
