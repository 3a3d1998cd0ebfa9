mod common;

use axum::http::StatusCode;
use common::{create_test_user, generate_unique_email, json_request, response_json, setup_test_app};
use sarthak_api::modules::users::model::UserRole;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_login_success(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "testpass123", UserRole::Student).await;

    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": email, "password": "testpass123"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert!(body.get("access_token").is_some());
    assert_eq!(body["user"]["user"]["email"], email);
    assert_eq!(body["user"]["user"]["role"], "STUDENT");
    assert!(body["user"]["student_profile"].is_object());
    // The hash must never be serialized
    assert!(body["user"]["user"].get("password").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_wrong_password_and_unknown_email_are_indistinguishable(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "rightpass123", UserRole::Student).await;

    let app = setup_test_app(pool).await;

    let wrong_password = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": email, "password": "wrongpass123"})),
        ))
        .await
        .unwrap();

    let unknown_email = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": generate_unique_email(), "password": "whatever123"})),
        ))
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let body_a = response_json(wrong_password).await;
    let body_b = response_json(unknown_email).await;
    assert_eq!(body_a, body_b);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_role_mismatch_rejected(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "testpass123", UserRole::Student).await;

    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": email, "password": "testpass123", "role": "FACULTY"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_admin_can_enter_any_portal(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "adminpass123", UserRole::Admin).await;

    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": email, "password": "adminpass123", "role": "STUDENT"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["user"]["user"]["role"], "ADMIN");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_requesting_admin_portal_as_student_rejected(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "testpass123", UserRole::Student).await;

    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": email, "password": "testpass123", "role": "ADMIN"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_deactivated_account_rejected(pool: PgPool) {
    let email = generate_unique_email();
    let user = create_test_user(&pool, &email, "testpass123", UserRole::Parent).await;

    sqlx::query("UPDATE users SET is_active = FALSE WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": email, "password": "testpass123"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_student_creates_user_and_profile(pool: PgPool) {
    let email = generate_unique_email();
    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "role": "STUDENT",
                "email": email,
                "password": "password123",
                "first_name": "Aarav",
                "last_name": "Shah",
                "class": "10",
                "medium": "English",
                "school_name": "City High"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_eq!(body["user"]["email"], email);
    assert_eq!(body["student_profile"]["class"], "10");

    let profile_count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM student_profiles sp
         JOIN users u ON u.id = sp.user_id WHERE u.email = $1",
    )
    .bind(&email)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(profile_count, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_student_without_class_creates_no_orphan_user(pool: PgPool) {
    let email = generate_unique_email();
    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "role": "STUDENT",
                "email": email,
                "password": "password123",
                "first_name": "Aarav",
                "last_name": "Shah"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The transaction must have rolled the user row back with the profile
    let user_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(user_count, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_email_conflict(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "testpass123", UserRole::Parent).await;

    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "role": "PARENT",
                "email": email,
                "password": "password123",
                "first_name": "Test",
                "last_name": "Parent"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["code"], "CONFLICT");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_unknown_role_rejected(pool: PgPool) {
    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "role": "TEACHER",
                "email": generate_unique_email(),
                "password": "password123",
                "first_name": "Test",
                "last_name": "User"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["code"], "VALIDATION");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_admin_role_forbidden(pool: PgPool) {
    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "role": "ADMIN",
                "email": generate_unique_email(),
                "password": "password123",
                "first_name": "Test",
                "last_name": "User"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
