mod common;

use axum::http::StatusCode;
use common::{create_test_user, generate_unique_email, json_request, response_json, setup_test_app, token_for};
use sarthak_api::modules::users::model::UserRole;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_listing_requires_admin(pool: PgPool) {
    let student =
        create_test_user(&pool, &generate_unique_email(), "studentpass", UserRole::Student).await;
    let token = token_for(&student);

    let app = setup_test_app(pool).await;

    let anonymous = app
        .clone()
        .oneshot(json_request("GET", "/api/users", None, None))
        .await
        .unwrap();
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let as_student = app
        .oneshot(json_request("GET", "/api/users", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(as_student.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_role_filter(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_email(), "adminpass", UserRole::Admin).await;
    let token = token_for(&admin);

    create_test_user(&pool, &generate_unique_email(), "pass12345", UserRole::Student).await;
    create_test_user(&pool, &generate_unique_email(), "pass12345", UserRole::Student).await;
    create_test_user(&pool, &generate_unique_email(), "pass12345", UserRole::Faculty).await;

    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request("GET", "/api/users?role=STUDENT", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|u| u["user"]["role"] == "STUDENT"));
    // Student rows come with their profile joined in
    assert!(rows.iter().all(|u| u["student_profile"].is_object()));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_matches_email_substring(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_email(), "adminpass", UserRole::Admin).await;
    let token = token_for(&admin);

    create_test_user(&pool, "findme-abc@test.com", "pass12345", UserRole::Parent).await;
    create_test_user(&pool, &generate_unique_email(), "pass12345", UserRole::Parent).await;

    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request("GET", "/api/users?search=findme", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["user"]["email"], "findme-abc@test.com");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_password_is_stripped_from_every_row(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_email(), "adminpass", UserRole::Admin).await;
    let token = token_for(&admin);

    create_test_user(&pool, &generate_unique_email(), "pass12345", UserRole::Student).await;

    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request("GET", "/api/users", Some(&token), None))
        .await
        .unwrap();

    let body = response_json(response).await;
    for row in body["data"].as_array().unwrap() {
        assert!(row["user"].get("password").is_none());
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_pagination_meta(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_email(), "adminpass", UserRole::Admin).await;
    let token = token_for(&admin);

    for _ in 0..3 {
        create_test_user(&pool, &generate_unique_email(), "pass12345", UserRole::Student).await;
    }

    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request("GET", "/api/users?limit=2&offset=0", Some(&token), None))
        .await
        .unwrap();

    let body = response_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["meta"]["total"], 4); // three students plus the admin
    assert_eq!(body["meta"]["has_more"], true);
}
