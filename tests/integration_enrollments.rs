mod common;

use axum::http::StatusCode;
use common::{create_test_user, generate_unique_email, json_request, response_json, setup_test_app, token_for};
use sarthak_api::modules::users::model::UserRole;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

fn application_body() -> serde_json::Value {
    json!({
        "student_name": "A",
        "parent_name": "B",
        "email": "b@x.com",
        "phone": "9876543210",
        "class": "9",
        "medium": "English",
        "course": "Foundation Maths"
    })
}

#[sqlx::test(migrations = "./migrations")]
async fn test_public_application_starts_pending(pool: PgPool) {
    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/enrollments",
            None,
            Some(application_body()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_eq!(body["status"], "PENDING");
    assert_eq!(body["student_name"], "A");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_abbreviated_camel_case_form_payload_accepted(pool: PgPool) {
    let app = setup_test_app(pool).await;

    // The shape the existing site form sends: camelCase keys, only the
    // fields the visitor filled in.
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/enrollments",
            None,
            Some(json!({
                "studentName": "A",
                "parentName": "B",
                "email": "b@x.com",
                "class": "9"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_eq!(body["status"], "PENDING");
    assert_eq!(body["student_name"], "A");
    assert_eq!(body["parent_name"], "B");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_client_supplied_status_is_ignored(pool: PgPool) {
    let app = setup_test_app(pool).await;

    let mut body = application_body();
    body["status"] = json!("ACTIVE");

    let response = app
        .oneshot(json_request("POST", "/api/enrollments", None, Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response_json(response).await["status"], "PENDING");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_accepts_application(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_email(), "adminpass", UserRole::Admin).await;
    let token = token_for(&admin);

    let app = setup_test_app(pool).await;

    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/enrollments",
            None,
            Some(application_body()),
        ))
        .await
        .unwrap();
    let created = response_json(created).await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/enrollments/{}/status", id),
            Some(&token),
            Some(json!({"status": "ACTIVE"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let updated = response_json(response).await;
    assert_eq!(updated["status"], "ACTIVE");
    // Review only flips the status; the application itself is untouched
    assert_eq!(updated["student_name"], created["student_name"]);
    assert_eq!(updated["email"], created["email"]);
    assert_eq!(updated["course"], created["course"]);
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_rejects_application(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_email(), "adminpass", UserRole::Admin).await;
    let token = token_for(&admin);

    let app = setup_test_app(pool).await;

    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/enrollments",
            None,
            Some(application_body()),
        ))
        .await
        .unwrap();
    let id = response_json(created).await["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/enrollments/{}/status", id),
            Some(&token),
            Some(json!({"status": "REJECTED"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["status"], "REJECTED");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_status_update_unknown_id_not_found(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_email(), "adminpass", UserRole::Admin).await;
    let token = token_for(&admin);

    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/enrollments/{}/status", uuid::Uuid::new_v4()),
            Some(&token),
            Some(json!({"status": "ACTIVE"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // And nothing was changed anywhere
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM enrollments WHERE status != 'PENDING'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_pending_is_not_a_valid_target(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_email(), "adminpass", UserRole::Admin).await;
    let token = token_for(&admin);

    let app = setup_test_app(pool).await;

    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/enrollments",
            None,
            Some(application_body()),
        ))
        .await
        .unwrap();
    let id = response_json(created).await["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/enrollments/{}/status", id),
            Some(&token),
            Some(json!({"status": "PENDING"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_listing_requires_admin(pool: PgPool) {
    let student =
        create_test_user(&pool, &generate_unique_email(), "studentpass", UserRole::Student).await;
    let token = token_for(&student);

    let app = setup_test_app(pool).await;

    let anonymous = app
        .clone()
        .oneshot(json_request("GET", "/api/enrollments", None, None))
        .await
        .unwrap();
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let as_student = app
        .oneshot(json_request("GET", "/api/enrollments", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(as_student.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_status_update_requires_admin(pool: PgPool) {
    let faculty =
        create_test_user(&pool, &generate_unique_email(), "facultypass", UserRole::Faculty).await;
    let token = token_for(&faculty);

    let app = setup_test_app(pool).await;

    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/enrollments",
            None,
            Some(application_body()),
        ))
        .await
        .unwrap();
    let id = response_json(created).await["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/enrollments/{}/status", id),
            Some(&token),
            Some(json!({"status": "ACTIVE"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
