mod common;

use axum::http::StatusCode;
use common::{create_test_user, generate_unique_email, json_request, response_json, setup_test_app, token_for};
use sarthak_api::modules::users::model::UserRole;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_course_accepts_string_fee(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_email(), "adminpass", UserRole::Admin).await;
    let token = token_for(&admin);

    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/courses",
            Some(&token),
            Some(json!({
                "name": "Foundation Maths",
                "target_class": "9",
                "fee": "1200",
                "subjects": ["Maths"],
                "features": ["Weekly tests"]
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["fee"], 1200.0);
    assert_eq!(body["is_active"], true);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_course_rejects_unparseable_fee(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_email(), "adminpass", UserRole::Admin).await;
    let token = token_for(&admin);

    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/courses",
            Some(&token),
            Some(json!({
                "name": "Foundation Maths",
                "target_class": "9",
                "fee": "twelve hundred"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_course_rejects_negative_fee(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_email(), "adminpass", UserRole::Admin).await;
    let token = token_for(&admin);

    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/courses",
            Some(&token),
            Some(json!({
                "name": "Foundation Maths",
                "target_class": "9",
                "fee": -500
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_course_mutation_requires_admin(pool: PgPool) {
    let faculty =
        create_test_user(&pool, &generate_unique_email(), "facultypass", UserRole::Faculty).await;
    let token = token_for(&faculty);

    let app = setup_test_app(pool).await;

    let body = json!({"name": "X", "target_class": "9", "fee": 100});

    let anonymous = app
        .clone()
        .oneshot(json_request("POST", "/api/courses", None, Some(body.clone())))
        .await
        .unwrap();
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let as_faculty = app
        .oneshot(json_request("POST", "/api/courses", Some(&token), Some(body)))
        .await
        .unwrap();
    assert_eq!(as_faculty.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_matches_name_or_description(pool: PgPool) {
    sqlx::query(
        "INSERT INTO courses (name, description, target_class, fee) VALUES
         ('Foundation Maths', 'Algebra and geometry', '9', 1200),
         ('Science Basics', 'Physics with algebra refresher', '9', 1400),
         ('English Grammar', 'Tenses and composition', '8', 900)",
    )
    .execute(&pool)
    .await
    .unwrap();

    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request("GET", "/api/courses?search=algebra", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();

    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Foundation Maths"));
    assert!(names.contains(&"Science Basics"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_merges_partial_payload(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_email(), "adminpass", UserRole::Admin).await;
    let token = token_for(&admin);

    let app = setup_test_app(pool).await;

    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/courses",
            Some(&token),
            Some(json!({
                "name": "Foundation Maths",
                "description": "Algebra and geometry",
                "target_class": "9",
                "fee": 1200
            })),
        ))
        .await
        .unwrap();
    let id = response_json(created).await["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/courses/{}", id),
            Some(&token),
            Some(json!({"fee": "1500"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["fee"], 1500.0);
    assert_eq!(body["name"], "Foundation Maths");
    assert_eq!(body["description"], "Algebra and geometry");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_is_hard_delete(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_email(), "adminpass", UserRole::Admin).await;
    let token = token_for(&admin);

    let app = setup_test_app(pool).await;

    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/courses",
            Some(&token),
            Some(json!({"name": "Short-lived", "target_class": "9", "fee": 100})),
        ))
        .await
        .unwrap();
    let id = response_json(created).await["id"].as_str().unwrap().to_string();

    let deleted = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/api/courses/{}", id),
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);

    let gone = app
        .oneshot(json_request("GET", &format!("/api/courses/{}", id), None, None))
        .await
        .unwrap();
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_unknown_course_not_found(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_email(), "adminpass", UserRole::Admin).await;
    let token = token_for(&admin);

    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request(
            "DELETE",
            &format!("/api/courses/{}", uuid::Uuid::new_v4()),
            Some(&token),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
