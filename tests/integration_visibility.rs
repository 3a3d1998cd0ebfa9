mod common;

use axum::http::StatusCode;
use common::{
    create_test_course, create_test_user, faculty_profile_id, generate_unique_email, json_request,
    response_json, setup_test_app, token_for,
};
use sarthak_api::modules::users::model::UserRole;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_public_testimonial_submission_is_held_for_moderation(pool: PgPool) {
    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/testimonials",
            None,
            Some(json!({
                "student_name": "Aarav Shah",
                "rating": 5,
                "message": "Great teaching"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response_json(response).await["is_approved"], false);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_public_listing_never_includes_unapproved_testimonials(pool: PgPool) {
    sqlx::query(
        "INSERT INTO testimonials (student_name, rating, message, is_approved) VALUES
         ('Approved One', 5, 'Visible', TRUE),
         ('Pending One', 4, 'Hidden', FALSE)",
    )
    .execute(&pool)
    .await
    .unwrap();

    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request("GET", "/api/testimonials", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["student_name"], "Approved One");
    assert!(rows.iter().all(|t| t["is_approved"] == true));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_approval_makes_testimonial_public(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_email(), "adminpass", UserRole::Admin).await;
    let token = token_for(&admin);

    let app = setup_test_app(pool).await;

    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/testimonials",
            None,
            Some(json!({
                "student_name": "Aarav Shah",
                "rating": 5,
                "message": "Great teaching"
            })),
        ))
        .await
        .unwrap();
    let id = response_json(created).await["id"].as_str().unwrap().to_string();

    let approved = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/testimonials/{}/approve", id),
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(approved.status(), StatusCode::OK);

    let listed = app
        .oneshot(json_request("GET", "/api/testimonials", None, None))
        .await
        .unwrap();
    let body = response_json(listed).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_moderation_queue_shows_everything(pool: PgPool) {
    let admin = create_test_user(&pool, &generate_unique_email(), "adminpass", UserRole::Admin).await;
    let token = token_for(&admin);

    sqlx::query(
        "INSERT INTO testimonials (student_name, rating, message, is_approved) VALUES
         ('Approved One', 5, 'Visible', TRUE),
         ('Pending One', 4, 'Hidden', FALSE)",
    )
    .execute(&pool)
    .await
    .unwrap();

    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request("GET", "/api/testimonials/all", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_public_video_listing_never_includes_unpublished(pool: PgPool) {
    let faculty =
        create_test_user(&pool, &generate_unique_email(), "facultypass", UserRole::Faculty).await;
    let faculty_profile = faculty_profile_id(&pool, faculty.id).await;
    let course_id = create_test_course(&pool, "Foundation Maths").await;

    sqlx::query(
        "INSERT INTO video_lectures (course_id, faculty_id, title, video_url, is_published) VALUES
         ($1, $2, 'Published lecture', 'https://videos/1', TRUE),
         ($1, $2, 'Draft lecture', 'https://videos/2', FALSE)",
    )
    .bind(course_id)
    .bind(faculty_profile)
    .execute(&pool)
    .await
    .unwrap();

    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request("GET", "/api/videos", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["title"], "Published lecture");
    assert!(rows.iter().all(|v| v["is_published"] == true));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_faculty_listing_includes_drafts(pool: PgPool) {
    let faculty =
        create_test_user(&pool, &generate_unique_email(), "facultypass", UserRole::Faculty).await;
    let faculty_profile = faculty_profile_id(&pool, faculty.id).await;
    let token = token_for(&faculty);
    let course_id = create_test_course(&pool, "Foundation Maths").await;

    sqlx::query(
        "INSERT INTO video_lectures (course_id, faculty_id, title, video_url, is_published) VALUES
         ($1, $2, 'Published lecture', 'https://videos/1', TRUE),
         ($1, $2, 'Draft lecture', 'https://videos/2', FALSE)",
    )
    .bind(course_id)
    .bind(faculty_profile)
    .execute(&pool)
    .await
    .unwrap();

    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request("GET", "/api/videos/all", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_draft_listing_requires_faculty(pool: PgPool) {
    let student =
        create_test_user(&pool, &generate_unique_email(), "studentpass", UserRole::Student).await;
    let token = token_for(&student);

    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request("GET", "/api/videos/all", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_publishing_via_update_exposes_video(pool: PgPool) {
    let faculty =
        create_test_user(&pool, &generate_unique_email(), "facultypass", UserRole::Faculty).await;
    let faculty_profile = faculty_profile_id(&pool, faculty.id).await;
    let token = token_for(&faculty);
    let course_id = create_test_course(&pool, "Foundation Maths").await;

    let video_id = sqlx::query_scalar::<_, uuid::Uuid>(
        "INSERT INTO video_lectures (course_id, faculty_id, title, video_url)
         VALUES ($1, $2, 'Draft lecture', 'https://videos/2')
         RETURNING id",
    )
    .bind(course_id)
    .bind(faculty_profile)
    .fetch_one(&pool)
    .await
    .unwrap();

    let app = setup_test_app(pool).await;

    let updated = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/videos/{}", video_id),
            Some(&token),
            Some(json!({"is_published": true})),
        ))
        .await
        .unwrap();
    assert_eq!(updated.status(), StatusCode::OK);

    let listed = app
        .oneshot(json_request("GET", "/api/videos", None, None))
        .await
        .unwrap();
    assert_eq!(response_json(listed).await.as_array().unwrap().len(), 1);
}
