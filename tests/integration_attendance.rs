mod common;

use axum::http::StatusCode;
use common::{
    create_test_course, create_test_user, generate_unique_email, json_request, response_json,
    setup_test_app, student_profile_id, token_for,
};
use sarthak_api::modules::users::model::UserRole;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_marking_twice_overwrites_instead_of_duplicating(pool: PgPool) {
    let faculty =
        create_test_user(&pool, &generate_unique_email(), "facultypass", UserRole::Faculty).await;
    let token = token_for(&faculty);

    let student =
        create_test_user(&pool, &generate_unique_email(), "studentpass", UserRole::Student).await;
    let student_id = student_profile_id(&pool, student.id).await;
    let course_id = create_test_course(&pool, "Foundation Maths").await;

    let app = setup_test_app(pool.clone()).await;

    let mark = |status: &str| {
        json!({
            "student_id": student_id,
            "course_id": course_id,
            "date": "2025-07-14",
            "status": status
        })
    };

    let first = app
        .clone()
        .oneshot(json_request("POST", "/api/attendance", Some(&token), Some(mark("PRESENT"))))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .clone()
        .oneshot(json_request("POST", "/api/attendance", Some(&token), Some(mark("ABSENT"))))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(response_json(second).await["status"], "ABSENT");

    // Exactly one row for the triple, holding the last status
    let (count, status): (i64, String) = sqlx::query_as(
        "SELECT COUNT(*), MIN(status::TEXT)
         FROM attendance WHERE student_id = $1 AND course_id = $2 AND date = '2025-07-14'",
    )
    .bind(student_id)
    .bind(course_id)
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(count, 1);
    assert_eq!(status, "ABSENT");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_different_dates_create_separate_rows(pool: PgPool) {
    let faculty =
        create_test_user(&pool, &generate_unique_email(), "facultypass", UserRole::Faculty).await;
    let token = token_for(&faculty);

    let student =
        create_test_user(&pool, &generate_unique_email(), "studentpass", UserRole::Student).await;
    let student_id = student_profile_id(&pool, student.id).await;
    let course_id = create_test_course(&pool, "Foundation Maths").await;

    let app = setup_test_app(pool.clone()).await;

    for date in ["2025-07-14", "2025-07-15"] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/attendance",
                Some(&token),
                Some(json!({
                    "student_id": student_id,
                    "course_id": course_id,
                    "date": date,
                    "status": "PRESENT"
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM attendance WHERE student_id = $1 AND course_id = $2",
    )
    .bind(student_id)
    .bind(course_id)
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(count, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_students_cannot_mark_attendance(pool: PgPool) {
    let student =
        create_test_user(&pool, &generate_unique_email(), "studentpass", UserRole::Student).await;
    let student_id = student_profile_id(&pool, student.id).await;
    let token = token_for(&student);
    let course_id = create_test_course(&pool, "Foundation Maths").await;

    let app = setup_test_app(pool).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/attendance",
            Some(&token),
            Some(json!({
                "student_id": student_id,
                "course_id": course_id,
                "date": "2025-07-14",
                "status": "PRESENT"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_filters_by_student(pool: PgPool) {
    let faculty =
        create_test_user(&pool, &generate_unique_email(), "facultypass", UserRole::Faculty).await;
    let token = token_for(&faculty);

    let student_a =
        create_test_user(&pool, &generate_unique_email(), "studentpass", UserRole::Student).await;
    let student_b =
        create_test_user(&pool, &generate_unique_email(), "studentpass", UserRole::Student).await;
    let profile_a = student_profile_id(&pool, student_a.id).await;
    let profile_b = student_profile_id(&pool, student_b.id).await;
    let course_id = create_test_course(&pool, "Foundation Maths").await;

    let app = setup_test_app(pool).await;

    for profile in [profile_a, profile_b] {
        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/attendance",
                Some(&token),
                Some(json!({
                    "student_id": profile,
                    "course_id": course_id,
                    "date": "2025-07-14",
                    "status": "PRESENT"
                })),
            ))
            .await
            .unwrap();
    }

    let response = app
        .oneshot(json_request(
            "GET",
            &format!("/api/attendance?student_id={}", profile_a),
            Some(&token),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["student_id"], profile_a.to_string());
}
