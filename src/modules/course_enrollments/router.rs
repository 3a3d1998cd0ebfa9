use axum::{
    Router,
    routing::{get, put},
};

use crate::modules::course_enrollments::controller::{
    create_course_enrollment, get_course_enrollments, update_course_enrollment_status,
};
use crate::state::AppState;

pub fn init_course_enrollments_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_course_enrollments).post(create_course_enrollment),
        )
        .route("/{id}/status", put(update_course_enrollment_status))
}
