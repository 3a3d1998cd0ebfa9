use axum::{
    Router,
    routing::{get, put},
};

use crate::modules::enrollments::controller::{
    create_enrollment, get_enrollments, update_enrollment_status,
};
use crate::state::AppState;

pub fn init_enrollments_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_enrollments).post(create_enrollment))
        .route("/{id}/status", put(update_enrollment_status))
}
