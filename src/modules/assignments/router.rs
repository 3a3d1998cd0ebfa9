use axum::{
    Router,
    routing::{get, put},
};

use crate::modules::assignments::controller::{
    create_assignment, delete_assignment, get_assignments, get_submissions, grade_submission,
    submit_assignment, update_assignment,
};
use crate::state::AppState;

pub fn init_assignments_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_assignments).post(create_assignment))
        .route("/{id}", put(update_assignment).delete(delete_assignment))
        .route(
            "/{id}/submissions",
            get(get_submissions).post(submit_assignment),
        )
        .route("/submissions/{id}/grade", put(grade_submission))
}
