use axum::{Router, routing::get};

use crate::modules::attendance::controller::{get_attendance, mark_attendance};
use crate::state::AppState;

pub fn init_attendance_router() -> Router<AppState> {
    Router::new().route("/", get(get_attendance).post(mark_attendance))
}
