use axum::{
    Router,
    routing::{get, put},
};

use crate::modules::schedule::controller::{
    create_schedule_slot, delete_schedule_slot, get_schedule, update_schedule_slot,
};
use crate::state::AppState;

pub fn init_schedule_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_schedule).post(create_schedule_slot))
        .route(
            "/{id}",
            put(update_schedule_slot).delete(delete_schedule_slot),
        )
}
