use axum::{
    Router,
    routing::{get, put},
};

use crate::modules::sessions::controller::{
    create_session, delete_session, get_sessions, update_session,
};
use crate::state::AppState;

pub fn init_sessions_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_sessions).post(create_session))
        .route("/{id}", put(update_session).delete(delete_session))
}
