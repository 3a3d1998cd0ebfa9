use axum::{
    Router,
    routing::{get, put},
};

use crate::modules::videos::controller::{
    create_video, delete_video, get_all_videos, get_published_videos, update_video,
};
use crate::state::AppState;

pub fn init_videos_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_published_videos).post(create_video))
        .route("/all", get(get_all_videos))
        .route("/{id}", put(update_video).delete(delete_video))
}
