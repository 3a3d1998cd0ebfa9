use axum::{
    Router,
    routing::{delete, get},
};

use crate::modules::gallery::controller::{
    create_gallery_image, delete_gallery_image, get_gallery,
};
use crate::state::AppState;

pub fn init_gallery_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_gallery).post(create_gallery_image))
        .route("/{id}", delete(delete_gallery_image))
}
