use axum::{
    Router,
    routing::{delete, get},
};

use crate::modules::materials::controller::{create_material, delete_material, get_materials};
use crate::state::AppState;

pub fn init_materials_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_materials).post(create_material))
        .route("/{id}", delete(delete_material))
}
