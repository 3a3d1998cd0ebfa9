use axum::{
    Router,
    routing::{delete, get, put},
};

use crate::modules::testimonials::controller::{
    approve_testimonial, create_testimonial, delete_testimonial, get_all_testimonials,
    get_testimonials,
};
use crate::state::AppState;

pub fn init_testimonials_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_testimonials).post(create_testimonial))
        .route("/all", get(get_all_testimonials))
        .route("/{id}", delete(delete_testimonial))
        .route("/{id}/approve", put(approve_testimonial))
}
