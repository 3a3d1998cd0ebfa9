use axum::{Router, routing::get};

use crate::modules::contact::controller::{
    create_appointment, create_contact_message, get_appointments, get_contact_messages,
};
use crate::state::AppState;

pub fn init_contact_router() -> Router<AppState> {
    Router::new().route("/", get(get_contact_messages).post(create_contact_message))
}

pub fn init_appointments_router() -> Router<AppState> {
    Router::new().route("/", get(get_appointments).post(create_appointment))
}
