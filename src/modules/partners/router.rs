use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_event, get_my_event, get_my_events, register_partner};

pub fn init_partners_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_partner))
        .route("/events", post(create_event).get(get_my_events))
        .route("/events/{id}", get(get_my_event))
}
