use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_event, get_events};

pub fn init_events_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_events))
        .route("/{id}", get(get_event))
}
