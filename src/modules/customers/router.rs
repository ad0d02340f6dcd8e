use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::register_customer;

pub fn init_customers_router() -> Router<AppState> {
    Router::new().route("/register", post(register_customer))
}
