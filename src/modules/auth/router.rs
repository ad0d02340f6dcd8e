use axum::{Router, middleware, routing::post};

use crate::middleware::rate_limit::throttle_login;
use crate::state::AppState;

use super::controller::login_user;

pub fn init_auth_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/login", post(login_user))
        .route_layer(middleware::from_fn_with_state(state, throttle_login))
}
