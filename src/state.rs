use sqlx::PgPool;
use tickets_config::{CorsConfig, JwtConfig, RateLimitConfig};

use crate::middleware::rate_limit::LoginThrottle;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    /// `None` when login throttling is disabled.
    pub login_throttle: Option<LoginThrottle>,
}

impl AppState {
    pub fn new(
        db: PgPool,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
        rate_limit_config: &RateLimitConfig,
    ) -> Self {
        Self {
            db,
            jwt_config,
            cors_config,
            login_throttle: LoginThrottle::from_config(rate_limit_config),
        }
    }
}
