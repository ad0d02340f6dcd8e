//! Login throttling.
//!
//! `POST /auth/login` gets a token bucket per client. The client is the peer
//! address of the connection. `X-Forwarded-For` is only consulted when the
//! throttle is configured to trust it. Requests beyond the bucket get a 429
//! before the handler runs.

use std::fmt;
use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use tracing::warn;

use tickets_config::RateLimitConfig;
use tickets_core::AppError;

use crate::state::AppState;

const UNKNOWN_CLIENT: &str = "unknown";

#[derive(Clone)]
pub struct LoginThrottle {
    limiter: Arc<DefaultKeyedRateLimiter<String>>,
    trust_forwarded_for: bool,
}

impl fmt::Debug for LoginThrottle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginThrottle")
            .field("tracked_clients", &self.limiter.len())
            .field("trust_forwarded_for", &self.trust_forwarded_for)
            .finish()
    }
}

impl LoginThrottle {
    /// Builds a throttle, or `None` when throttling is switched off.
    ///
    /// A zero rate or burst is treated as one.
    pub fn from_config(config: &RateLimitConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }

        let per_second = NonZeroU32::new(config.per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::per_second(per_second).allow_burst(burst);

        Some(Self {
            limiter: Arc::new(RateLimiter::keyed(quota)),
            trust_forwarded_for: config.trust_forwarded_for,
        })
    }

    /// Takes one token from `client`'s bucket. `false` means throttled.
    pub fn check(&self, client: &str) -> bool {
        self.limiter.check_key(&client.to_string()).is_ok()
    }

    /// Periodically forgets clients whose buckets have refilled.
    pub fn spawn_cleanup(&self, every: Duration) {
        let limiter = Arc::clone(&self.limiter);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                limiter.retain_recent();
                limiter.shrink_to_fit();
            }
        });
    }
}

/// The bucket key for `req`.
///
/// The first `X-Forwarded-For` address wins only when `trust_forwarded_for`
/// is set; otherwise the header is ignored and the peer address is used.
pub fn client_key(req: &Request, trust_forwarded_for: bool) -> String {
    if trust_forwarded_for
        && let Some(ip) = forwarded_for(req)
    {
        return ip.to_string();
    }

    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

fn forwarded_for(req: &Request) -> Option<&str> {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

pub async fn throttle_login(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(throttle) = &state.login_throttle {
        let client = client_key(&req, throttle.trust_forwarded_for);
        if !throttle.check(&client) {
            warn!(client = %client, "Login attempt throttled");
            return Err(AppError::too_many_requests(anyhow!(
                "Too many login attempts, try again later"
            )));
        }
    }

    Ok(next.run(req).await)
}
