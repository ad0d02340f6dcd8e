//! Login throttle configuration.
//!
//! `POST /auth/login` is the only endpoint that checks a password, so it is
//! the only one throttled. The limiter keeps one token bucket per client IP.
//!
//! # Configuration
//!
//! - `LOGIN_RATE_LIMIT_ENABLED`: switch (default: true)
//! - `LOGIN_RATE_LIMIT_PER_SECOND`: tokens replenished per second (default: 1)
//! - `LOGIN_RATE_LIMIT_BURST`: bucket capacity (default: 5)
//! - `LOGIN_RATE_LIMIT_TRUST_PROXY`: key on the first `X-Forwarded-For`
//!   address instead of the peer address (default: false). Only enable this
//!   behind a proxy that overwrites the header.
//!
//! # Rate Limiting Strategy
//!
//! - Tokens are added at the configured rate (per second)
//! - Each login attempt consumes one token
//! - Burst size defines the maximum tokens that can accumulate
//! - Attempts are rejected with 429 when no tokens are available

use crate::{env_lookup, flag_or, parse_or};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub enabled: bool,

    /// Token replenishment rate per client.
    pub per_second: u32,

    /// Maximum number of tokens a client can accumulate.
    pub burst_size: u32,

    /// Whether `X-Forwarded-For` identifies the client.
    pub trust_forwarded_for: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            per_second: 1,
            burst_size: 5,
            trust_forwarded_for: false,
        }
    }
}

impl RateLimitConfig {
    /// A config that never throttles.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            enabled: flag_or(lookup, "LOGIN_RATE_LIMIT_ENABLED", defaults.enabled),
            per_second: parse_or(lookup, "LOGIN_RATE_LIMIT_PER_SECOND", defaults.per_second),
            burst_size: parse_or(lookup, "LOGIN_RATE_LIMIT_BURST", defaults.burst_size),
            trust_forwarded_for: flag_or(
                lookup,
                "LOGIN_RATE_LIMIT_TRUST_PROXY",
                defaults.trust_forwarded_for,
            ),
        }
    }
}
