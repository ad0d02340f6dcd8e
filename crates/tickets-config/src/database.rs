//! PostgreSQL connection settings.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: connection string (required)
//! - `DB_MAX_CONNECTIONS`: pool size (default: 10)
//! - `DB_ACQUIRE_TIMEOUT_SECS`: how long an operation waits for a connection (default: 5)
//!
//! Each store operation holds a connection only for its own duration and
//! returns it to the pool on every exit path. Setting `DB_MAX_CONNECTIONS=1`
//! serializes store access onto a single connection.

use std::time::Duration;

use crate::{ConfigError, env_lookup, parse_or, required};

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_connections: u32 = parse_or(lookup, "DB_MAX_CONNECTIONS", 10);
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            url: required(lookup, "DATABASE_URL")?,
            max_connections,
            acquire_timeout: Duration::from_secs(parse_or(lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5)),
        })
    }
}
