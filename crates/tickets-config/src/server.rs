use crate::{env_lookup, flag_or, parse_or};

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Apply pending migrations before serving.
    pub run_migrations: bool,
    /// Install the Prometheus recorder and expose `/metrics`.
    pub metrics_enabled: bool,
    pub log_dir: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(lookup, "PORT", 3000),
            run_migrations: flag_or(lookup, "RUN_MIGRATIONS", true),
            metrics_enabled: flag_or(lookup, "METRICS_ENABLED", true),
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "storage/logs".to_string()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
