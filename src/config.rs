use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    pub database_max_connections: u32,

    pub api_prefix: String,

    // Logging
    pub log_dir: String,
    pub log_level: tracing::Level,

    /// Insert the demo employees when the directory is empty
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            server_addr: get_or("SERVER_ADDR", "0.0.0.0:8000"),
            database_url: get_or("DATABASE_URL", "sqlite://attendance.db"),
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS", &get_or("DATABASE_MAX_CONNECTIONS", "5"))?,
            api_prefix: get_or("API_PREFIX", "/api"),
            log_dir: get_or("LOG_DIR", "logs"),
            log_level: parse_var("LOG_LEVEL", &get_or("LOG_LEVEL", "debug"))?,
            seed_demo_data: parse_var("SEED_DEMO_DATA", &get_or("SEED_DEMO_DATA", "false"))?,
        })
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("{key} has an invalid value: {raw:?}"))
}
