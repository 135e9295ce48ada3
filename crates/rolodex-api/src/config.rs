//! Server configuration read from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATABASE_URL` | composed from `POSTGRES_*` |
//! | `POSTGRES_HOST` / `POSTGRES_PORT` | `localhost` / `5432` |
//! | `POSTGRES_USER` / `POSTGRES_PASSWORD` / `POSTGRES_DB` | `postgres` / `postgres` / `contacts` |
//! | `HOST` / `PORT` | `0.0.0.0` / `8000` |
//! | `DB_MAX_CONNECTIONS` | `10` |
//! | `RUN_MIGRATIONS` | `true` |
//! | `CORS_ALLOWED_ORIGINS` | `*` |
//! | `MAX_BODY_BYTES` | `1048576` |

use std::net::SocketAddr;
use std::str::FromStr;

use rolodex_core::{Error, Result};
use rolodex_db::pool::DEFAULT_MAX_CONNECTIONS;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default request body limit (1 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub run_migrations: bool,
    /// Allowed CORS origins. A single `*` allows any origin.
    pub allowed_origins: Vec<String>,
    pub max_body_bytes: usize,
}

impl ApiConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let database_url = match lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            Some(url) => url,
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                var("POSTGRES_USER", "postgres"),
                var("POSTGRES_PASSWORD", "postgres"),
                var("POSTGRES_HOST", "localhost"),
                var("POSTGRES_PORT", "5432"),
                var("POSTGRES_DB", "contacts"),
            ),
        };

        let allowed_origins = var("CORS_ALLOWED_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            database_url,
            host: var("HOST", "0.0.0.0"),
            port: parse_var("PORT", &var("PORT", &DEFAULT_PORT.to_string()))?,
            max_connections: parse_var(
                "DB_MAX_CONNECTIONS",
                &var("DB_MAX_CONNECTIONS", &DEFAULT_MAX_CONNECTIONS.to_string()),
            )?,
            run_migrations: parse_flag("RUN_MIGRATIONS", &var("RUN_MIGRATIONS", "true"))?,
            allowed_origins,
            max_body_bytes: parse_var(
                "MAX_BODY_BYTES",
                &var("MAX_BODY_BYTES", &DEFAULT_MAX_BODY_BYTES.to_string()),
            )?,
        })
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("invalid HOST/PORT {}:{}: {}", self.host, self.port, e)))
    }

    /// True when CORS should allow any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| Error::Config(format!("{key}={raw:?}: {e}")))
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Config(format!("{key}={other:?}: expected a boolean"))),
    }
}
