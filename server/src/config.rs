//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` via `dotenvy` before this runs, so values may
//! come from either source.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "../client/dist";
pub const DEFAULT_SESSION_TTL_HOURS: u32 = 168;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    /// Built client assets served for every non-API path.
    pub static_dir: PathBuf,
    pub session_ttl_hours: u32,
    pub cookie_secure: bool,
    pub db_max_connections: u32,
    /// Insert the demo student/organizer/admin accounts at startup.
    pub seed_demo_users: bool,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `DATABASE_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STATIC_DIR`: default `../client/dist`
    /// - `SESSION_TTL_HOURS`: default 168 (one week)
    /// - `COOKIE_SECURE`: `true`/`false`; otherwise inferred from `PUBLIC_URL`
    ///   starting with `https://`
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `SEED_DEMO_USERS`: `true`/`false`, default false. Local development
    ///   only; logins are not password-checked.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is unset or a numeric or boolean
    /// value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let port = parse_or("PORT", DEFAULT_PORT)?;
        let static_dir = std::env::var("STATIC_DIR").map_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);
        let session_ttl_hours = parse_or("SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS)?;
        let cookie_secure = env_bool("COOKIE_SECURE")
            .unwrap_or_else(|| std::env::var("PUBLIC_URL").is_ok_and(|url| url.starts_with("https://")));

        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;
        let seed_demo_users = flag_or("SEED_DEMO_USERS", false)?;

        Ok(Self {
            database_url,
            port,
            static_dir,
            session_ttl_hours,
            cookie_secure,
            db_max_connections,
            seed_demo_users,
        })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { var, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Like [`env_bool`], but a set value that is not a boolean is an error.
fn flag_or(var: &'static str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => env_bool(var).ok_or(ConfigError::Invalid { var, value: raw }),
        Err(_) => Ok(default),
    }
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
