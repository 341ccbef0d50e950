//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the database pool, the user directory built on it, and the cookie
//! settings derived from configuration.

use sqlx::PgPool;

use crate::config::ServerConfig;
use crate::services::directory::PgDirectory;

/// Cookie/session settings handlers need on every login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub ttl_hours: u32,
    pub cookie_secure: bool,
}

impl From<&ServerConfig> for SessionSettings {
    fn from(config: &ServerConfig) -> Self {
        Self { ttl_hours: config.session_ttl_hours, cookie_secure: config.cookie_secure }
    }
}

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub directory: PgDirectory,
    pub settings: SessionSettings,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, settings: SessionSettings) -> Self {
        Self { directory: PgDirectory::new(pool.clone()), pool, settings }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn session_settings_follow_config() {
        let config = ServerConfig {
            database_url: "postgres://localhost/myevent".into(),
            port: 3000,
            static_dir: PathBuf::from("dist"),
            session_ttl_hours: 12,
            cookie_secure: true,
            db_max_connections: 5,
            seed_demo_users: false,
        };
        assert_eq!(SessionSettings::from(&config), SessionSettings { ttl_hours: 12, cookie_secure: true });
    }
}
