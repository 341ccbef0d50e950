mod config;
mod db;
mod routes;
mod services;
mod state;

use std::time::Duration;

const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    if config.seed_demo_users {
        tracing::warn!("SEED_DEMO_USERS is set; demo accounts accept any password");
        match db::seed_demo_users(&pool).await {
            Ok(created) => tracing::info!(created, "demo users seeded"),
            Err(e) => tracing::error!(error = %e, "demo user seed failed"),
        }
    }

    let state = state::AppState::new(pool, state::SessionSettings::from(&config));

    // Expired server sessions are already ignored by validation; this keeps the table small.
    let purge_pool = state.pool.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            match services::session::purge_expired(&purge_pool).await {
                Ok(0) => {}
                Ok(n) => tracing::info!(purged = n, "expired sessions removed"),
                Err(e) => tracing::warn!(error = %e, "session purge failed"),
            }
        }
    });

    let app = routes::app(state, &config.static_dir);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, static_dir = %config.static_dir.display(), "myevent server listening");
    axum::serve(listener, app).await.expect("server failed");
}
