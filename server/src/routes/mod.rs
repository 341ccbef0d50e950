//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! API routes live under `/api`. Every other path is served from the built
//! client bundle, with unknown paths falling back to `index.html` so the
//! client router can resolve `/login`, `/dashboard`, `/admin` and friends.

pub mod auth;
pub mod users;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes only.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/lookup", get(auth::lookup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/admin/users", get(users::list_all))
        .route("/api/organizer/students", get(users::list_students))
        .route("/api/users/{id}", get(users::get_user))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API plus the static client bundle in `static_dir`.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let client = ServeDir::new(static_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    api_routes(state)
        .fallback_service(client)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
