//! REST API helpers for communicating with the server.
//!
//! Browser (csr): real HTTP calls via `gloo-net`. The login call sets the
//! `session_token` cookie that every other `/api` route checks.
//! Native builds: stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Login failures arrive as
//! `LoginError` so the login page can show the usual messages; listing
//! failures distinguish an expired server session from everything else.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use serde::Deserialize;
use serde::Serialize;
use usm_session::{LoginError, User};

const LOGIN_ENDPOINT: &str = "/api/auth/login";
const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
pub const STUDENTS_ENDPOINT: &str = "/api/organizer/students";
pub const ALL_USERS_ENDPOINT: &str = "/api/admin/users";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Body of `POST /api/auth/login`, on success and on rejection.
#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LoginReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Interpret a login response. `reply` is `None` when the body was not JSON.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn login_result(status: u16, reply: Option<LoginReply>) -> Result<User, LoginError> {
    let reply = reply.unwrap_or_default();
    if let (true, Some(user)) = (reply.success, reply.user) {
        return Ok(user);
    }
    match reply.error.as_deref() {
        Some("InvalidEmailDomain") => Err(LoginError::InvalidEmailDomain),
        Some("InvalidCredentials") => Err(LoginError::InvalidCredentials),
        _ => Err(LoginError::LookupFailed(format!("sign-in failed: {status}"))),
    }
}

/// `POST /api/auth/login`. On success the browser holds the session cookie.
///
/// # Errors
///
/// Returns the server's rejection, or `LookupFailed` when the request or its
/// response could not be completed.
pub async fn login(email: &str, password: &str) -> Result<User, LoginError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&LoginRequest { email, password })
            .map_err(|e| LoginError::LookupFailed(e.to_string()))?;
        let resp = request
            .send()
            .await
            .map_err(|e| LoginError::LookupFailed(e.to_string()))?;
        let status = resp.status();
        let reply = resp.json::<LoginReply>().await.ok();
        login_result(status, reply)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (LOGIN_ENDPOINT, LoginRequest { email, password });
        Err(LoginError::LookupFailed("not available outside the browser".to_owned()))
    }
}

/// Best-effort `POST /api/auth/logout` so the server forgets its session too.
pub async fn logout() {
    #[cfg(feature = "csr")]
    {
        if let Err(e) = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            log::warn!("server logout failed: {e}");
        }
    }
    #[cfg(not(feature = "csr"))]
    let _ = LOGOUT_ENDPOINT;
}

/// Why a protected listing could not be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No valid server session; the visitor must sign in again.
    Unauthorized,
    /// Signed in, but the server refused this role.
    Forbidden,
    Failed(String),
}

impl FetchError {
    /// The server no longer recognizes this browser's session.
    #[must_use]
    pub fn ends_session(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized => f.write_str("Your session has expired. Please sign in again."),
            Self::Forbidden => f.write_str("You do not have access to this list."),
            Self::Failed(msg) => f.write_str(msg),
        }
    }
}

/// Map a non-success status from a protected endpoint.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn fetch_error(status: u16) -> FetchError {
    match status {
        401 => FetchError::Unauthorized,
        403 => FetchError::Forbidden,
        other => FetchError::Failed(format!("request failed: {other}")),
    }
}

/// `GET` a user listing from a role-guarded endpoint.
///
/// # Errors
///
/// Returns [`FetchError`] on transport failure or any non-200 status.
pub async fn fetch_users(endpoint: &str) -> Result<Vec<User>, FetchError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Failed(e.to_string()))?;
        if resp.status() != 200 {
            return Err(fetch_error(resp.status()));
        }
        resp.json::<Vec<User>>()
            .await
            .map_err(|e| FetchError::Failed(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = endpoint;
        Err(FetchError::Failed("not available outside the browser".to_owned()))
    }
}
