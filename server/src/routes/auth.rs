//! Auth routes: directory lookup, login/logout, and API-side access checks.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client guards pages on its own copy of the session, which only decides
//! what to render. Every protected endpoint re-checks access here against the
//! server session bound to the `session_token` cookie, using the same guard
//! rules as the client.

use axum::extract::{FromRef, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;
use usm_session::email::is_institutional_email;
use usm_session::{
    AcceptAnyPassword, GuardOutcome, LOGIN_PATH, LoginError, LoginOutcome, Role, SessionState, User, authenticate,
    require_role,
};
use uuid::Uuid;

use crate::services::session;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

// =============================================================================
// COOKIES
// =============================================================================

pub(crate) fn session_cookie(token: String, secure: bool, ttl_hours: u32) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::hours(i64::from(ttl_hours)))
        .build()
}

pub(crate) fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// ACCESS CHECKS
// =============================================================================

/// Translate a guard decision into an API status.
///
/// A redirect to the login page means "not signed in" (401); any other
/// redirect means "signed in, wrong role" (403).
pub(crate) fn status_for(outcome: &GuardOutcome) -> Result<(), StatusCode> {
    match outcome {
        GuardOutcome::Granted => Ok(()),
        GuardOutcome::Redirect(target) if target == LOGIN_PATH => Err(StatusCode::UNAUTHORIZED),
        GuardOutcome::Redirect(_) => Err(StatusCode::FORBIDDEN),
        GuardOutcome::Pending => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}

/// Require `user` to hold one of `allowed`.
pub(crate) fn authorize(user: Option<&User>, allowed: &[Role]) -> Result<(), StatusCode> {
    let state = SessionState { user: user.cloned(), loading: false };
    status_for(&require_role(&state, allowed, None))
}

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    /// Reject with 403 unless this user holds one of `allowed`.
    pub fn require(&self, allowed: &[Role]) -> Result<(), StatusCode> {
        authorize(Some(&self.user), allowed)
    }
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session validation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LookupQuery {
    email: String,
}

/// `GET /api/auth/lookup?email=` — resolve an institutional email to a user.
pub async fn lookup(State(state): State<AppState>, Query(query): Query<LookupQuery>) -> Result<Json<User>, StatusCode> {
    if !is_institutional_email(&query.email) {
        return Err(StatusCode::BAD_REQUEST);
    }
    state
        .directory
        .find_by_email(&query.email)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "directory lookup failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

#[derive(Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub outcome: LoginOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

pub(crate) fn login_error_status(error: &LoginError) -> StatusCode {
    match error {
        LoginError::InvalidEmailDomain => StatusCode::BAD_REQUEST,
        LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        LoginError::LookupFailed(_) => StatusCode::BAD_GATEWAY,
    }
}

/// `POST /api/auth/login` — verify, open a server session, set the cookie.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(body): Json<LoginRequest>) -> Response {
    let user = match authenticate(&state.directory, &AcceptAnyPassword, &body.email, &body.password).await {
        Ok(user) => user,
        Err(e) => {
            tracing::info!(code = e.code(), "api login rejected");
            let status = login_error_status(&e);
            return (status, Json(LoginResponse { outcome: LoginOutcome::failed(e), user: None })).into_response();
        }
    };

    let Ok(user_id) = Uuid::parse_str(&user.id) else {
        tracing::error!(user_id = %user.id, "directory returned non-uuid user id");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };
    let token = match session::create_session(&state.pool, user_id, state.settings.ttl_hours).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "session creation failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create session").into_response();
        }
    };

    tracing::info!(user_id = %user.id, role = %user.role, "api login");
    let jar = jar.add(session_cookie(token, state.settings.cookie_secure, state.settings.ttl_hours));
    (jar, Json(LoginResponse { outcome: LoginOutcome::succeeded(), user: Some(user) })).into_response()
}

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<User> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — delete the session if any and clear the cookie.
///
/// Succeeds whether or not a session exists.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let token = jar.get(COOKIE_NAME).map(|c| c.value().to_owned()).unwrap_or_default();
    if !token.is_empty() {
        if let Err(e) = session::delete_session(&state.pool, &token).await {
            tracing::warn!(error = %e, "session delete failed during logout");
        }
    }

    let jar = jar.add(cleared_session_cookie(state.settings.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
