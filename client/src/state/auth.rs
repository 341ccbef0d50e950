//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `RwSignal<AuthState>` and provides it via context. Route
//! guards and user-aware components read it; only the functions here write
//! it, always through the same `SessionState` transitions the core uses.
//!
//! A login that resolves after its page was torn down writes through
//! `try_update`, which does nothing once the signal is disposed.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use usm_session::email::normalize_institutional_email;
use usm_session::{LoginError, LoginOutcome, SessionState, SessionStore, User};

use crate::util::storage::LocalStorageStore;

/// Current user plus hydration flag; see [`SessionState`].
pub type AuthState = SessionState;

/// Populate `auth` from `localStorage`. Called once by `App`.
pub fn hydrate_auth(auth: RwSignal<AuthState>) {
    let _ = auth.try_update(|state| state.hydrate(&LocalStorageStore));
}

/// Fold an authentication result into `state`, persisting on success.
pub(crate) fn apply_login<S: SessionStore + ?Sized>(
    state: &mut AuthState,
    store: &S,
    result: Result<User, LoginError>,
) -> LoginOutcome {
    match result {
        Ok(user) => {
            state.adopt(store, user);
            LoginOutcome::succeeded()
        }
        Err(e) => LoginOutcome::failed(e),
    }
}

/// Check the email domain, then hand the credentials to `remote`. A
/// non-USM address fails here without calling `remote`.
pub(crate) async fn check_then_login<F, Fut>(email: &str, password: &str, remote: F) -> Result<User, LoginError>
where
    F: FnOnce(String, String) -> Fut,
    Fut: Future<Output = Result<User, LoginError>>,
{
    let Some(email) = normalize_institutional_email(email) else {
        return Err(LoginError::InvalidEmailDomain);
    };
    remote(email.to_owned(), password.to_owned()).await
}

/// Sign in through `POST /api/auth/login`, which also sets the server
/// session cookie, then adopt the returned user.
pub async fn sign_in(auth: RwSignal<AuthState>, email: &str, password: &str) -> LoginOutcome {
    let result = check_then_login(email, password, |email, password| async move {
        crate::net::api::login(&email, &password).await
    })
    .await;
    let fallback = match &result {
        Ok(_) => LoginOutcome::succeeded(),
        Err(e) => LoginOutcome::failed(e.clone()),
    };
    auth.try_update(|state| apply_login(state, &LocalStorageStore, result))
        .unwrap_or(fallback)
}

/// Drop the user and clear storage. Safe to call when signed out.
pub fn sign_out(auth: RwSignal<AuthState>) {
    let _ = auth.try_update(|state| state.clear(&LocalStorageStore));
}

/// Sign out locally, then tell the server to drop its session cookie.
pub fn sign_out_everywhere(auth: RwSignal<AuthState>) {
    sign_out(auth);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(crate::net::api::logout());
}
