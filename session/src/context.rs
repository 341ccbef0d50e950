//! Session lifecycle: hydrate on startup, login, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionState` exists per running app. It is owned by the composition
//! root (the client `App` component, a CLI `main`, a test) and handed to
//! whoever needs it; there is no global.
//!
//! `SessionState` carries the transitions so that hosts which keep the state
//! in their own container (a Leptos signal, for example) run exactly the same
//! logic as `SessionContext`, which simply owns a store, a lookup and a state.
//!
//! CONCURRENCY
//! ===========
//! `SessionContext::login` takes `&mut self` across its single await, so two
//! logins cannot interleave. Dropping the login future before it resolves
//! leaves the session and the store untouched.

use serde::Serialize;

use crate::credentials::{AcceptAnyPassword, CredentialVerifier};
use crate::email::normalize_institutional_email;
use crate::error::{LoginError, StoreError};
use crate::lookup::UserLookup;
use crate::store::SessionStore;
use crate::user::User;

// =============================================================================
// SESSION STATE
// =============================================================================

/// Current user plus a flag that stays `true` until hydration finishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Resolved state read from `store`. See [`SessionState::hydrate`].
    #[must_use]
    pub fn hydrated_from<S: SessionStore + ?Sized>(store: &S) -> Self {
        let mut state = Self::default();
        state.hydrate(store);
        state
    }

    /// Adopt the persisted user, if any, and finish loading.
    ///
    /// A corrupt entry is discarded and the session falls back to signed-out.
    /// Storage that cannot be read at all is treated as "no session" and left
    /// in place.
    pub fn hydrate<S: SessionStore + ?Sized>(&mut self, store: &S) {
        self.user = match store.load() {
            Ok(user) => user,
            Err(StoreError::Corrupt(e)) => {
                tracing::warn!(error = %e, "discarding corrupt stored session");
                if let Err(e) = store.clear() {
                    tracing::error!(error = %e, "failed to remove corrupt stored session");
                }
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "session storage unreadable; starting signed out");
                None
            }
        };
        self.loading = false;
    }

    /// Make `user` the current user and persist it.
    ///
    /// A failed write keeps the in-memory session; only reload survival is lost.
    pub fn adopt<S: SessionStore + ?Sized>(&mut self, store: &S, user: User) {
        if let Err(e) = store.save(&user) {
            tracing::error!(error = %e, user_id = %user.id, "failed to persist session");
        }
        tracing::info!(user_id = %user.id, role = %user.role, "signed in");
        self.user = Some(user);
        self.loading = false;
    }

    /// Drop the current user and remove the persisted entry. Idempotent.
    pub fn clear<S: SessionStore + ?Sized>(&mut self, store: &S) {
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "signed out");
        }
        if let Err(e) = store.clear() {
            tracing::error!(error = %e, "failed to remove stored session");
        }
        self.loading = false;
    }
}

// =============================================================================
// LOGIN
// =============================================================================

/// Structured login result handed back to the UI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<LoginError>,
}

impl LoginOutcome {
    #[must_use]
    pub fn succeeded() -> Self {
        Self { success: true, error: None }
    }

    #[must_use]
    pub fn failed(error: LoginError) -> Self {
        Self { success: false, error: Some(error) }
    }

    /// Human-readable failure message, if the login failed.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

/// Validate the email domain, look the user up, and check the password.
///
/// The lookup is never called for a non-USM email.
///
/// # Errors
///
/// `InvalidEmailDomain` for a non-USM address, `InvalidCredentials` when no
/// user matches or the verifier rejects the password, `LookupFailed` when the
/// directory itself fails.
pub async fn authenticate<L, V>(lookup: &L, verifier: &V, email: &str, password: &str) -> Result<User, LoginError>
where
    L: UserLookup + ?Sized,
    V: CredentialVerifier + ?Sized,
{
    let Some(email) = normalize_institutional_email(email) else {
        return Err(LoginError::InvalidEmailDomain);
    };
    let user = lookup.lookup(email).await?.ok_or(LoginError::InvalidCredentials)?;
    if !verifier.verify(&user, password) {
        return Err(LoginError::InvalidCredentials);
    }
    Ok(user)
}

// =============================================================================
// SESSION CONTEXT
// =============================================================================

/// Owned session: storage, directory, verifier and the live state.
pub struct SessionContext<S, L, V = AcceptAnyPassword> {
    store: S,
    lookup: L,
    verifier: V,
    state: SessionState,
}

impl<S, L> SessionContext<S, L, AcceptAnyPassword>
where
    S: SessionStore,
    L: UserLookup,
{
    /// Context using the placeholder password check. Starts in the loading state.
    #[must_use]
    pub fn new(store: S, lookup: L) -> Self {
        Self::with_verifier(store, lookup, AcceptAnyPassword)
    }
}

impl<S, L, V> SessionContext<S, L, V>
where
    S: SessionStore,
    L: UserLookup,
    V: CredentialVerifier,
{
    #[must_use]
    pub fn with_verifier(store: S, lookup: L, verifier: V) -> Self {
        Self { store, lookup, verifier, state: SessionState::default() }
    }

    /// Read the persisted session. Runs once at startup.
    pub fn hydrate(&mut self) -> &SessionState {
        self.state.hydrate(&self.store);
        &self.state
    }

    /// Attempt a login; the outcome is returned, never raised.
    pub async fn login(&mut self, email: &str, password: &str) -> LoginOutcome {
        match authenticate(&self.lookup, &self.verifier, email, password).await {
            Ok(user) => {
                self.state.adopt(&self.store, user);
                LoginOutcome::succeeded()
            }
            Err(e) => {
                tracing::info!(code = e.code(), "login rejected");
                LoginOutcome::failed(e)
            }
        }
    }

    pub fn logout(&mut self) {
        self.state.clear(&self.store);
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
