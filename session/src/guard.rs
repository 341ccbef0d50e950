//! Route guards: decide whether a page may render for the current session.
//!
//! DESIGN
//! ======
//! Guards are pure. They return a `GuardOutcome` and leave navigation to the
//! host: the client router navigates on `Redirect`, the API layer answers
//! with 401/403. Nothing here is a security boundary on its own; the server
//! applies the same decisions to every protected endpoint.
//!
//! While the session is still loading every guard returns `Pending`, so no
//! redirect can fire before hydration completes.

use crate::context::SessionState;
use crate::user::Role;

/// Default destination for signed-out visitors.
pub const LOGIN_PATH: &str = "/login";
/// Default destination for signed-in users lacking the required role.
pub const HOME_PATH: &str = "/";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still hydrating; render nothing conclusive.
    Pending,
    Granted,
    /// Leave the page for this target.
    Redirect(String),
}

impl GuardOutcome {
    #[must_use]
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Redirect(target) => Some(target),
            _ => None,
        }
    }
}

/// Require any signed-in user. Signed-out visitors go to `redirect_target`
/// (default `/login`).
#[must_use]
pub fn require_authenticated(state: &SessionState, redirect_target: Option<&str>) -> GuardOutcome {
    if state.loading {
        return GuardOutcome::Pending;
    }
    if state.user.is_none() {
        return GuardOutcome::Redirect(redirect_target.unwrap_or(LOGIN_PATH).to_owned());
    }
    GuardOutcome::Granted
}

/// Require a user whose role is in `allowed`.
///
/// Signed-out visitors always go to `/login`, whatever `redirect_target` says.
/// Signed-in users with another role go to `redirect_target` (default `/`).
#[must_use]
pub fn require_role(state: &SessionState, allowed: &[Role], redirect_target: Option<&str>) -> GuardOutcome {
    if state.loading {
        return GuardOutcome::Pending;
    }
    match &state.user {
        None => GuardOutcome::Redirect(LOGIN_PATH.to_owned()),
        Some(user) if user.has_role(allowed) => GuardOutcome::Granted,
        Some(_) => GuardOutcome::Redirect(redirect_target.unwrap_or(HOME_PATH).to_owned()),
    }
}

// =============================================================================
// STATEFUL GUARD
// =============================================================================

/// Which check a `RouteGuard` applies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardPolicy {
    Authenticated { redirect_target: Option<String> },
    Role { allowed: Vec<Role>, redirect_target: Option<String> },
}

impl GuardPolicy {
    #[must_use]
    pub fn check(&self, state: &SessionState) -> GuardOutcome {
        match self {
            Self::Authenticated { redirect_target } => require_authenticated(state, redirect_target.as_deref()),
            Self::Role { allowed, redirect_target } => require_role(state, allowed, redirect_target.as_deref()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardStatus {
    Pending,
    Granted,
    /// Terminal for this navigation.
    Redirecting(String),
}

/// Per-page guard that remembers where it is in
/// `Pending -> Granted | Redirecting`.
///
/// Re-evaluate on every session change. `Granted` may fall to `Redirecting`
/// (logout while viewing the page); `Redirecting` never changes again.
#[derive(Clone, Debug)]
pub struct RouteGuard {
    policy: GuardPolicy,
    status: GuardStatus,
}

impl RouteGuard {
    #[must_use]
    pub fn new(policy: GuardPolicy) -> Self {
        Self { policy, status: GuardStatus::Pending }
    }

    #[must_use]
    pub fn authenticated(redirect_target: Option<&str>) -> Self {
        Self::new(GuardPolicy::Authenticated { redirect_target: redirect_target.map(str::to_owned) })
    }

    #[must_use]
    pub fn role(allowed: &[Role], redirect_target: Option<&str>) -> Self {
        Self::new(GuardPolicy::Role { allowed: allowed.to_vec(), redirect_target: redirect_target.map(str::to_owned) })
    }

    /// Apply the policy to `state` and advance the status.
    pub fn evaluate(&mut self, state: &SessionState) -> GuardOutcome {
        if let GuardStatus::Redirecting(target) = &self.status {
            return GuardOutcome::Redirect(target.clone());
        }
        let outcome = self.policy.check(state);
        match &outcome {
            GuardOutcome::Pending => {}
            GuardOutcome::Granted => self.status = GuardStatus::Granted,
            GuardOutcome::Redirect(target) => self.status = GuardStatus::Redirecting(target.clone()),
        }
        outcome
    }

    #[must_use]
    pub fn status(&self) -> &GuardStatus {
        &self.status
    }

    #[must_use]
    pub fn access_granted(&self) -> bool {
        self.status == GuardStatus::Granted
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
