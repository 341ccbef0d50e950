//! Route guards as Leptos effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages install one guard each. The guard re-runs whenever the session signal
//! changes, exposes an `access granted` signal for rendering, and navigates
//! once when the core decides the visitor must leave.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use usm_session::{GuardOutcome, GuardStatus, Role, RouteGuard, SessionState};

use crate::state::auth::AuthState;

/// Result of one guard evaluation.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct GuardStep {
    pub granted: bool,
    /// Set only on the evaluation that first decides to redirect.
    pub navigate_to: Option<String>,
}

pub(crate) fn step(guard: &mut RouteGuard, state: &SessionState) -> GuardStep {
    let already_leaving = matches!(guard.status(), GuardStatus::Redirecting(_));
    let outcome = guard.evaluate(state);
    let navigate_to = match outcome {
        GuardOutcome::Redirect(target) if !already_leaving => Some(target),
        _ => None,
    };
    GuardStep { granted: guard.access_granted(), navigate_to }
}

fn install_guard<F>(auth: RwSignal<AuthState>, mut guard: RouteGuard, navigate: F) -> RwSignal<bool>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let granted = RwSignal::new(false);
    Effect::new(move || {
        let state = auth.get();
        let GuardStep { granted: now_granted, navigate_to } = step(&mut guard, &state);
        granted.set(now_granted);
        if let Some(target) = navigate_to {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
    granted
}

/// Require a signed-in user; otherwise navigate to `redirect_target`
/// (default `/login`). Returns the access-granted signal.
pub fn install_auth_guard<F>(auth: RwSignal<AuthState>, redirect_target: Option<&str>, navigate: F) -> RwSignal<bool>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_guard(auth, RouteGuard::authenticated(redirect_target), navigate)
}

/// Require one of `allowed`. Signed-out visitors always go to `/login`;
/// other roles go to `redirect_target` (default `/`).
pub fn install_role_guard<F>(
    auth: RwSignal<AuthState>,
    allowed: &[Role],
    redirect_target: Option<&str>,
    navigate: F,
) -> RwSignal<bool>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_guard(auth, RouteGuard::role(allowed, redirect_target), navigate)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;
