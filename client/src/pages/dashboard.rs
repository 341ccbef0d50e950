//! Dashboard for any signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is where a successful login lands. Visitors without a session are
//! sent to `/login` once hydration finishes.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use usm_session::Role;

use crate::components::profile_card::ProfileCard;
use crate::state::auth::{AuthState, sign_out_everywhere};
use crate::util::auth::install_auth_guard;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let granted = install_auth_guard(auth, None, use_navigate());
    let on_sign_out = Callback::new(move |()| sign_out_everywhere(auth));

    let role = move || auth.get().user.as_ref().map(|u| u.role);
    let is_organizer = move || matches!(role(), Some(Role::Organizer | Role::Admin));
    let is_admin = move || role() == Some(Role::Admin);
    let greeting = move || {
        auth.get()
            .user
            .as_ref()
            .map(|u| format!("Welcome, {}", if u.name.is_empty() { &u.email } else { &u.name }))
            .unwrap_or_default()
    };

    view! {
        <Show when=move || granted.get() fallback=|| view! { <p class="page-loading">"Loading..."</p> }>
            <div class="dashboard-page">
                <h1>{greeting}</h1>
                <ProfileCard auth=auth on_sign_out=on_sign_out />
                <nav class="dashboard-page__links">
                    <Show when=is_organizer>
                        <a class="btn" href="/organizer">"Organizer Tools"</a>
                    </Show>
                    <Show when=is_admin>
                        <a class="btn" href="/admin">"Administration"</a>
                    </Show>
                </nav>
            </div>
        </Show>
    }
}
