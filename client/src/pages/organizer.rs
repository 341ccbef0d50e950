//! Organizer workspace, open to organizers and admins.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use usm_session::Role;

use crate::components::user_table::UserTable;
use crate::net::api::STUDENTS_ENDPOINT;
use crate::state::auth::AuthState;
use crate::util::auth::install_role_guard;

const ORGANIZER_ROLES: &[Role] = &[Role::Organizer, Role::Admin];

#[component]
pub fn OrganizerPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let granted = install_role_guard(auth, ORGANIZER_ROLES, Some("/dashboard"), use_navigate());
    let organization = move || {
        auth.get()
            .user
            .as_ref()
            .and_then(|u| u.organization_id.clone())
            .unwrap_or_else(|| "No organization linked".to_owned())
    };

    view! {
        <Show when=move || granted.get() fallback=|| view! { <p class="page-loading">"Loading..."</p> }>
            <div class="organizer-page">
                <h1>"Organizer Tools"</h1>
                <p class="organizer-page__org">{organization}</p>
                <h2>"Students"</h2>
                <UserTable auth=auth endpoint=STUDENTS_ENDPOINT />
                <a class="btn" href="/dashboard">"Back to Dashboard"</a>
            </div>
        </Show>
    }
}
