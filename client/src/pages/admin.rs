//! Administration page, admins only.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use usm_session::Role;

use crate::components::user_table::UserTable;
use crate::net::api::ALL_USERS_ENDPOINT;
use crate::state::auth::AuthState;
use crate::util::auth::install_role_guard;

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let granted = install_role_guard(auth, &[Role::Admin], None, use_navigate());

    view! {
        <Show when=move || granted.get() fallback=|| view! { <p class="page-loading">"Loading..."</p> }>
            <div class="admin-page">
                <h1>"Administration"</h1>
                <h2>"All Users"</h2>
                <UserTable auth=auth endpoint=ALL_USERS_ENDPOINT />
                <a class="btn" href="/dashboard">"Back to Dashboard"</a>
            </div>
        </Show>
    }
}
