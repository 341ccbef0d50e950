//! Card showing the signed-in user's profile with a sign-out action.

use leptos::prelude::*;
use usm_session::User;

use crate::state::auth::AuthState;

const EMPTY: &str = "—";

/// Label/value pairs rendered by [`ProfileCard`], in display order.
pub(crate) fn profile_rows(user: &User) -> Vec<(&'static str, String)> {
    vec![
        ("Name", user.name.clone()),
        ("Email", user.email.clone()),
        ("Role", user.role.to_string()),
        ("Matric", user.matric_number.clone().unwrap_or_else(|| EMPTY.to_owned())),
        ("Organization", user.organization_id.clone().unwrap_or_else(|| EMPTY.to_owned())),
    ]
}

/// Profile rows for the current user. Renders nothing while signed out.
#[component]
pub fn ProfileCard(auth: RwSignal<AuthState>, on_sign_out: Callback<()>) -> impl IntoView {
    let rows = move || auth.get().user.as_ref().map(profile_rows).unwrap_or_default();

    view! {
        <div class="profile-card">
            <For
                each=rows
                key=|(label, _)| *label
                children=move |(label, value)| {
                    view! {
                        <div class="profile-card__row">
                            <span class="profile-card__label">{label}</span>
                            <span class="profile-card__value">{value}</span>
                        </div>
                    }
                }
            />
            <button class="btn" on:click=move |_| on_sign_out.run(())>
                "Sign Out"
            </button>
        </div>
    }
}

#[cfg(test)]
#[path = "profile_card_test.rs"]
mod profile_card_test;
