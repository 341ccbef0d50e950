//! Public landing page.

use leptos::prelude::*;

use crate::components::profile_card::ProfileCard;
use crate::state::auth::{AuthState, sign_out_everywhere};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let signed_in = move || auth.get().is_authenticated();
    let on_sign_out = Callback::new(move |()| sign_out_everywhere(auth));

    view! {
        <div class="home-page">
            <h1>"MyEvent @ USM"</h1>
            <p>"Campus events for USM students, organizers, and staff."</p>
            <Show
                when=signed_in
                fallback=|| view! { <a class="btn btn--primary" href="/login">"Sign In"</a> }
            >
                <ProfileCard auth=auth on_sign_out=on_sign_out />
                <a class="btn" href="/dashboard">"Go to Dashboard"</a>
            </Show>
        </div>
    }
}
