//! Table of users loaded from a role-guarded server endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! Organizer and admin pages render this once their client guard grants
//! access. The server applies the same role check; a 401 means the cookie
//! session is gone, so the local session is dropped and the page guard sends
//! the visitor to `/login`.

use leptos::prelude::*;
use usm_session::User;

use crate::net::api::FetchError;
use crate::state::auth::{AuthState, sign_out};

#[component]
pub fn UserTable(auth: RwSignal<AuthState>, endpoint: &'static str) -> impl IntoView {
    let users = RwSignal::new(Vec::<User>::new());
    let error = RwSignal::new(None::<FetchError>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_users(endpoint).await {
            Ok(list) => {
                let _ = users.try_set(list);
            }
            Err(e) => {
                if e.ends_session() {
                    sign_out(auth);
                }
                let _ = error.try_set(Some(e));
            }
        }
        let _ = loading.try_set(false);
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (auth, endpoint, sign_out);
        loading.set(false);
    }

    view! {
        <div class="user-table">
            <Show when=move || loading.get()>
                <p class="page-loading">"Loading..."</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="user-table__error">{move || error.get().map(|e| e.to_string()).unwrap_or_default()}</p>
            </Show>
            <table>
                <thead>
                    <tr><th>"Name"</th><th>"Email"</th><th>"Role"</th><th>"Matric"</th></tr>
                </thead>
                <tbody>
                    <For
                        each=move || users.get()
                        key=|u| u.id.clone()
                        children=|u| {
                            view! {
                                <tr>
                                    <td>{u.name}</td>
                                    <td>{u.email}</td>
                                    <td>{u.role.to_string()}</td>
                                    <td>{u.matric_number.unwrap_or_default()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
