//! Session and role-access core for MyEvent @ USM.
//!
//! This crate is UI-framework agnostic: the Leptos client and the axum server
//! both consume it. It owns the user model, the persisted-session capability,
//! the login flow and the route-guard decisions. Nothing here touches a
//! browser or a socket; callers supply storage and lookup implementations.
//!
//! ARCHITECTURE
//! ============
//! `store` and `lookup` are the two seams. `context` composes them into the
//! hydrate/login/logout lifecycle, and `guard` turns a `SessionState` into a
//! `GuardOutcome` that the hosting layer converts into navigation (client) or
//! a status code (server).

pub mod context;
pub mod credentials;
pub mod email;
pub mod error;
pub mod guard;
pub mod lookup;
pub mod store;
pub mod user;

pub use context::{LoginOutcome, SessionContext, SessionState, authenticate};
pub use credentials::{AcceptAnyPassword, CredentialVerifier};
pub use error::{LoginError, LookupError, StoreError};
pub use guard::{
    GuardOutcome, GuardPolicy, GuardStatus, HOME_PATH, LOGIN_PATH, RouteGuard, require_authenticated, require_role,
};
pub use lookup::{StaticDirectory, UserLookup};
pub use store::{FileStore, MemoryStore, SESSION_STORAGE_KEY, SessionStore, decode_user, encode_user};
pub use user::{Role, User};
