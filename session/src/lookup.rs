//! Auth Query Service seam: resolve an email to a user record.
//!
//! The browser build performs the lookup over HTTP (no `Send` futures on
//! wasm32); the server resolves against Postgres from a multi-threaded
//! runtime, so the trait is `Send` everywhere except wasm32.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::LookupError;
use crate::user::User;

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait UserLookup {
    /// Return the user registered under `email`, or `None`.
    async fn lookup(&self, email: &str) -> Result<Option<User>, LookupError>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl<L: UserLookup + Send + Sync + ?Sized> UserLookup for Arc<L> {
    async fn lookup(&self, email: &str) -> Result<Option<User>, LookupError> {
        (**self).lookup(email).await
    }
}

/// Fixed in-memory directory. Email comparison ignores ASCII case.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    users: Vec<User>,
}

impl StaticDirectory {
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    #[must_use]
    pub fn find(&self, email: &str) -> Option<&User> {
        let email = email.trim();
        self.users.iter().find(|u| u.email.eq_ignore_ascii_case(email))
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl UserLookup for StaticDirectory {
    async fn lookup(&self, email: &str) -> Result<Option<User>, LookupError> {
        Ok(self.find(email).cloned())
    }
}
