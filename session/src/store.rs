//! Durable session persistence.
//!
//! DESIGN
//! ======
//! The browser build keeps one JSON-encoded `User` under a single storage key.
//! `SessionStore` abstracts that slot so native targets can swap in a file,
//! a keyring, or a server-side token without touching the login flow.
//!
//! A value that fails to parse surfaces as `StoreError::Corrupt`; the caller
//! (hydration) decides to discard it.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::StoreError;
use crate::user::User;

/// Storage key holding the serialized session user.
pub const SESSION_STORAGE_KEY: &str = "myevent_user";

/// Pluggable persistence for the single session slot.
pub trait SessionStore {
    /// Read the persisted user, if any.
    ///
    /// # Errors
    ///
    /// `StoreError::Corrupt` when a value exists but is not a valid `User`;
    /// `Io`/`Unavailable` when the backing medium cannot be read.
    fn load(&self) -> Result<Option<User>, StoreError>;

    /// Persist `user`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn save(&self, user: &User) -> Result<(), StoreError>;

    /// Remove the persisted value. Removing an absent value succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium rejects the removal.
    fn clear(&self) -> Result<(), StoreError>;
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn load(&self) -> Result<Option<User>, StoreError> {
        (**self).load()
    }

    fn save(&self, user: &User) -> Result<(), StoreError> {
        (**self).save(user)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

/// Parse a raw stored value into a `User`.
///
/// # Errors
///
/// Returns `StoreError::Corrupt` if `raw` is not a JSON-encoded `User`.
pub fn decode_user(raw: &str) -> Result<User, StoreError> {
    Ok(serde_json::from_str(raw)?)
}

/// Serialize a `User` for storage.
///
/// # Errors
///
/// Returns `StoreError::Corrupt` if serialization fails.
pub fn encode_user(user: &User) -> Result<String, StoreError> {
    Ok(serde_json::to_string(user)?)
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-process store holding the raw serialized value.
///
/// Keeps the raw string rather than a `User` so tests can seed arbitrary
/// (including malformed) contents.
#[derive(Debug, Default)]
pub struct MemoryStore {
    raw: Mutex<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw value, exactly as a browser might hold it.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { raw: Mutex::new(Some(raw.into())) }
    }

    /// Current raw contents.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot().clone()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.raw.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<User>, StoreError> {
        self.slot().as_deref().map(decode_user).transpose()
    }

    fn save(&self, user: &User) -> Result<(), StoreError> {
        let encoded = encode_user(user)?;
        *self.slot() = Some(encoded);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.slot() = None;
        Ok(())
    }
}

// =============================================================================
// FILE STORE
// =============================================================================

/// Native durable store: one JSON file per session slot.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/myevent_user.json`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(format!("{SESSION_STORAGE_KEY}.json")))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Result<Option<User>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => decode_user(&raw).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, user: &User) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // Write-then-rename: the slot holds either the old or the new value, never a partial one.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, encode_user(user)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
