//! Browser `localStorage` session slot.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is browser-only; native builds (tests, tooling) see an empty,
//! write-discarding slot so the rest of the client stays deterministic.

use usm_session::{SessionStore, StoreError, User};
#[cfg(feature = "csr")]
use usm_session::{SESSION_STORAGE_KEY, decode_user, encode_user};

/// `SessionStore` over `window.localStorage["myevent_user"]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| StoreError::Unavailable("localStorage is not accessible".to_owned()))
}

#[cfg(feature = "csr")]
fn js_error(err: &wasm_bindgen::JsValue) -> StoreError {
    StoreError::Unavailable(format!("{err:?}"))
}

impl SessionStore for LocalStorageStore {
    fn load(&self) -> Result<Option<User>, StoreError> {
        #[cfg(feature = "csr")]
        {
            let raw = local_storage()?.get_item(SESSION_STORAGE_KEY).map_err(|e| js_error(&e))?;
            raw.as_deref().map(decode_user).transpose()
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(None)
        }
    }

    fn save(&self, user: &User) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(SESSION_STORAGE_KEY, &encode_user(user)?)
                .map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = user;
            Ok(())
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(SESSION_STORAGE_KEY).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;
