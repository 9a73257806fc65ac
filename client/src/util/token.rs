//! Bearer-token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives in `localStorage` so a reload keeps the session. Only
//! login, logout, and 401 handling write it; every request reads it.
//!
//! TRADE-OFFS
//! ==========
//! Outside the browser the token is held in a thread-local slot instead. SSR
//! never stores one, and unit tests can exercise the same call sequence the
//! browser runs.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

#[cfg(not(feature = "hydrate"))]
use std::cell::RefCell;

#[cfg(feature = "hydrate")]
use crate::config::TOKEN_STORAGE_KEY;

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static MEMORY: RefCell<Option<String>> = const { RefCell::new(None) };
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored bearer token, ignoring blank values.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    let raw = storage().and_then(|s| s.get_item(TOKEN_STORAGE_KEY).ok().flatten());
    #[cfg(not(feature = "hydrate"))]
    let raw = MEMORY.with(|slot| slot.borrow().clone());

    raw.filter(|t| !t.trim().is_empty())
}

/// Persist `token` as the current bearer token.
pub fn store(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    MEMORY.with(|slot| *slot.borrow_mut() = Some(token.to_owned()));
}

/// Forget the stored bearer token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    MEMORY.with(|slot| *slot.borrow_mut() = None);
}

/// `Authorization` header value for `token`.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}
