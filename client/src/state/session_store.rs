//! Persisted auth record in browser-local storage.
//!
//! ERROR HANDLING
//! ==============
//! Every operation fails soft. Read problems (missing entry, unreadable
//! storage, corrupt JSON) all come back as the logged-out state; write and
//! clear problems are logged and dropped. A broken store degrades to
//! "logged out", never to a crash.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use super::auth::AuthState;
use crate::util::storage::KeyValueStorage;

/// `localStorage` key holding the serialized [`AuthState`].
pub const AUTH_STORAGE_KEY: &str = "inco_auth_state";

/// Reads and writes the [`AuthState`] record.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<K> {
    storage: K,
}

impl<K: KeyValueStorage> SessionStore<K> {
    pub fn new(storage: K) -> Self {
        Self { storage }
    }

    /// Last persisted state, or logged-out when absent or unreadable.
    pub fn read(&self) -> AuthState {
        let raw = match self.storage.get(AUTH_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return AuthState::logged_out(),
            Err(e) => {
                log::warn!("Error reading auth state: {e}");
                return AuthState::logged_out();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("Error reading auth state: {e}");
                AuthState::logged_out()
            }
        }
    }

    pub fn write(&self, state: &AuthState) {
        let raw = match serde_json::to_string(state) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Error saving auth state: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(AUTH_STORAGE_KEY, &raw) {
            log::warn!("Error saving auth state: {e}");
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(AUTH_STORAGE_KEY) {
            log::warn!("Error clearing auth state: {e}");
        }
    }
}
