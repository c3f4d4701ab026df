//! Auth controller: the login/logout state machine.
//!
//! ARCHITECTURE
//! ============
//! `LoggedOut --login--> Authenticating --ok--> LoggedIn --logout--> LoggedOut`,
//! with `Authenticating --err--> LoggedOut` when the backend refuses an
//! anonymous session. The controller owns the persisted [`AuthState`]:
//! it is read once at construction, replaced by login/logout, and written
//! back through the [`SessionStore`] on every change.
//!
//! Methods take `&self` so the UI can share one controller across event
//! handlers; state lives in `Cell`/`RefCell` and no borrow is held across an
//! await point.

#[cfg(test)]
#[path = "auth_controller_test.rs"]
mod auth_controller_test;

use std::cell::{Cell, RefCell};

use super::auth::{AuthPhase, AuthState, Username, ValidationError};
use super::session_store::SessionStore;
use crate::net::backend::{AuthBackend, BackendError};
use crate::util::storage::KeyValueStorage;

/// Why a login or guarded action did not go through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Login already in progress")]
    Busy,
    #[error("Already logged in as @{0}")]
    AlreadyLoggedIn(String),
    #[error("Failed to login. Please try again. ({0})")]
    Remote(#[source] BackendError),
    #[error("Please log in to customize the logo")]
    LoginRequired,
}

pub struct AuthController<K, B> {
    store: SessionStore<K>,
    backend: B,
    phase: Cell<AuthPhase>,
    state: RefCell<AuthState>,
}

impl<K: KeyValueStorage, B: AuthBackend> AuthController<K, B> {
    /// Restore the persisted session and derive the starting phase from it.
    pub fn init(store: SessionStore<K>, backend: B) -> Self {
        let state = store.read();
        let phase = if state.is_authenticated() { AuthPhase::LoggedIn } else { AuthPhase::LoggedOut };
        log::debug!("auth restored: phase={phase:?} user={:?}", state.username());
        Self { store, backend, phase: Cell::new(phase), state: RefCell::new(state) }
    }

    pub fn phase(&self) -> AuthPhase {
        self.phase.get()
    }

    /// Snapshot of the current auth record.
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Gate for design actions (paint, reset, save).
    ///
    /// # Errors
    ///
    /// [`AuthError::LoginRequired`] unless the phase is `LoggedIn`; the caller
    /// is expected to open the login prompt instead of performing the action.
    pub fn require_login(&self) -> Result<(), AuthError> {
        if self.phase.get() == AuthPhase::LoggedIn {
            Ok(())
        } else {
            Err(AuthError::LoginRequired)
        }
    }

    /// Log in with a raw username from the login form.
    ///
    /// Opens an anonymous remote session, tags it with the username (failure
    /// there is only logged), then persists and returns the combined state.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Validation`] for blank input; the phase is unchanged.
    /// - [`AuthError::Busy`] while another login is in flight.
    /// - [`AuthError::AlreadyLoggedIn`] when a session is already active.
    /// - [`AuthError::Remote`] when session creation fails; the phase reverts
    ///   to `LoggedOut`.
    pub async fn login(&self, raw_username: &str) -> Result<AuthState, AuthError> {
        match self.phase.get() {
            AuthPhase::Authenticating => return Err(AuthError::Busy),
            AuthPhase::LoggedIn => {
                let current = self.state.borrow().username().unwrap_or_default().to_owned();
                return Err(AuthError::AlreadyLoggedIn(current));
            }
            AuthPhase::LoggedOut => {}
        }
        let username = Username::parse(raw_username)?;

        self.phase.set(AuthPhase::Authenticating);
        let session = match self.backend.create_anonymous_session().await {
            Ok(session) => session,
            Err(e) => {
                log::error!("anonymous session creation failed: {e}");
                self.phase.set(AuthPhase::LoggedOut);
                return Err(AuthError::Remote(e));
            }
        };

        if let Err(e) = self.backend.tag_session(&session, username.as_str()).await {
            log::warn!("could not tag session with username {username}: {e}");
        }

        let state = AuthState::logged_in(username, Some(session));
        self.store.write(&state);
        self.state.replace(state.clone());
        self.phase.set(AuthPhase::LoggedIn);
        log::info!("logged in as @{}", state.username().unwrap_or_default());
        Ok(state)
    }

    /// Log out. Local state is cleared first and unconditionally; ending the
    /// remote session is best effort.
    pub async fn logout(&self) {
        let previous = self.state.replace(AuthState::logged_out());
        self.store.clear();
        self.phase.set(AuthPhase::LoggedOut);

        if let Some(session) = previous.session() {
            if let Err(e) = self.backend.end_session(session).await {
                log::warn!("remote sign-out failed, local session cleared anyway: {e}");
            }
        }
    }
}
