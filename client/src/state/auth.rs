//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is what the session store persists and what the header, canvas
//! guard, and share panel read. Its shape makes the logged-in invariant
//! structural: a user is authenticated exactly when a validated `Username`
//! is present.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rejected username input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your X username")]
    Missing,
    #[error("Please enter a valid X username")]
    Invalid,
}

/// A display name with surrounding whitespace and leading `@` removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Normalize raw form input into a username.
    ///
    /// `"  @Alice  "` becomes `"Alice"`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::Missing`] for blank input, [`ValidationError::Invalid`]
    /// when nothing is left after stripping `@`.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Missing);
        }
        let clean = trimmed.trim_start_matches('@').trim();
        if clean.is_empty() {
            return Err(ValidationError::Invalid);
        }
        Ok(Self(clean.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque remote session as issued by the hosted auth service.
///
/// Only the backend adapter looks inside; everything else passes it through.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionHandle(serde_json::Value);

impl SessionHandle {
    #[cfg(any(test, feature = "hydrate"))]
    pub(crate) fn from_raw(raw: serde_json::Value) -> Self {
        Self(raw)
    }

    #[cfg(any(test, feature = "hydrate"))]
    pub(crate) fn raw(&self) -> &serde_json::Value {
        &self.0
    }
}

/// Lifecycle phase of the auth controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    LoggedOut,
    Authenticating,
    LoggedIn,
}

/// Combined local/remote authentication record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "PersistedAuthState", from = "PersistedAuthState")]
pub struct AuthState {
    username: Option<Username>,
    session: Option<SessionHandle>,
}

impl AuthState {
    #[must_use]
    pub fn logged_out() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn logged_in(username: Username, session: Option<SessionHandle>) -> Self {
        Self { username: Some(username), session }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_ref().map(Username::as_str)
    }

    #[must_use]
    pub fn session(&self) -> Option<&SessionHandle> {
        self.session.as_ref()
    }
}

/// On-disk JSON form: `{"isAuthenticated", "username", "remoteSession"}`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedAuthState {
    is_authenticated: bool,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    remote_session: Option<SessionHandle>,
}

impl From<AuthState> for PersistedAuthState {
    fn from(state: AuthState) -> Self {
        Self {
            is_authenticated: state.is_authenticated(),
            username: state.username.map(|u| u.0),
            remote_session: state.session,
        }
    }
}

impl From<PersistedAuthState> for AuthState {
    fn from(persisted: PersistedAuthState) -> Self {
        if !persisted.is_authenticated {
            return Self::logged_out();
        }
        match persisted.username.as_deref().map(Username::parse) {
            Some(Ok(username)) => Self::logged_in(username, persisted.remote_session),
            _ => Self::logged_out(),
        }
    }
}
