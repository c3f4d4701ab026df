//! Seams to the hosted backend.
//!
//! ARCHITECTURE
//! ============
//! `AuthBackend` covers the anonymous-session lifecycle and `LogoStore` the
//! `user_logos` collection. `net::api::HttpBackend` implements both over
//! HTTP; tests substitute in-memory fakes. Futures are `?Send` because the
//! browser implementation holds `gloo-net` handles.

use async_trait::async_trait;

use super::types::{NewUserLogo, UserLogoRecord};
use crate::state::auth::SessionHandle;

/// Failure talking to the hosted backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// Backend URL or key was not provided to this page.
    #[error("backend is not configured")]
    NotConfigured,
    /// The call is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("backend responded {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Anonymous session lifecycle on the hosted auth service.
#[async_trait(?Send)]
pub trait AuthBackend {
    /// Open a new anonymous session.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] when the backend rejects or cannot be reached.
    async fn create_anonymous_session(&self) -> Result<SessionHandle, BackendError>;

    /// Attach the display name to the session's user metadata.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] when the metadata update fails.
    async fn tag_session(&self, session: &SessionHandle, username: &str) -> Result<(), BackendError>;

    /// Invalidate the session remotely.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] when the backend does not confirm logout.
    async fn end_session(&self, session: &SessionHandle) -> Result<(), BackendError>;
}

/// Read/insert access to the `user_logos` collection.
#[async_trait(?Send)]
pub trait LogoStore {
    /// Newest-first records, at most `limit` of them.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] on transport, status, or decode failure.
    async fn list_recent(&self, limit: usize) -> Result<Vec<UserLogoRecord>, BackendError>;

    /// Insert a logo and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] when the insert is rejected.
    async fn insert(&self, session: Option<&SessionHandle>, logo: &NewUserLogo) -> Result<UserLogoRecord, BackendError>;
}
