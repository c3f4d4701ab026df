//! HTTP adapter for the hosted backend (GoTrue auth + PostgREST tables).
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `BackendError::Unavailable`
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `BackendError::Status` carrying the backend's own
//! message when the body has one. Gallery rows that fail to decode are
//! skipped with a warning instead of failing the whole page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::backend::{AuthBackend, BackendError, LogoStore};
use super::types::{NewUserLogo, UserLogoRecord};
use crate::config::BackendConfig;
use crate::state::auth::SessionHandle;

/// Hosted-backend client. Cheap to clone.
#[derive(Clone, Debug, Default)]
pub struct HttpBackend {
    config: Option<BackendConfig>,
}

impl HttpBackend {
    #[must_use]
    pub fn new(config: Option<BackendConfig>) -> Self {
        if cfg!(feature = "hydrate") && config.is_none() {
            log::warn!("backend not configured; login and gallery calls will fail");
        }
        Self { config }
    }

    /// Whether a backend URL and key were provided.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    #[cfg(feature = "hydrate")]
    fn config(&self) -> Result<&BackendConfig, BackendError> {
        self.config.as_ref().ok_or(BackendError::NotConfigured)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/signup")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/user")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/logout")
}

#[cfg(any(test, feature = "hydrate"))]
fn logos_endpoint(base: &str) -> String {
    format!("{base}/rest/v1/user_logos")
}

#[cfg(any(test, feature = "hydrate"))]
fn recent_logos_endpoint(base: &str, limit: usize) -> String {
    format!("{}?select=*&order=created_at.desc&limit={limit}", logos_endpoint(base))
}

/// Access token inside an opaque session, if it has one.
#[cfg(any(test, feature = "hydrate"))]
fn bearer_token(session: &SessionHandle) -> Option<&str> {
    session.raw().get("access_token").and_then(serde_json::Value::as_str)
}

#[cfg(any(test, feature = "hydrate"))]
fn tag_payload(username: &str) -> serde_json::Value {
    serde_json::json!({ "data": { "x_username": username } })
}

/// Best-effort human message out of an error body.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> BackendError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["msg", "message", "error_description", "error"]
                .iter()
                .find_map(|k| v.get(*k).and_then(serde_json::Value::as_str).map(str::to_owned))
        })
        .unwrap_or_else(|| body.chars().take(200).collect());
    BackendError::Status { status, message }
}

/// Decode an auth response into a session; it must carry an access token.
#[cfg(any(test, feature = "hydrate"))]
fn parse_session(body: &str) -> Result<SessionHandle, BackendError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| BackendError::Decode(e.to_string()))?;
    let session = SessionHandle::from_raw(value);
    if bearer_token(&session).is_none() {
        return Err(BackendError::Decode("session response has no access_token".to_owned()));
    }
    Ok(session)
}

/// Decode a PostgREST row array, dropping rows that do not match the schema.
#[cfg(any(test, feature = "hydrate"))]
fn parse_logo_rows(body: &str) -> Result<Vec<UserLogoRecord>, BackendError> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(body).map_err(|e| BackendError::Decode(e.to_string()))?;
    Ok(rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value::<UserLogoRecord>(row) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("skipping malformed gallery row: {e}");
                None
            }
        })
        .collect())
}

/// Decode the `return=representation` body of an insert.
#[cfg(any(test, feature = "hydrate"))]
fn parse_inserted(body: &str) -> Result<UserLogoRecord, BackendError> {
    let mut rows: Vec<UserLogoRecord> = serde_json::from_str(body).map_err(|e| BackendError::Decode(e.to_string()))?;
    if rows.is_empty() {
        return Err(BackendError::Decode("insert returned no rows".to_owned()));
    }
    Ok(rows.swap_remove(0))
}

/// Send a prepared request and return the body of a 2xx response.
#[cfg(feature = "hydrate")]
async fn send(request: gloo_net::http::Request) -> Result<String, BackendError> {
    let resp = request.send().await.map_err(|e| BackendError::Transport(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| BackendError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(status_error(status, &body));
    }
    Ok(body)
}

#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder, config: &BackendConfig, token: &str) -> gloo_net::http::RequestBuilder {
    builder
        .header("apikey", &config.anon_key)
        .header("Authorization", &format!("Bearer {token}"))
}

#[async_trait(?Send)]
impl AuthBackend for HttpBackend {
    async fn create_anonymous_session(&self) -> Result<SessionHandle, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let config = self.config()?;
            let request = gloo_net::http::Request::post(&signup_endpoint(&config.url))
                .header("apikey", &config.anon_key)
                .json(&serde_json::json!({ "data": {} }))
                .map_err(|e| BackendError::Transport(e.to_string()))?;
            parse_session(&send(request).await?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(BackendError::Unavailable)
        }
    }

    async fn tag_session(&self, session: &SessionHandle, username: &str) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let config = self.config()?;
            let token = bearer_token(session).ok_or_else(|| BackendError::Decode("session has no access_token".to_owned()))?;
            let request = authorized(gloo_net::http::Request::put(&user_endpoint(&config.url)), config, token)
                .json(&tag_payload(username))
                .map_err(|e| BackendError::Transport(e.to_string()))?;
            send(request).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, username);
            Err(BackendError::Unavailable)
        }
    }

    async fn end_session(&self, session: &SessionHandle) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let config = self.config()?;
            let token = bearer_token(session).ok_or_else(|| BackendError::Decode("session has no access_token".to_owned()))?;
            let request = authorized(gloo_net::http::Request::post(&logout_endpoint(&config.url)), config, token)
                .build()
                .map_err(|e| BackendError::Transport(e.to_string()))?;
            send(request).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
            Err(BackendError::Unavailable)
        }
    }
}

#[async_trait(?Send)]
impl LogoStore for HttpBackend {
    async fn list_recent(&self, limit: usize) -> Result<Vec<UserLogoRecord>, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let config = self.config()?;
            let request = authorized(
                gloo_net::http::Request::get(&recent_logos_endpoint(&config.url, limit)),
                config,
                &config.anon_key,
            )
            .build()
            .map_err(|e| BackendError::Transport(e.to_string()))?;
            parse_logo_rows(&send(request).await?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = limit;
            Err(BackendError::Unavailable)
        }
    }

    async fn insert(&self, session: Option<&SessionHandle>, logo: &NewUserLogo) -> Result<UserLogoRecord, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let config = self.config()?;
            let token = session.and_then(bearer_token).unwrap_or(config.anon_key.as_str());
            let request = authorized(gloo_net::http::Request::post(&logos_endpoint(&config.url)), config, token)
                .header("Prefer", "return=representation")
                .json(logo)
                .map_err(|e| BackendError::Transport(e.to_string()))?;
            parse_inserted(&send(request).await?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, logo);
            Err(BackendError::Unavailable)
        }
    }
}
