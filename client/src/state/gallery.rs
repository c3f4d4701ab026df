//! Community gallery: fetch state plus the list/save calls behind it.
//!
//! DESIGN
//! ======
//! Every fetch is a full fresh read of at most [`GALLERY_PAGE_SIZE`] rows; no
//! caching, no paging, no retry. The newest-first ordering and the cap are
//! re-applied locally so a misbehaving backend cannot overflow the grid.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use super::auth::AuthState;
use crate::net::backend::{BackendError, LogoStore};
use crate::net::types::{LogoColorSet, NewUserLogo, UserLogoRecord};

/// Number of records shown in the gallery.
pub const GALLERY_PAGE_SIZE: usize = 12;

/// Gallery list could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to load user logos")]
pub struct FetchError(#[source] pub BackendError);

/// Logo could not be saved to the gallery.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    #[error("Please log in before saving")]
    LoginRequired,
    #[error("Failed to save. Please try again.")]
    Backend(#[source] BackendError),
}

/// Sort newest first (stable for equal timestamps) and keep at most `limit`.
pub fn most_recent_first(mut records: Vec<UserLogoRecord>, limit: usize) -> Vec<UserLogoRecord> {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    records.truncate(limit);
    records
}

/// Fetch the newest `limit` gallery records.
///
/// # Errors
///
/// Returns [`FetchError`] on any backend failure.
pub async fn list_recent<S: LogoStore + ?Sized>(store: &S, limit: usize) -> Result<Vec<UserLogoRecord>, FetchError> {
    match store.list_recent(limit).await {
        Ok(rows) => Ok(most_recent_first(rows, limit)),
        Err(e) => {
            log::error!("Error fetching logos: {e}");
            Err(FetchError(e))
        }
    }
}

/// Save the current design under the logged-in username.
///
/// # Errors
///
/// [`SaveError::LoginRequired`] without a username, [`SaveError::Backend`]
/// when the insert fails.
pub async fn save_logo<S: LogoStore + ?Sized>(
    store: &S,
    auth: &AuthState,
    colors: &LogoColorSet,
) -> Result<UserLogoRecord, SaveError> {
    let Some(username) = auth.username() else {
        return Err(SaveError::LoginRequired);
    };
    let logo = NewUserLogo { x_username: username.to_owned(), logo_colors: colors.clone() };
    store.insert(auth.session(), &logo).await.map_err(|e| {
        log::error!("Error saving logo: {e}");
        SaveError::Backend(e)
    })
}

/// Reactive gallery view state.
#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    pub items: Vec<UserLogoRecord>,
    pub loading: bool,
    pub error: Option<String>,
    /// Bumped whenever a save (or the user) asks for a fresh fetch.
    pub refresh_seq: u64,
}

impl GalleryState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<UserLogoRecord>, FetchError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Whether the grid has cards to show (otherwise the empty state).
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn count_label(&self) -> String {
        format!("{} unique designs", self.items.len())
    }

    pub fn request_refresh(&mut self) {
        self.refresh_seq = self.refresh_seq.wrapping_add(1);
    }
}
