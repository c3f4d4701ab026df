//! Hosted-backend connection settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders the public backend URL and anon key into the shell as
//! `<meta>` tags (see `app::shell`); the hydrated client reads them back here.
//! Only the public anon key is exposed; row access is enforced by the
//! backend's policies.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `<meta name=...>` carrying the backend base URL.
pub const BACKEND_URL_META: &str = "inco-backend-url";
/// `<meta name=...>` carrying the public anon key.
pub const BACKEND_KEY_META: &str = "inco-backend-key";

/// Base URL and public API key of the hosted backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    /// Build a config, trimming whitespace and any trailing `/` from the URL.
    /// Returns `None` when either value is blank.
    pub fn new(url: &str, anon_key: &str) -> Option<Self> {
        let url = url.trim().trim_end_matches('/');
        let anon_key = anon_key.trim();
        if url.is_empty() || anon_key.is_empty() {
            return None;
        }
        Some(Self { url: url.to_owned(), anon_key: anon_key.to_owned() })
    }

    /// Read the config from the current document's `<meta>` tags.
    pub fn from_document() -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            let url = read_meta(BACKEND_URL_META)?;
            let key = read_meta(BACKEND_KEY_META)?;
            let config = Self::new(&url, &key);
            if config.is_none() {
                log::warn!("backend meta tags present but blank");
            }
            config
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

#[cfg(feature = "hydrate")]
fn read_meta(name: &str) -> Option<String> {
    use wasm_bindgen::JsCast as _;

    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{name}\"]");
    let element = match document.query_selector(&selector) {
        Ok(Some(element)) => element,
        Ok(None) => {
            log::warn!("missing <meta name=\"{name}\">");
            return None;
        }
        Err(e) => {
            log::warn!("meta lookup failed for {name}: {e:?}");
            return None;
        }
    };
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    Some(meta.content())
}
