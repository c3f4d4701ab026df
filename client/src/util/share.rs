//! Export actions offered after saving a design: copy, download, share on X.
//!
//! URL/filename building is pure and tested natively; the clipboard, the
//! download anchor and `window.open` are hydrate-only browser glue.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

/// What to do with the design once it has been saved to the gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareAction {
    Copy,
    Download,
    Share,
}

impl ShareAction {
    pub const ALL: [Self; 3] = [Self::Copy, Self::Download, Self::Share];

    #[must_use]
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Copy => "Copy SVG",
            Self::Download => "Download",
            Self::Share => "Share on X",
        }
    }

    /// Phrase used in "Continue to ..." prompts.
    #[must_use]
    pub fn action_text(self) -> &'static str {
        match self {
            Self::Copy => "copy your logo",
            Self::Download => "download your logo",
            Self::Share => "share on X",
        }
    }
}

const X_INTENT_URL: &str = "https://x.com/intent/tweet";

/// Prefilled post text for the share intent.
pub fn share_text(username: &str) -> String {
    format!("Just created my own INCO logo colors as @{username}! Make yours and join the Incommunity gallery.")
}

/// X web-intent link with the share text prefilled.
pub fn share_intent_url(username: &str, page_url: Option<&str>) -> String {
    let text = share_text(username);
    let mut params = vec![("text", text.as_str())];
    if let Some(page) = page_url {
        params.push(("url", page));
    }
    match url::Url::parse_with_params(X_INTENT_URL, &params) {
        Ok(url) => url.into(),
        Err(e) => {
            log::warn!("could not build share url: {e}");
            X_INTENT_URL.to_owned()
        }
    }
}

/// File name used for SVG downloads.
pub fn download_file_name(username: &str) -> String {
    let safe: String = username
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
        .collect();
    format!("inco-logo-{safe}.svg")
}

/// `data:` URL embedding SVG markup.
pub fn svg_data_url(markup: &str) -> String {
    let mut encoded = url::form_urlencoded::byte_serialize(markup.as_bytes()).collect::<String>();
    // form encoding writes spaces as '+', which data URLs read literally.
    encoded = encoded.replace('+', "%20");
    format!("data:image/svg+xml;charset=utf-8,{encoded}")
}

/// Put `text` on the clipboard.
///
/// # Errors
///
/// Returns a description when the clipboard is unavailable or refuses.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or("no window")?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| format!("clipboard write failed: {e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("not available on server".to_owned())
    }
}

/// Trigger a browser download of `markup` as `file_name`.
///
/// # Errors
///
/// Returns a description when the DOM cannot create the download link.
pub fn download_svg(file_name: &str, markup: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let document = web_sys::window().and_then(|w| w.document()).ok_or("no document")?;
        let anchor = document
            .create_element("a")
            .map_err(|e| format!("{e:?}"))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "created element is not an anchor".to_owned())?;
        anchor.set_href(&svg_data_url(markup));
        anchor.set_download(file_name);
        anchor.click();
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (file_name, markup);
        Err("not available on server".to_owned())
    }
}

/// Open `url` in a new tab.
///
/// # Errors
///
/// Returns a description when the window refuses to open it.
pub fn open_in_new_tab(url: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or("no window")?;
        window
            .open_with_url_and_target(url, "_blank")
            .map(|_| ())
            .map_err(|e| format!("{e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err("not available on server".to_owned())
    }
}

/// URL of the page currently shown, for linking back from shared posts.
pub fn current_page_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.location().href().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
