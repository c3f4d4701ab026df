//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the server and carries the hosted-backend settings
//! as `<meta>` tags. `App` builds the auth controller from them on the
//! client and exposes it, together with the reactive state signals, through
//! Leptos context.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{BACKEND_KEY_META, BACKEND_URL_META, BackendConfig};
use crate::net::api::HttpBackend;
use crate::pages::home::HomePage;
use crate::state::auth::{AuthPhase, AuthState};
use crate::state::auth_controller::AuthController;
use crate::state::design::DesignState;
use crate::state::gallery::GalleryState;
#[cfg(feature = "hydrate")]
use crate::state::session_store::SessionStore;
use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;

pub type AppAuthController = AuthController<BrowserStorage, HttpBackend>;

/// Shared handle to the auth controller.
///
/// The controller is not `Send`, so it lives in local arena storage and is
/// only built in the browser; server renders carry an empty handle. Handlers
/// clone the `Rc` out before awaiting.
#[derive(Clone, Copy)]
pub struct AuthHandle(Option<StoredValue<Rc<AppAuthController>, LocalStorage>>);

impl AuthHandle {
    /// Restore the persisted session in hydrate builds; empty otherwise.
    pub fn for_current_target() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let controller = AuthController::init(
                SessionStore::new(BrowserStorage),
                HttpBackend::new(BackendConfig::from_document()),
            );
            Self(Some(StoredValue::new_local(Rc::new(controller))))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self(None)
        }
    }

    pub fn controller(self) -> Option<Rc<AppAuthController>> {
        self.0.map(|stored| stored.get_value())
    }
}

/// Copy the controller's current state into the reactive mirrors.
pub fn sync_auth(handle: AuthHandle, auth: RwSignal<AuthState>, phase: RwSignal<AuthPhase>) {
    let Some(controller) = handle.controller() else {
        return;
    };
    auth.set(controller.state());
    phase.set(controller.phase());
}

/// Gate a design action on login. When logged out, opens the login prompt
/// with `reason` and returns `false`.
pub fn ensure_logged_in(handle: AuthHandle, ui: RwSignal<UiState>, reason: &str) -> bool {
    let Some(controller) = handle.controller() else {
        log::warn!("auth controller unavailable; cannot {reason}");
        return false;
    };
    match controller.require_login() {
        Ok(()) => true,
        Err(e) => {
            log::debug!("{e}; prompting for login to {reason}");
            ui.update(|u| u.open_login(Some(reason)));
            false
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions, backend: Option<BackendConfig>) -> impl IntoView {
    let (backend_url, backend_key) = backend.map(|b| (b.url, b.anon_key)).unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=BACKEND_URL_META content=backend_url/>
                <meta name=BACKEND_KEY_META content=backend_key/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let handle = AuthHandle::for_current_target();

    // Signals start logged out so server and client render the same markup;
    // the persisted session is applied once hydrated.
    let auth = RwSignal::new(AuthState::logged_out());
    let phase = RwSignal::new(AuthPhase::LoggedOut);
    let ui = RwSignal::new(UiState::default());
    Effect::new(move || {
        sync_auth(handle, auth, phase);
        if !auth.with_untracked(AuthState::is_authenticated) {
            ui.update(|u| u.open_login(None));
        }
    });

    provide_context(handle);
    provide_context(auth);
    provide_context(phase);
    provide_context(ui);
    provide_context(RwSignal::new(DesignState::default()));
    provide_context(RwSignal::new(GalleryState { loading: true, ..GalleryState::default() }));

    view! {
        <Stylesheet id="leptos" href="/pkg/inco-colors.css"/>
        <Title text="INCO Colors"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
