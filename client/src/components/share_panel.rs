//! Save-to-gallery and export actions for the current design.
//!
//! Every action saves first; the export only runs once the insert succeeded,
//! and a successful save bumps the gallery refresh.

use leptos::prelude::*;

use crate::app::{AuthHandle, ensure_logged_in};
use crate::state::auth::AuthState;
use crate::state::design::DesignState;
use crate::state::gallery::{GalleryState, save_logo};
use crate::state::ui::{NoticeKind, UiState};
use crate::util::logo_svg::logo_svg_markup;
use crate::util::share::{
    ShareAction, copy_to_clipboard, current_page_url, download_file_name, download_svg, open_in_new_tab,
    share_intent_url,
};

const NOTICE_TTL_MS: u32 = 3000;

fn show_notice(ui: RwSignal<UiState>, kind: NoticeKind, text: String) {
    let Some(seq) = ui.try_update(|u| u.notify(kind, text)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
        ui.update(|u| u.dismiss_notice(seq));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (seq, NOTICE_TTL_MS);
}

async fn run_export(action: ShareAction, username: &str, markup: &str) -> Result<&'static str, String> {
    match action {
        ShareAction::Copy => copy_to_clipboard(markup).await.map(|()| "SVG copied to clipboard!"),
        ShareAction::Download => download_svg(&download_file_name(username), markup).map(|()| "Logo downloaded!"),
        ShareAction::Share => {
            let url = share_intent_url(username, current_page_url().as_deref());
            open_in_new_tab(&url).map(|()| "Opening X...")
        }
    }
}

#[component]
pub fn SharePanel() -> impl IntoView {
    let handle = expect_context::<AuthHandle>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let design = expect_context::<RwSignal<DesignState>>();
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let saving = RwSignal::new(false);

    // `None` saves without exporting.
    let run = move |action: Option<ShareAction>| {
        if saving.get_untracked() {
            return;
        }
        let reason = action.map_or("save your logo", ShareAction::action_text);
        if !ensure_logged_in(handle, ui, reason) {
            return;
        }
        let state = auth.get_untracked();
        let colors = design.with_untracked(|d| d.colors.clone());
        let Some(controller) = handle.controller() else {
            return;
        };
        let backend = controller.backend().clone();
        saving.set(true);
        leptos::task::spawn_local(async move {
            match save_logo(&backend, &state, &colors).await {
                Ok(record) => {
                    log::info!("saved logo {} for @{}", record.id, record.x_username);
                    gallery.update(GalleryState::request_refresh);
                    let outcome = match action {
                        Some(action) => run_export(action, &record.x_username, &logo_svg_markup(&colors)).await,
                        None => Ok("Saved to the gallery!"),
                    };
                    match outcome {
                        Ok(message) => show_notice(ui, NoticeKind::Success, message.to_owned()),
                        Err(e) => {
                            log::warn!("export failed after save: {e}");
                            show_notice(ui, NoticeKind::Error, format!("Saved, but the export failed: {e}"));
                        }
                    }
                }
                Err(e) => show_notice(ui, NoticeKind::Error, e.to_string()),
            }
            saving.set(false);
        });
    };

    let buttons = ShareAction::ALL
        .into_iter()
        .map(|action| {
            view! {
                <button class="btn" disabled=move || saving.get() on:click=move |_| run(Some(action))>
                    {action.button_label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="panel share-panel">
            <button class="btn btn--primary" disabled=move || saving.get() on:click=move |_| run(None)>
                {move || if saving.get() { "Saving..." } else { "Save to Gallery" }}
            </button>
            <div class="share-panel__actions">{buttons}</div>
            {move || {
                ui.get()
                    .notice
                    .map(|notice| {
                        let class = match notice.kind {
                            NoticeKind::Success => "notice notice--success",
                            NoticeKind::Error => "notice notice--error",
                        };
                        view! { <p class=class>{notice.text}</p> }
                    })
            }}
        </div>
    }
}
