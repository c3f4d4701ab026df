//! Community gallery of the most recently saved designs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches on mount and again whenever `GalleryState::refresh_seq` changes
//! (a save elsewhere on the page, or the refresh buttons here).

use leptos::prelude::*;

use crate::app::AuthHandle;
use crate::components::logo_preview::LogoPreview;
use crate::state::gallery::{GALLERY_PAGE_SIZE, GalleryState, list_recent};

#[component]
pub fn Gallery() -> impl IntoView {
    let handle = expect_context::<AuthHandle>();
    let gallery = expect_context::<RwSignal<GalleryState>>();

    let refresh_seq = Memo::new(move |_| gallery.with(|g| g.refresh_seq));
    Effect::new(move || {
        let seq = refresh_seq.get();
        let Some(controller) = handle.controller() else {
            return;
        };
        let backend = controller.backend().clone();
        gallery.update(GalleryState::begin_fetch);
        leptos::task::spawn_local(async move {
            let result = list_recent(&backend, GALLERY_PAGE_SIZE).await;
            // A newer refresh owns the state now.
            if gallery.with_untracked(|g| g.refresh_seq) == seq {
                gallery.update(|g| g.finish_fetch(result));
            }
        });
    });

    let refresh = move |_| gallery.update(GalleryState::request_refresh);

    let cards = move || {
        gallery
            .get()
            .items
            .into_iter()
            .map(|logo| {
                let profile = logo.profile_url();
                let handle_text = format!("@{}", logo.x_username);
                let created = logo.created_label();
                view! {
                    <div class="gallery__card">
                        <LogoPreview colors=logo.logo_colors/>
                        <a class="gallery__user" href=profile target="_blank" rel="noopener noreferrer">
                            {handle_text}
                        </a>
                        <p class="gallery__date">{created}</p>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section class="panel gallery">
            {move || {
                let state = gallery.get();
                if state.loading {
                    view! {
                        <div class="gallery__status">
                            <span class="spinner"></span>
                            "Loading community creations..."
                        </div>
                    }
                        .into_any()
                } else if let Some(error) = state.error {
                    view! {
                        <div class="gallery__status gallery__status--error">
                            <p>{error}</p>
                            <button class="btn btn--primary" on:click=refresh>"Try Again"</button>
                        </div>
                    }
                        .into_any()
                } else {
                    let has_items = state.has_items();
                    let count_label = state.count_label();
                    view! {
                        <div class="gallery__head">
                            <h3>"Community Creations"</h3>
                            <span class="gallery__count">{count_label}</span>
                        </div>
                        <Show
                            when=move || has_items
                            fallback=|| {
                                view! {
                                    <div class="gallery__empty">
                                        <h4>"No creations yet"</h4>
                                        <p>"Be the first to create and share your INCO logo design!"</p>
                                    </div>
                                }
                            }
                        >
                            <div class="gallery__grid">{cards}</div>
                        </Show>
                        <div class="gallery__foot">
                            <button class="btn" on:click=refresh>"Refresh Gallery"</button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
