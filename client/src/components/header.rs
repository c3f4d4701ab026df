//! Page header: title, tagline and the logged-in user with logout.

use leptos::prelude::*;

use crate::app::{AuthHandle, sync_auth};
use crate::state::auth::{AuthPhase, AuthState};
use crate::state::ui::UiState;

#[component]
pub fn Header() -> impl IntoView {
    let handle = expect_context::<AuthHandle>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let phase = expect_context::<RwSignal<AuthPhase>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_logout = move |_| {
        let Some(controller) = handle.controller() else {
            return;
        };
        leptos::task::spawn_local(async move {
            controller.logout().await;
            sync_auth(handle, auth, phase);
            ui.update(|u| u.open_login(None));
        });
    };

    let username = move || auth.get().username().map(str::to_owned);

    view! {
        <header class="header">
            <div class="header__bar">
                <h1 class="header__title">"INCO Colors"</h1>
                <Show when=move || username().is_some()>
                    <div class="header__user">
                        <span class="header__username">
                            {move || format!("@{}", username().unwrap_or_default())}
                        </span>
                        <button class="btn btn--ghost" on:click=on_logout>"Logout"</button>
                    </div>
                </Show>
            </div>
            <p class="header__tagline">
                "Express your creativity with the INCO logo! Click on different parts and paint them with your favorite colors, then share your unique creation with Incommunity."
            </p>
        </header>
    }
}
