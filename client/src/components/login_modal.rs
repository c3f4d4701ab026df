//! Username prompt shown when a logged-out user tries a design action.

use leptos::prelude::*;

use crate::app::{AuthHandle, sync_auth};
use crate::state::auth::{AuthPhase, AuthState};
use crate::state::ui::UiState;

#[component]
pub fn LoginModal() -> impl IntoView {
    let handle = expect_context::<AuthHandle>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let phase = expect_context::<RwSignal<AuthPhase>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let username = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let submitting = move || busy.get();

    let close = move || {
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        ui.update(UiState::close_login);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let raw = username.get_untracked();
        let Some(controller) = handle.controller() else {
            return;
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = controller.login(&raw).await;
            sync_auth(handle, auth, phase);
            busy.set(false);
            match result {
                Ok(_) => {
                    username.set(String::new());
                    ui.update(UiState::close_login);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    view! {
        <Show when=move || ui.with(|u| u.login_open)>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div
                    class="dialog dialog--login"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                    tabindex="0"
                >
                    <h2>"Welcome to INCO Colors"</h2>
                    <p class="dialog__intro">
                        {move || {
                            ui.with(|u| u.login_reason.clone())
                                .map_or_else(
                                    || "Enter your X username to start creating and sharing your custom INCO logo designs with the community.".to_owned(),
                                    |reason| format!("Enter your X username to {reason}."),
                                )
                        }}
                    </p>
                    <form class="login-form" on:submit=on_submit>
                        <label class="login-form__label">"X Username (without @)"</label>
                        <input
                            class="input"
                            type="text"
                            placeholder="your_username"
                            autofocus=true
                            disabled=submitting
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <Show when=move || error.get().is_some()>
                            <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                        </Show>
                        <div class="dialog__actions">
                            <button class="btn" type="button" disabled=submitting on:click=move |_| close()>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=submitting>
                                {move || if submitting() { "Logging in..." } else { "Start Creating" }}
                            </button>
                        </div>
                    </form>
                    <p class="dialog__footnote">
                        "Your username will be displayed in the community gallery and linked to your X profile."
                    </p>
                </div>
            </div>
        </Show>
    }
}
