//! Brush color selection: preset swatches, free hex entry and reset.

use leptos::prelude::*;

use crate::app::{AuthHandle, ensure_logged_in};
use crate::state::design::{DesignState, PALETTE};
use crate::state::ui::UiState;
use crate::util::color::HexColor;

#[component]
pub fn ColorPicker() -> impl IntoView {
    let handle = expect_context::<AuthHandle>();
    let design = expect_context::<RwSignal<DesignState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let hex_input = RwSignal::new(String::new());
    let hex_error = RwSignal::new(None::<String>);

    let apply_hex = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let raw = hex_input.get_untracked();
        let candidate = if raw.trim().starts_with('#') { raw.trim().to_owned() } else { format!("#{}", raw.trim()) };
        match HexColor::parse(&candidate) {
            Ok(color) => {
                design.update(|d| d.select_color(color));
                hex_error.set(None);
                hex_input.set(String::new());
            }
            Err(e) => hex_error.set(Some(e.to_string())),
        }
    };

    let on_reset = move |_| {
        if ensure_logged_in(handle, ui, "reset the logo") {
            design.update(DesignState::reset);
            hex_error.set(None);
        }
    };

    let swatches = PALETTE
        .iter()
        .filter_map(|hex| HexColor::parse(hex).ok())
        .map(|color| {
            let value = color.to_string();
            let is_selected = {
                let color = color.clone();
                move || design.with(|d| d.selected_color == color)
            };
            view! {
                <button
                    class="color-picker__swatch"
                    class:color-picker__swatch--selected=is_selected
                    style:background-color=value.clone()
                    title=value
                    on:click=move |_| design.update(|d| d.select_color(color.clone()))
                ></button>
            }
        })
        .collect_view();

    view! {
        <div class="panel color-picker">
            <h2 class="panel__title">"Choose a color"</h2>
            <div class="color-picker__current">
                <span
                    class="color-picker__preview"
                    style:background-color=move || design.with(|d| d.selected_color.to_string())
                ></span>
                <code>{move || design.with(|d| d.selected_color.to_string())}</code>
            </div>
            <div class="color-picker__palette">{swatches}</div>
            <form class="color-picker__custom" on:submit=apply_hex>
                <input
                    class="input"
                    type="text"
                    maxlength="7"
                    placeholder="#FE11C5"
                    prop:value=move || hex_input.get()
                    on:input=move |ev| {
                        hex_input.set(event_target_value(&ev));
                        hex_error.set(None);
                    }
                />
                <button class="btn" type="submit">"Apply"</button>
            </form>
            <Show when=move || hex_error.get().is_some()>
                <p class="form-error">{move || hex_error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--ghost color-picker__reset" on:click=on_reset>"Reset"</button>
        </div>
    }
}
