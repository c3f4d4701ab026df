//! Interactive logo: each region is a clickable SVG path painted with the
//! selected color.

use leptos::prelude::*;

use crate::app::{AuthHandle, ensure_logged_in};
use crate::state::design::DesignState;
use crate::state::ui::UiState;
use crate::util::logo_svg::{LOGO_PATHS, LOGO_VIEW_BOX};

#[component]
pub fn LogoCanvas() -> impl IntoView {
    let handle = expect_context::<AuthHandle>();
    let design = expect_context::<RwSignal<DesignState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let regions = LOGO_PATHS
        .iter()
        .map(|&(region, path)| {
            let fill = move || design.with(|d| d.colors.get(region).to_string());
            let on_click = move |_| {
                if ensure_logged_in(handle, ui, "customize the logo") {
                    design.update(|d| d.paint(region));
                }
            };
            view! {
                <path
                    class="logo-canvas__region"
                    class:logo-canvas__region--active=move || design.with(|d| d.active_region == Some(region))
                    data-region=region.key()
                    aria-label=region.label()
                    d=path
                    fill=fill
                    on:click=on_click
                ></path>
            }
        })
        .collect_view();

    view! {
        <div class="panel logo-canvas">
            <svg class="logo-canvas__svg" viewBox=LOGO_VIEW_BOX xmlns="http://www.w3.org/2000/svg">
                {regions}
            </svg>
            <p class="logo-canvas__hint">
                "Click any part of the logo to paint it with "
                <span
                    class="logo-canvas__swatch"
                    style:background-color=move || design.with(|d| d.selected_color.to_string())
                ></span>
                {move || design.with(|d| d.selected_color.to_string())}
            </p>
        </div>
    }
}
