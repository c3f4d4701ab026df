//! Static, non-interactive rendering of a saved color set.

use leptos::prelude::*;

use crate::net::types::LogoColorSet;
use crate::util::logo_svg::{LOGO_PATHS, LOGO_VIEW_BOX};

#[component]
pub fn LogoPreview(colors: LogoColorSet, #[prop(default = 120)] width: u32) -> impl IntoView {
    let paths = LOGO_PATHS
        .iter()
        .map(|&(region, path)| view! { <path d=path fill=colors.get(region).to_string()/> })
        .collect_view();
    view! {
        <svg class="logo-preview" width=width viewBox=LOGO_VIEW_BOX fill="none" xmlns="http://www.w3.org/2000/svg">
            {paths}
        </svg>
    }
}
