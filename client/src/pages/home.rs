//! Single-page customizer: logo, picker, export actions and the gallery.

use leptos::prelude::*;

use crate::components::color_picker::ColorPicker;
use crate::components::gallery::Gallery;
use crate::components::header::Header;
use crate::components::login_modal::LoginModal;
use crate::components::logo_canvas::LogoCanvas;
use crate::components::share_panel::SharePanel;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Header/>
            <main class="workspace">
                <div class="workspace__canvas">
                    <LogoCanvas/>
                    <SharePanel/>
                </div>
                <ColorPicker/>
            </main>
            <Gallery/>
            <LoginModal/>
        </div>
    }
}
