//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the customizer surfaces while reading/writing shared
//! state from Leptos context providers.

pub mod color_picker;
pub mod gallery;
pub mod header;
pub mod login_modal;
pub mod logo_canvas;
pub mod logo_preview;
pub mod share_panel;
