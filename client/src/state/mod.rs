//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! These types hold the authoritative app state: the persisted auth session
//! and its controller, the logo design being edited, the gallery listing and
//! UI chrome. Components receive them through Leptos context as signals.

pub mod auth;
pub mod auth_controller;
pub mod design;
pub mod gallery;
pub mod session_store;
pub mod ui;
