//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clipboard,
//! downloads) and pure rendering helpers from page and component logic.

pub mod color;
pub mod logo_svg;
pub mod share;
pub mod storage;
