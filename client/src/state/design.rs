//! Logo design being edited: region colors plus the active brush color.
//!
//! Auth gating happens in the UI via `AuthController::require_login`; this
//! state only knows how to paint and reset.

#[cfg(test)]
#[path = "design_test.rs"]
mod design_test;

use crate::net::types::{LogoColorSet, LogoRegion};
use crate::util::color::HexColor;

/// Brush color selected on first load.
pub const DEFAULT_SELECTED_COLOR: &str = "#FE11C5";

/// Swatches offered by the color picker.
pub const PALETTE: [&str; 16] = [
    "#FE11C5", "#FF6B6B", "#FF9F1C", "#FFD93D", "#6BCB77", "#00C2A8", "#4D96FF", "#3B82F6",
    "#6C5CE7", "#A855F7", "#F472B6", "#1A1A2E", "#4B5563", "#9CA3AF", "#E5E7EB", "#FFFFFF",
];

fn default_selected_color() -> HexColor {
    HexColor::rgb(0xFE, 0x11, 0xC5)
}

#[derive(Clone, Debug, PartialEq)]
pub struct DesignState {
    pub colors: LogoColorSet,
    pub selected_color: HexColor,
    /// Region most recently painted, highlighted in the picker.
    pub active_region: Option<LogoRegion>,
}

impl Default for DesignState {
    fn default() -> Self {
        Self { colors: LogoColorSet::default(), selected_color: default_selected_color(), active_region: None }
    }
}

impl DesignState {
    pub fn select_color(&mut self, color: HexColor) {
        self.selected_color = color;
    }

    /// Fill `region` with the selected color.
    pub fn paint(&mut self, region: LogoRegion) {
        self.colors.set(region, self.selected_color.clone());
        self.active_region = Some(region);
    }

    /// Restore the default design. Auth state is untouched.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
