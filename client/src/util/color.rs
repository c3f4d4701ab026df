//! Hex color parsing and the validated `HexColor` value type.
//!
//! Every color that reaches a `LogoColorSet` goes through `HexColor::parse`,
//! so saved records and local edits share one canonical `#RRGGBB` spelling.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;

use serde::{Deserialize, Serialize};

fn channel(digits: &str) -> Option<u8> {
    u8::from_str_radix(digits, 16).ok()
}

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => Some((
            channel(&hex[0..1].repeat(2))?,
            channel(&hex[1..2].repeat(2))?,
            channel(&hex[2..3].repeat(2))?,
        )),
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}

/// Rejected color input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color: {0:?}")]
pub struct InvalidColor(pub String);

/// A validated color in canonical upper-case `#RRGGBB` form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse `#RGB` / `#RRGGBB` (surrounding whitespace allowed).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColor`] when the input is not a hex color.
    pub fn parse(raw: &str) -> Result<Self, InvalidColor> {
        let (r, g, b) = parse_hex_rgb(raw).ok_or_else(|| InvalidColor(raw.to_owned()))?;
        Ok(Self::rgb(r, g, b))
    }

    /// Build a color from RGB channels.
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{r:02X}{g:02X}{b:02X}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = InvalidColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}
