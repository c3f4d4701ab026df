//! Shared DTOs for the hosted-backend boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the `user_logos` collection (`x_username`,
//! `logo_colors`, `created_at`) so PostgREST rows decode without renaming
//! glue. Colors are validated on decode through `HexColor`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util::color::HexColor;

/// A paintable region of the INCO logo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogoRegion {
    Background,
    LetterI,
    LetterN,
    LetterC,
    LetterO,
    Line1,
    Line2,
    Line3,
}

impl LogoRegion {
    /// Every region, in paint order (background first).
    pub const ALL: [Self; 8] = [
        Self::Background,
        Self::LetterI,
        Self::LetterN,
        Self::LetterC,
        Self::LetterO,
        Self::Line1,
        Self::Line2,
        Self::Line3,
    ];

    /// Human-readable label for tooltips and the picker.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Background => "Background",
            Self::LetterI => "Letter I",
            Self::LetterN => "Letter N",
            Self::LetterC => "Letter C",
            Self::LetterO => "Letter O",
            Self::Line1 => "Line 1",
            Self::Line2 => "Line 2",
            Self::Line3 => "Line 3",
        }
    }

    /// Key used for this region inside `logo_colors`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::LetterI => "letterI",
            Self::LetterN => "letterN",
            Self::LetterC => "letterC",
            Self::LetterO => "letterO",
            Self::Line1 => "line1",
            Self::Line2 => "line2",
            Self::Line3 => "line3",
        }
    }
}

/// Fill color for every logo region. All regions are always present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoColorSet {
    pub background: HexColor,
    pub letter_i: HexColor,
    pub letter_n: HexColor,
    pub letter_c: HexColor,
    pub letter_o: HexColor,
    pub line1: HexColor,
    pub line2: HexColor,
    pub line3: HexColor,
}

impl Default for LogoColorSet {
    fn default() -> Self {
        let ink = HexColor::rgb(0x1A, 0x1A, 0x2E);
        let white = HexColor::rgb(0xFF, 0xFF, 0xFF);
        Self {
            background: HexColor::rgb(0x3B, 0x82, 0xF6),
            letter_i: ink.clone(),
            letter_n: ink.clone(),
            letter_c: ink.clone(),
            letter_o: ink,
            line1: white.clone(),
            line2: white.clone(),
            line3: white,
        }
    }
}

impl LogoColorSet {
    #[must_use]
    pub fn get(&self, region: LogoRegion) -> &HexColor {
        match region {
            LogoRegion::Background => &self.background,
            LogoRegion::LetterI => &self.letter_i,
            LogoRegion::LetterN => &self.letter_n,
            LogoRegion::LetterC => &self.letter_c,
            LogoRegion::LetterO => &self.letter_o,
            LogoRegion::Line1 => &self.line1,
            LogoRegion::Line2 => &self.line2,
            LogoRegion::Line3 => &self.line3,
        }
    }

    pub fn set(&mut self, region: LogoRegion, color: HexColor) {
        let slot = match region {
            LogoRegion::Background => &mut self.background,
            LogoRegion::LetterI => &mut self.letter_i,
            LogoRegion::LetterN => &mut self.letter_n,
            LogoRegion::LetterC => &mut self.letter_c,
            LogoRegion::LetterO => &mut self.letter_o,
            LogoRegion::Line1 => &mut self.line1,
            LogoRegion::Line2 => &mut self.line2,
            LogoRegion::Line3 => &mut self.line3,
        };
        *slot = color;
    }
}

/// A saved logo as stored in the `user_logos` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserLogoRecord {
    /// Row identifier (UUID string).
    pub id: String,
    /// Owner's X handle, without the leading `@`.
    pub x_username: String,
    pub logo_colors: LogoColorSet,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserLogoRecord {
    /// Public X profile link for the owner.
    #[must_use]
    pub fn profile_url(&self) -> String {
        format!("https://x.com/{}", self.x_username)
    }

    /// Creation date as shown on gallery cards.
    #[must_use]
    pub fn created_label(&self) -> String {
        self.created_at.format("%b %-d, %Y").to_string()
    }
}

/// Insert payload for a new gallery entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewUserLogo {
    pub x_username: String,
    pub logo_colors: LogoColorSet,
}
