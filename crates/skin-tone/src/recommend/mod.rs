//! Preference-driven recommendations
//!
//! Static, process-wide tables: palettes keyed by (undertone, style) and
//! outfits keyed by (undertone, formality, style). Every key combination is
//! covered by an exhaustive `match`, so a missing entry is a compile error
//! rather than a runtime fallback.

mod outfits;
mod palettes;

pub use outfits::outfits;
pub use palettes::palette;

use serde::Serialize;

use crate::preference::{Formality, Preferences, Style};
use crate::undertone::Undertone;

/// Number of colors in every palette.
pub const PALETTE_SIZE: usize = 6;

/// Number of outfit suggestions per combination.
pub const OUTFIT_COUNT: usize = 3;

/// A named color with its `#RRGGBB` hex code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorEntry {
    pub name: &'static str,
    pub hex: &'static str,
}

impl ColorEntry {
    /// Parse the hex code into `[R, G, B]` bytes.
    ///
    /// Returns `None` if the code is not `#` followed by six hex digits.
    pub fn rgb(&self) -> Option<[u8; 3]> {
        let digits = self.hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some([channel(0)?, channel(2)?, channel(4)?])
    }
}

/// Palette and outfits for one (undertone, style, formality) combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendation {
    pub colors: &'static [ColorEntry; PALETTE_SIZE],
    pub outfits: &'static [&'static str; OUTFIT_COUNT],
}

/// Look up the palette and outfits for a classified undertone.
pub fn recommend(undertone: Undertone, style: Style, formality: Formality) -> Recommendation {
    Recommendation {
        colors: palette(undertone, style),
        outfits: outfits(undertone, formality, style),
    }
}

/// [`recommend`] with a validated preference pair.
pub fn recommend_for(undertone: Undertone, preferences: Preferences) -> Recommendation {
    recommend(undertone, preferences.style, preferences.formality)
}
