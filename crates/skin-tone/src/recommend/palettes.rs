//! Curated color palettes, keyed by (undertone, style)

use super::{ColorEntry, PALETTE_SIZE};
use crate::preference::Style;
use crate::undertone::Undertone;

const fn c(name: &'static str, hex: &'static str) -> ColorEntry {
    ColorEntry { name, hex }
}

static WARM_SUBTLE: [ColorEntry; PALETTE_SIZE] = [
    c("Warm Beige", "#D4A574"),
    c("Olive Green", "#808000"),
    c("Terracotta", "#E2725B"),
    c("Warm Brown", "#8B4513"),
    c("Peach", "#FFDAB9"),
    c("Coral", "#FF7F50"),
];

static WARM_BOLD: [ColorEntry; PALETTE_SIZE] = [
    c("Burnt Orange", "#CC5500"),
    c("Golden Yellow", "#FFD700"),
    c("Rich Red", "#DC143C"),
    c("Forest Green", "#228B22"),
    c("Rust", "#B7410E"),
    c("Amber", "#FFBF00"),
];

static COOL_SUBTLE: [ColorEntry; PALETTE_SIZE] = [
    c("Soft Pink", "#FFB6C1"),
    c("Powder Blue", "#B0E0E6"),
    c("Lavender", "#E6E6FA"),
    c("Cool Gray", "#A9A9A9"),
    c("Mint", "#98FF98"),
    c("Silver", "#C0C0C0"),
];

static COOL_BOLD: [ColorEntry; PALETTE_SIZE] = [
    c("Royal Blue", "#4169E1"),
    c("Magenta", "#FF00FF"),
    c("Purple", "#800080"),
    c("Emerald", "#50C878"),
    c("Fuchsia", "#C154C1"),
    c("Navy", "#000080"),
];

static NEUTRAL_SUBTLE: [ColorEntry; PALETTE_SIZE] = [
    c("Soft Taupe", "#B38B6D"),
    c("Sage", "#9DC183"),
    c("Dusty Rose", "#DCAE96"),
    c("Warm Gray", "#928E85"),
    c("Cream", "#FFFDD0"),
    c("Mauve", "#E0B0FF"),
];

static NEUTRAL_BOLD: [ColorEntry; PALETTE_SIZE] = [
    c("Teal", "#008080"),
    c("Burgundy", "#800020"),
    c("Deep Purple", "#6A0DAD"),
    c("Olive", "#808000"),
    c("Crimson", "#DC143C"),
    c("Jade", "#00A86B"),
];

/// Six colors for an undertone and style. Formality plays no part.
pub fn palette(undertone: Undertone, style: Style) -> &'static [ColorEntry; PALETTE_SIZE] {
    match (undertone, style) {
        (Undertone::Warm, Style::Subtle) => &WARM_SUBTLE,
        (Undertone::Warm, Style::Bold) => &WARM_BOLD,
        (Undertone::Cool, Style::Subtle) => &COOL_SUBTLE,
        (Undertone::Cool, Style::Bold) => &COOL_BOLD,
        (Undertone::Neutral, Style::Subtle) => &NEUTRAL_SUBTLE,
        (Undertone::Neutral, Style::Bold) => &NEUTRAL_BOLD,
    }
}
