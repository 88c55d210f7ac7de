//! Outfit suggestions, keyed by (undertone, formality, style)

use super::OUTFIT_COUNT;
use crate::preference::{Formality, Style};
use crate::undertone::Undertone;

type Outfits = [&'static str; OUTFIT_COUNT];

static WARM_CASUAL_SUBTLE: Outfits = [
    "Olive green t-shirt with beige chinos",
    "Terracotta sweater with brown jeans",
    "Peach blouse with warm brown pants",
];

static WARM_CASUAL_BOLD: Outfits = [
    "Burnt orange hoodie with dark jeans",
    "Golden yellow shirt with rust-colored jacket",
    "Rich red top with forest green cardigan",
];

static WARM_PROFESSIONAL_SUBTLE: Outfits = [
    "Warm beige blazer with olive dress pants",
    "Terracotta button-up with brown suit",
    "Peach blouse with neutral skirt and warm brown accessories",
];

static WARM_PROFESSIONAL_BOLD: Outfits = [
    "Golden yellow blouse with navy suit",
    "Burnt orange dress shirt with charcoal blazer",
    "Rich red suit jacket with amber accessories",
];

static COOL_CASUAL_SUBTLE: Outfits = [
    "Powder blue t-shirt with cool gray jeans",
    "Lavender sweater with silver accessories",
    "Soft pink top with mint green cardigan",
];

static COOL_CASUAL_BOLD: Outfits = [
    "Royal blue hoodie with black jeans",
    "Magenta shirt with purple jacket",
    "Emerald green top with navy pants",
];

static COOL_PROFESSIONAL_SUBTLE: Outfits = [
    "Powder blue blouse with cool gray suit",
    "Lavender dress shirt with silver accessories",
    "Soft pink blazer with navy skirt",
];

static COOL_PROFESSIONAL_BOLD: Outfits = [
    "Royal blue suit with white shirt",
    "Purple dress with magenta accessories",
    "Emerald blazer with navy dress pants",
];

static NEUTRAL_CASUAL_SUBTLE: Outfits = [
    "Soft taupe sweater with sage green pants",
    "Dusty rose top with warm gray jeans",
    "Cream blouse with mauve cardigan",
];

static NEUTRAL_CASUAL_BOLD: Outfits = [
    "Teal shirt with burgundy jacket",
    "Deep purple top with olive pants",
    "Jade green sweater with crimson accessories",
];

static NEUTRAL_PROFESSIONAL_SUBTLE: Outfits = [
    "Soft taupe suit with cream blouse",
    "Sage blazer with dusty rose accessories",
    "Warm gray suit with mauve shirt",
];

static NEUTRAL_PROFESSIONAL_BOLD: Outfits = [
    "Teal blazer with burgundy dress pants",
    "Deep purple suit with jade accessories",
    "Olive suit with crimson blouse",
];

/// Three outfit ideas for an undertone, formality and style.
pub fn outfits(undertone: Undertone, formality: Formality, style: Style) -> &'static Outfits {
    use Formality::{Casual, Professional};
    use Style::{Bold, Subtle};

    match (undertone, formality, style) {
        (Undertone::Warm, Casual, Subtle) => &WARM_CASUAL_SUBTLE,
        (Undertone::Warm, Casual, Bold) => &WARM_CASUAL_BOLD,
        (Undertone::Warm, Professional, Subtle) => &WARM_PROFESSIONAL_SUBTLE,
        (Undertone::Warm, Professional, Bold) => &WARM_PROFESSIONAL_BOLD,
        (Undertone::Cool, Casual, Subtle) => &COOL_CASUAL_SUBTLE,
        (Undertone::Cool, Casual, Bold) => &COOL_CASUAL_BOLD,
        (Undertone::Cool, Professional, Subtle) => &COOL_PROFESSIONAL_SUBTLE,
        (Undertone::Cool, Professional, Bold) => &COOL_PROFESSIONAL_BOLD,
        (Undertone::Neutral, Casual, Subtle) => &NEUTRAL_CASUAL_SUBTLE,
        (Undertone::Neutral, Casual, Bold) => &NEUTRAL_CASUAL_BOLD,
        (Undertone::Neutral, Professional, Subtle) => &NEUTRAL_PROFESSIONAL_SUBTLE,
        (Undertone::Neutral, Professional, Bold) => &NEUTRAL_PROFESSIONAL_BOLD,
    }
}
