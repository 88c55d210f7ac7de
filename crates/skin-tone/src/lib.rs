//! skin-tone: skin undertone detection and color recommendations
//!
//! Given one facial photograph, this crate estimates the skin undertone
//! (warm, cool or neutral) and looks up a six-color palette and three outfit
//! ideas for a style (subtle/bold) and formality (casual/professional).
//!
//! # Quick Start
//!
//! ```
//! use skin_tone::{Analyzer, Formality, Preferences, Style, Undertone};
//! use image::{Rgb, RgbImage};
//!
//! let photo = RgbImage::from_pixel(16, 16, Rgb([224, 172, 140]));
//! let analyzer = Analyzer::default();
//!
//! let result = analyzer
//!     .analyze_image(&photo, Preferences::new(Style::Subtle, Formality::Casual))
//!     .unwrap();
//!
//! assert_eq!(result.undertone, Undertone::Warm);
//! assert_eq!(result.colors.len(), 6);
//! assert_eq!(result.outfits.len(), 3);
//! ```
//!
//! For encoded uploads use [`Analyzer::analyze()`], which also validates the
//! preference strings and decodes JPEG/PNG bytes.
//!
//! # Pipeline
//!
//! ```text
//! bytes ──decode──> RgbImage
//!                      │
//!                      v
//!                 HSV per pixel ──thresholds──> SkinMask
//!                                                  │
//!                                                  v
//!                                   mean RGB over masked pixels
//!                                                  │
//!                                     red − blue vs ±margin
//!                                                  │
//!                                                  v
//!                                             Undertone
//!                                                  │
//!                       (undertone, style) ──> palette (6 colors)
//!            (undertone, formality, style) ──> outfits (3 strings)
//! ```
//!
//! # Why HSV
//!
//! Skin of every depth shares a band of pink-through-orange hues with low to
//! moderate saturation; brightness varies far more than hue does. Thresholding
//! in HSV therefore separates skin from clothing and background much better
//! than fixed per-channel RGB bounds, which couple brightness and color.
//!
//! The default hue window wraps through red so that pink (cool) and balanced
//! (neutral) skin is kept as well as golden (warm) skin.
//!
//! # Failure Modes
//!
//! Every failure maps to one [`ErrorKind`]:
//!
//! | Kind | Cause |
//! |------|-------|
//! | `DecodeError` | Empty or unreadable bytes |
//! | `NoSkinDetected` | Fewer skin pixels than the configured minimum |
//! | `UnknownPreference` | Style or formality outside the enumeration |

pub mod analyzer;
pub mod color;
pub mod error;
pub mod preference;
pub mod recommend;
pub mod skin;
pub mod undertone;


pub use analyzer::{decode, AnalysisResult, Analyzer, AnalyzerConfig};
pub use color::{Hsv, MeanColor};
pub use error::{AnalysisError, ConfigError, ErrorKind};
pub use preference::{Formality, PreferenceAxis, Preferences, Style, UnknownPreference};
pub use recommend::{recommend, ColorEntry, Recommendation, OUTFIT_COUNT, PALETTE_SIZE};
pub use skin::{SkinExtractor, SkinMask, SkinSample, SkinThresholds};
pub use undertone::{Undertone, UndertoneClassifier};
