//! Color types used by the skin pipeline
//!
//! - [`Hsv`]: hue/saturation/value, the space skin thresholds operate in
//! - [`MeanColor`]: averaged RGB intensities over a set of pixels
//!
//! # Example
//!
//! ```
//! use skin_tone::Hsv;
//!
//! let hsv = Hsv::from_u8(224, 172, 140);
//! assert!(hsv.h > 20.0 && hsv.h < 25.0);
//! ```

mod hsv;
mod mean;

pub use hsv::Hsv;
pub use mean::MeanColor;
