//! Fixed-range skin thresholds in HSV space

use serde::Deserialize;

use crate::color::Hsv;
use crate::error::ConfigError;

/// Inclusive `[min, max]` range on a 0.0..=1.0 channel (saturation or value).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ChannelRange {
    pub min: f32,
    pub max: f32,
}

impl ChannelRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, x: f32) -> bool {
        x >= self.min && x <= self.max
    }

    fn validate(&self, channel: &'static str) -> Result<(), ConfigError> {
        let in_domain = |x: f32| x.is_finite() && (0.0..=1.0).contains(&x);
        if in_domain(self.min) && in_domain(self.max) && self.min <= self.max {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange {
                channel,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Inclusive hue range in degrees.
///
/// When `min > max` the range wraps through 0°, so `{ min: 340, max: 50 }`
/// accepts reds just below 360° as well as oranges up to 50°.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HueRange {
    pub min: f32,
    pub max: f32,
}

impl HueRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, h: f32) -> bool {
        if self.min <= self.max {
            h >= self.min && h <= self.max
        } else {
            h >= self.min || h <= self.max
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let in_domain = |x: f32| x.is_finite() && (0.0..=360.0).contains(&x);
        if in_domain(self.min) && in_domain(self.max) {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange {
                channel: "hue",
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Per-channel HSV box that classifies a pixel as skin.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkinThresholds {
    pub hue: HueRange,
    pub saturation: ChannelRange,
    pub value: ChannelRange,
}

impl SkinThresholds {
    /// Check ranges are ordered and inside each channel's domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.hue.validate()?;
        self.saturation.validate("saturation")?;
        self.value.validate("value")
    }

    /// Whether a single HSV pixel falls inside all three ranges.
    #[inline]
    pub fn is_skin(&self, hsv: Hsv) -> bool {
        self.hue.contains(hsv.h) && self.saturation.contains(hsv.s) && self.value.contains(hsv.v)
    }
}

impl Default for SkinThresholds {
    /// Hues from violet-pink round through red to orange, with low to
    /// moderate saturation, excluding deep shadows.
    ///
    /// The window wraps through 0° so that pink skin (blue above red) and
    /// balanced skin (red close to blue) are admitted alongside golden skin.
    fn default() -> Self {
        Self {
            hue: HueRange::new(280.0, 50.0),
            saturation: ChannelRange::new(0.10, 0.68),
            value: ChannelRange::new(0.35, 1.0),
        }
    }
}
