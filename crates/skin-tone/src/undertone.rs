//! Undertone classification from a mean skin color
//!
//! The classifier compares the red and blue channel means. A dead band of
//! `±margin` around equality is neutral so that small lighting shifts do not
//! flip the label.

use serde::Serialize;
use std::fmt;

use crate::color::MeanColor;
use crate::error::ConfigError;

/// Red/blue difference (0-255 scale) needed to call a tone warm or cool.
pub const DEFAULT_UNDERTONE_MARGIN: f32 = 10.0;

/// Skin undertone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Undertone {
    Warm,
    Cool,
    Neutral,
}

impl Undertone {
    pub const ALL: [Undertone; 3] = [Undertone::Warm, Undertone::Cool, Undertone::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Undertone::Warm => "warm",
            Undertone::Cool => "cool",
            Undertone::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Undertone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a mean skin color to an [`Undertone`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UndertoneClassifier {
    margin: f32,
}

impl UndertoneClassifier {
    /// # Errors
    ///
    /// [`ConfigError::InvalidMargin`] for a negative or non-finite margin.
    pub fn new(margin: f32) -> Result<Self, ConfigError> {
        if !margin.is_finite() || margin < 0.0 {
            return Err(ConfigError::InvalidMargin(margin));
        }
        Ok(Self { margin })
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Classify a mean color. Total: every input yields a label.
    ///
    /// # Example
    /// ```
    /// use skin_tone::{MeanColor, Undertone, UndertoneClassifier};
    ///
    /// let classifier = UndertoneClassifier::default();
    /// assert_eq!(classifier.classify(&MeanColor::new(220.0, 170.0, 140.0)), Undertone::Warm);
    /// assert_eq!(classifier.classify(&MeanColor::new(180.0, 170.0, 176.0)), Undertone::Neutral);
    /// ```
    pub fn classify(&self, mean: &MeanColor) -> Undertone {
        let delta = mean.red_blue_delta();
        // NaN fails both comparisons and lands on neutral
        if delta > self.margin {
            Undertone::Warm
        } else if -delta > self.margin {
            Undertone::Cool
        } else {
            Undertone::Neutral
        }
    }
}

impl Default for UndertoneClassifier {
    fn default() -> Self {
        Self {
            margin: DEFAULT_UNDERTONE_MARGIN,
        }
    }
}
