//! Skin region extraction
//!
//! Pixels are converted to HSV and tested against a fixed per-channel box
//! ([`SkinThresholds`]). The resulting [`SkinMask`] selects the pixels whose
//! RGB mean feeds the undertone classifier.
//!
//! Detection is purely color-statistical: there is no face detection, and
//! lighting is taken as-is.

mod mask;
mod thresholds;

pub use mask::SkinMask;
pub use thresholds::{ChannelRange, HueRange, SkinThresholds};

use image::RgbImage;
use serde::Serialize;

use crate::color::MeanColor;
use crate::error::{AnalysisError, ConfigError};

/// Fewer skin pixels than this is treated as "no skin".
pub const DEFAULT_MIN_SKIN_PIXELS: usize = 50;

/// Mean skin color together with the evidence behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkinSample {
    pub mean: MeanColor,
    pub pixel_count: usize,
    pub total_pixels: usize,
}

impl SkinSample {
    /// Fraction of the image classified as skin.
    pub fn coverage(&self) -> f32 {
        if self.total_pixels == 0 {
            0.0
        } else {
            self.pixel_count as f32 / self.total_pixels as f32
        }
    }
}

/// Finds skin pixels and averages their color.
#[derive(Debug, Clone)]
pub struct SkinExtractor {
    thresholds: SkinThresholds,
    min_skin_pixels: usize,
}

impl SkinExtractor {
    /// Build an extractor, validating the thresholds.
    ///
    /// `min_skin_pixels` of 0 is raised to 1: an empty mask never yields a mean.
    pub fn new(thresholds: SkinThresholds, min_skin_pixels: usize) -> Result<Self, ConfigError> {
        thresholds.validate()?;
        Ok(Self {
            thresholds,
            min_skin_pixels: min_skin_pixels.max(1),
        })
    }

    pub fn thresholds(&self) -> &SkinThresholds {
        &self.thresholds
    }

    pub fn min_skin_pixels(&self) -> usize {
        self.min_skin_pixels
    }

    /// Classify every pixel of `image`.
    pub fn mask(&self, image: &RgbImage) -> SkinMask {
        SkinMask::from_image(image, &self.thresholds)
    }

    /// Mean color of the skin region of `image`.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::NoSkinDetected`] when fewer than `min_skin_pixels`
    /// pixels match.
    pub fn extract(&self, image: &RgbImage) -> Result<SkinSample, AnalysisError> {
        let mask = self.mask(image);
        let found = mask.count();

        if found < self.min_skin_pixels {
            return Err(AnalysisError::NoSkinDetected {
                found,
                required: self.min_skin_pixels,
            });
        }

        let mean = mask
            .mean_color(image)
            .ok_or(AnalysisError::NoSkinDetected {
                found,
                required: self.min_skin_pixels,
            })?;

        Ok(SkinSample {
            mean,
            pixel_count: found,
            total_pixels: image.width() as usize * image.height() as usize,
        })
    }
}

impl Default for SkinExtractor {
    fn default() -> Self {
        Self {
            thresholds: SkinThresholds::default(),
            min_skin_pixels: DEFAULT_MIN_SKIN_PIXELS,
        }
    }
}
