//! Per-pixel skin membership

use image::RgbImage;

use super::thresholds::SkinThresholds;
use crate::color::{Hsv, MeanColor};

/// Boolean skin membership for every pixel of an image, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct SkinMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl SkinMask {
    /// Classify every pixel of `image` against `thresholds`.
    pub fn from_image(image: &RgbImage, thresholds: &SkinThresholds) -> Self {
        let bits = image
            .pixels()
            .map(|px| thresholds.is_skin(Hsv::from_bytes(px.0)))
            .collect();

        Self {
            width: image.width(),
            height: image.height(),
            bits,
        }
    }

    /// Number of pixels classified as skin.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&skin| skin).count()
    }

    /// Mean RGB over the masked pixels of `image`.
    ///
    /// `image` must be the image this mask was built from. Returns `None`
    /// when no pixel is masked.
    pub fn mean_color(&self, image: &RgbImage) -> Option<MeanColor> {
        debug_assert_eq!((image.width(), image.height()), (self.width, self.height));
        MeanColor::from_pixels(
            image
                .pixels()
                .zip(&self.bits)
                .filter(|(_, skin)| **skin)
                .map(|(px, _)| &px.0),
        )
    }
}
