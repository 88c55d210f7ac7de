//! HSV color type
//!
//! Separating hue from saturation and brightness lets skin be described as a
//! compact box of hue angles, largely independent of how bright the photo is.

/// A color in HSV space.
///
/// - `h`: hue angle in degrees, `0.0..360.0`
/// - `s`: saturation, `0.0..=1.0`
/// - `v`: value (brightness), `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees (0.0..360.0)
    pub h: f32,
    /// Saturation (0.0..=1.0)
    pub s: f32,
    /// Value (0.0..=1.0)
    pub v: f32,
}

impl Hsv {
    /// Create an HSV color from already-normalized components.
    #[inline]
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Convert an 8-bit RGB pixel to HSV.
    ///
    /// Achromatic pixels (all channels equal) get hue 0.0 and saturation 0.0.
    ///
    /// # Example
    /// ```
    /// use skin_tone::Hsv;
    /// let blue = Hsv::from_u8(0, 0, 255);
    /// assert_eq!(blue.h, 240.0);
    /// assert_eq!(blue.s, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        let r = r as f32 / 255.0;
        let g = g as f32 / 255.0;
        let b = b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        // rem_euclid can round up to exactly 6.0 for tiny negative inputs
        let h = if h >= 360.0 { h - 360.0 } else { h };

        let s = if max == 0.0 { 0.0 } else { delta / max };

        Self { h, s, v: max }
    }

    /// Convert an RGB byte array `[R, G, B]` to HSV.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }
}
