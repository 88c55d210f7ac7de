//! Averaged RGB color

use serde::Serialize;

/// Mean red/green/blue intensities over a pixel set, on the 0.0..=255.0 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeanColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl MeanColor {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Average a sequence of RGB pixels.
    ///
    /// Returns `None` for an empty sequence rather than a black mean.
    pub fn from_pixels<'a, I>(pixels: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a [u8; 3]>,
    {
        let (count, sums) = pixels
            .into_iter()
            .fold((0u64, [0u64; 3]), |(count, [r, g, b]), px| {
                (
                    count + 1,
                    [r + px[0] as u64, g + px[1] as u64, b + px[2] as u64],
                )
            });

        if count == 0 {
            return None;
        }

        let n = count as f64;
        Some(Self {
            r: (sums[0] as f64 / n) as f32,
            g: (sums[1] as f64 / n) as f32,
            b: (sums[2] as f64 / n) as f32,
        })
    }

    /// Red minus blue; positive for warm casts, negative for cool ones.
    #[inline]
    pub fn red_blue_delta(&self) -> f32 {
        self.r - self.b
    }
}
