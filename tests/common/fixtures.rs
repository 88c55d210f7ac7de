//! Test fixtures: synthetic photos encoded in memory.

use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Typical warm skin tone (hue ~23°, saturation ~0.38)
pub const WARM_SKIN: [u8; 3] = [224, 172, 140];

/// Pinkish skin with blue above red (hue ~286°, saturation ~0.30)
pub const COOL_SKIN: [u8; 3] = [200, 150, 215];

/// Balanced skin with red and blue within 5 levels (hue ~310°)
pub const NEUTRAL_SKIN: [u8; 3] = [200, 170, 195];

/// Navy backdrop, never skin under the default thresholds
pub const BACKGROUND: [u8; 3] = [20, 30, 90];

/// Encode an image as PNG
pub fn png(image: &RgbImage) -> Vec<u8> {
    encode(image, ImageFormat::Png)
}

/// Encode an image as JPEG
pub fn jpeg(image: &RgbImage) -> Vec<u8> {
    encode(image, ImageFormat::Jpeg)
}

fn encode(image: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, format)
        .expect("Failed to encode fixture image");
    buf.into_inner()
}

/// 64x64 image with a 32x32 face patch of `skin` on the navy backdrop
pub fn face_on_background(skin: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(64, 64, |x, y| {
        if (16..48).contains(&x) && (16..48).contains(&y) {
            Rgb(skin)
        } else {
            Rgb(BACKGROUND)
        }
    })
}

/// PNG of a warm face patch
pub fn warm_face_png() -> Vec<u8> {
    png(&face_on_background(WARM_SKIN))
}

/// Solid-color PNG
pub fn solid_png(color: [u8; 3]) -> Vec<u8> {
    png(&RgbImage::from_pixel(64, 64, Rgb(color)))
}

/// Bytes that are not an image
pub fn corrupt_bytes() -> Vec<u8> {
    b"this is definitely not a photograph".to_vec()
}
