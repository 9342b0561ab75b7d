//! Image fixtures for integration tests.

use image::{Rgba, RgbaImage};
use std::io::Cursor;

/// Encode an RGBA buffer as PNG bytes.
pub fn png_bytes(img: &RgbaImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .expect("Failed to encode fixture PNG");
    buf.into_inner()
}

/// 2x2 PNG: two red pixels, one green, one black, all opaque.
///
/// With the default shift 13 / scale 255 configuration the expected
/// ranking is red (50%), then black and green (25% each, tie broken
/// by bin coordinate).
pub fn two_by_two_png() -> Vec<u8> {
    let mut img = RgbaImage::new(2, 2);
    img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
    img.put_pixel(1, 0, Rgba([255, 0, 0, 255]));
    img.put_pixel(0, 1, Rgba([0, 255, 0, 255]));
    img.put_pixel(1, 1, Rgba([0, 0, 0, 255]));
    png_bytes(&img)
}

/// Single opaque pixel.
pub fn single_pixel_png() -> Vec<u8> {
    let img = RgbaImage::from_pixel(1, 1, Rgba([10, 200, 30, 255]));
    png_bytes(&img)
}

/// 4x4 PNG where every pixel is fully transparent.
pub fn transparent_png() -> Vec<u8> {
    let img = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 0]));
    png_bytes(&img)
}

/// Bytes that no image decoder will accept.
pub fn not_an_image() -> Vec<u8> {
    b"definitely not an image".to_vec()
}
