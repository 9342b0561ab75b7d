//! Pixel source abstraction.
//!
//! The quantizer reads pixels through [`PixelSource`] rather than any
//! concrete image type, so the crate carries no codec dependency. The
//! surrounding application wraps whatever decoder it uses (PNG, JPEG,
//! a raw buffer) in an adapter implementing this trait.

/// A decoded raster image the quantizer can scan.
///
/// Channel values are 16-bit, in `[0, 65535]`, matching the widest
/// channel depth the quantizer bins over. Adapters for 8-bit sources
/// should widen each channel with `c * 257` so that 0 maps to 0 and
/// 255 maps to 65535.
///
/// Alpha is never binned; it only decides whether a pixel contributes
/// to the histogram at all (fully transparent pixels are skipped).
pub trait PixelSource {
    /// Image width in pixels.
    fn width(&self) -> u32;

    /// Image height in pixels.
    fn height(&self) -> u32;

    /// The (r, g, b, a) channel values at the given coordinate.
    ///
    /// Coordinates are in `[0, width)` x `[0, height)`; the scan never
    /// asks for anything outside that range.
    fn rgba16(&self, x: u32, y: u32) -> (u16, u16, u16, u16);
}

/// An owned 16-bit RGBA buffer, row-major.
///
/// The simplest possible [`PixelSource`]; used by tests and by callers
/// that already hold raw pixel data.
#[derive(Debug, Clone)]
pub struct RawPixels {
    width: u32,
    height: u32,
    pixels: Vec<(u16, u16, u16, u16)>,
}

impl RawPixels {
    /// Create a pixel buffer from row-major (r, g, b, a) tuples.
    ///
    /// `pixels.len()` must equal `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<(u16, u16, u16, u16)>) -> Self {
        assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize),
            "pixel buffer length must match width * height"
        );
        Self {
            width,
            height,
            pixels,
        }
    }
}

impl PixelSource for RawPixels {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn rgba16(&self, x: u32, y: u32) -> (u16, u16, u16, u16) {
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_pixels_row_major_order() {
        let buf = RawPixels::new(
            2,
            2,
            vec![
                (1, 0, 0, 65535),
                (2, 0, 0, 65535),
                (3, 0, 0, 65535),
                (4, 0, 0, 65535),
            ],
        );
        assert_eq!(buf.rgba16(0, 0).0, 1);
        assert_eq!(buf.rgba16(1, 0).0, 2);
        assert_eq!(buf.rgba16(0, 1).0, 3);
        assert_eq!(buf.rgba16(1, 1).0, 4);
    }

    #[test]
    #[should_panic(expected = "pixel buffer length")]
    fn test_raw_pixels_rejects_bad_length() {
        RawPixels::new(2, 2, vec![(0, 0, 0, 0)]);
    }
}
