//! Image analysis orchestration.
//!
//! Glue between the decoder and the quantizer core: decode the upload,
//! scan it through a fresh [`Quantizer`], rank the requested number of
//! colors, then convert raw counts to percentages of the full pixel
//! count and drop anything under the configured minimum ratio.

use std::time::Instant;

use chroma_quant::{PixelSource, QuantError, Quantizer};
use image::DynamicImage;
use thiserror::Error;

use crate::models::config::QuantizerConfig;
use crate::models::{ColorResult, Rgb};

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Cannot decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Quantizer error: {0}")]
    Quant(#[from] QuantError),
}

/// Per-request analysis settings, seeded from [`QuantizerConfig`].
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeOptions {
    pub shift: u32,
    pub scale: f64,
    pub max_results: usize,
    pub min_ratio: f64,
}

impl AnalyzeOptions {
    /// Build options from config, with the caller's requested result
    /// count clamped to `[1, config.max_results]`.
    pub fn from_config(config: &QuantizerConfig, requested: i64) -> Self {
        let max_results = requested.max(1).min(config.max_results as i64) as usize;
        Self {
            shift: config.shift,
            scale: config.scale,
            max_results,
            min_ratio: config.min_ratio,
        }
    }

    /// Override the minimum ratio threshold.
    pub fn min_ratio(mut self, min_ratio: f64) -> Self {
        self.min_ratio = min_ratio;
        self
    }
}

/// Adapter exposing a decoded raster to the quantizer.
///
/// The image crate widens 8-bit channels to 16 bits with `c * 257`
/// when converting to RGBA16, which is exactly the channel model the
/// quantizer bins over.
struct RasterPixels(image::ImageBuffer<image::Rgba<u16>, Vec<u16>>);

impl PixelSource for RasterPixels {
    fn width(&self) -> u32 {
        self.0.width()
    }

    fn height(&self) -> u32 {
        self.0.height()
    }

    fn rgba16(&self, x: u32, y: u32) -> (u16, u16, u16, u16) {
        let p = self.0.get_pixel(x, y).0;
        (p[0], p[1], p[2], p[3])
    }
}

/// Decode raw upload bytes and extract dominant colors.
pub fn analyze_bytes(bytes: &[u8], opts: AnalyzeOptions) -> Result<Vec<ColorResult>, AnalyzeError> {
    let img = image::load_from_memory(bytes)?;
    analyze_image(&img, opts)
}

/// Extract dominant colors from a decoded image.
///
/// Ratios are computed against the image's full pixel count, not just
/// the opaque subset, so a mostly transparent image reports small
/// ratios for whatever colors it does have.
pub fn analyze_image(
    img: &DynamicImage,
    opts: AnalyzeOptions,
) -> Result<Vec<ColorResult>, AnalyzeError> {
    let raster = RasterPixels(img.to_rgba16());
    let total = (raster.width() as u64) * (raster.height() as u64);

    let start = Instant::now();

    let mut quantizer = Quantizer::new(opts.shift, opts.scale)?;
    quantizer.scan(&raster)?;
    let ranked = quantizer.most_frequent(opts.max_results);

    tracing::debug!(
        duration_ms = start.elapsed().as_millis() as u64,
        pixels = total,
        bins_hit = quantizer.entry_count(),
        "Quantization finished"
    );

    let mut results = Vec::new();
    for color in ranked {
        let ratio = (color.count as f64 / total as f64) * 100.0;
        if ratio < opts.min_ratio {
            continue;
        }
        results.push(ColorResult {
            rgb: Rgb {
                r: color.r,
                g: color.g,
                b: color.b,
            },
            ratio,
        });
    }
    Ok(results)
}
