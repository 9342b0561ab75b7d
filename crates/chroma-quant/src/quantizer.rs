//! Histogram-based color quantizer.
//!
//! This module provides the [`Quantizer`], which reduces the 3-channel
//! color space of a scanned image to a small set of representative
//! colors ranked by pixel frequency.

use crate::error::QuantError;
use crate::pixel::PixelSource;

/// Maximum value of a 16-bit color channel, as returned by
/// [`PixelSource::rgba16`].
pub const MAX_CHANNEL: u32 = 65535;

/// One non-empty histogram cell: a bin coordinate and its pixel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    r: u32,
    g: u32,
    b: u32,
    count: u64,
}

/// A representative color in the configured output space, together
/// with the number of opaque pixels that fell into its bin.
///
/// Channel values are in `[0, scale]` where `scale` is the value the
/// [`Quantizer`] was constructed with (typically 255).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCount {
    /// Red channel in the output space
    pub r: u32,
    /// Green channel in the output space
    pub g: u32,
    /// Blue channel in the output space
    pub b: u32,
    /// Number of opaque pixels whose color mapped to this bin
    pub count: u64,
}

/// Histogram-based color quantizer.
///
/// A `Quantizer` is built per image: construct it, [`scan`](Self::scan)
/// the image's pixels exactly once, then query
/// [`most_frequent`](Self::most_frequent) for the top colors.
///
/// # Quantization model
///
/// Each 16-bit channel is coarsened by discarding its low `shift` bits,
/// mapping `(r, g, b)` to a bin coordinate. Fully transparent pixels
/// (alpha 0) are skipped. The scan accumulates counts in a dense
/// `bins x bins x bins` array, then flattens the non-empty cells into a
/// sparse entry list. Peak memory is therefore bounded by `bins³`, not
/// by image size, and the dense array is released as soon as the scan
/// returns.
///
/// When a bin is converted back to a color, the bin's midpoint in the
/// original 16-bit space is reconstructed (`(index << shift) + mean`)
/// and linearly rescaled into `[0, scale]` with round-half-away-from-
/// zero rounding (`f64::round`).
///
/// # Ranking
///
/// `most_frequent` is a pure query: it sorts a snapshot of the entry
/// list by count descending, breaking ties by bin coordinate `(r, g,
/// b)` ascending, and never reorders the stored histogram. Repeated
/// calls return identical results.
///
/// # Example
///
/// ```
/// use chroma_quant::{Quantizer, RawPixels};
///
/// let image = RawPixels::new(1, 2, vec![
///     (65535, 0, 0, 65535),
///     (65535, 0, 0, 65535),
/// ]);
///
/// let mut quantizer = Quantizer::new(13, 255.0).unwrap();
/// quantizer.scan(&image).unwrap();
///
/// let top = quantizer.most_frequent(1);
/// assert_eq!(top[0].count, 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Quantizer {
    shift: u32,
    scale: f64,
    bins: u32,
    mean: u32,
    histogram: Vec<Entry>,
    scanned: bool,
}

impl Quantizer {
    /// Create a quantizer with the given bit shift and output scale.
    ///
    /// `shift` is the number of low bits discarded per channel and must
    /// be in `[1, 16]`; shifting 65535 by e.g. 13 reduces the channel
    /// to the range `[0, 7]`. A non-positive `scale` is clamped to 1.
    ///
    /// # Errors
    ///
    /// Returns [`QuantError::InvalidShift`] if `shift` is outside
    /// `[1, 16]`.
    pub fn new(shift: u32, scale: f64) -> Result<Self, QuantError> {
        if !(1..=16).contains(&shift) {
            return Err(QuantError::InvalidShift { shift });
        }
        let scale = if scale <= 0.0 { 1.0 } else { scale };

        Ok(Self {
            shift,
            scale,
            bins: (MAX_CHANNEL >> shift) + 1,
            // Half a bin width, added back when reconstructing a
            // representative channel value from a bin index.
            mean: (1 << (shift - 1)) / 2,
            histogram: Vec::new(),
            scanned: false,
        })
    }

    /// Number of bins per channel: `(65535 >> shift) + 1`.
    pub fn bins(&self) -> u32 {
        self.bins
    }

    /// Reconstruction offset added back during rescaling.
    pub fn mean(&self) -> u32 {
        self.mean
    }

    /// Whether [`scan`](Self::scan) has run.
    pub fn is_scanned(&self) -> bool {
        self.scanned
    }

    /// Number of non-empty bins found by the scan.
    pub fn entry_count(&self) -> usize {
        self.histogram.len()
    }

    /// Sum of all histogram counts: the number of opaque pixels in the
    /// scanned image.
    pub fn total_count(&self) -> u64 {
        self.histogram.iter().map(|e| e.count).sum()
    }

    /// Scan every pixel of the image once and build the histogram.
    ///
    /// Pixels with alpha 0 never contribute. The scan runs in row-major
    /// order, though order does not affect the result.
    ///
    /// # Errors
    ///
    /// Returns [`QuantError::AlreadyScanned`] if this quantizer has
    /// already scanned an image; counts would double otherwise.
    pub fn scan<P: PixelSource>(&mut self, image: &P) -> Result<(), QuantError> {
        if self.scanned {
            return Err(QuantError::AlreadyScanned);
        }

        let bins = self.bins as usize;
        let mut dense = vec![0u64; bins * bins * bins];

        for y in 0..image.height() {
            for x in 0..image.width() {
                let (r, g, b, a) = image.rgba16(x, y);
                if a > 0 {
                    let r = (r as usize) >> self.shift;
                    let g = (g as usize) >> self.shift;
                    let b = (b as usize) >> self.shift;
                    dense[(r * bins + g) * bins + b] += 1;
                }
            }
        }

        // Flatten into a sparse list holding only the bins that were
        // actually hit. The dense array drops here, so peak memory is
        // a transient of the scan, not of the quantizer's lifetime.
        for r in 0..bins {
            for g in 0..bins {
                for b in 0..bins {
                    let count = dense[(r * bins + g) * bins + b];
                    if count > 0 {
                        self.histogram.push(Entry {
                            r: r as u32,
                            g: g as u32,
                            b: b as u32,
                            count,
                        });
                    }
                }
            }
        }

        self.scanned = true;
        Ok(())
    }

    /// The up-to-`n` most frequent colors, in descending count order.
    ///
    /// A result length of `n` is not guaranteed: the histogram can hold
    /// fewer non-empty bins. `n == 0` is treated as 1. Ties on equal
    /// counts are broken by bin coordinate `(r, g, b)` ascending, so
    /// the ordering is deterministic.
    ///
    /// Called before [`scan`](Self::scan), this returns an empty list.
    pub fn most_frequent(&self, n: usize) -> Vec<ColorCount> {
        let n = n.max(1).min(self.histogram.len());

        let mut ranked = self.histogram.clone();
        ranked.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| (a.r, a.g, a.b).cmp(&(b.r, b.g, b.b)))
        });
        ranked.truncate(n);

        ranked.iter().map(|e| self.apply_scale(e)).collect()
    }

    /// Map a bin entry back to a representative output color.
    ///
    /// Reconstructs the bin midpoint in 16-bit channel space, then
    /// rescales linearly into `[0, scale]`. Rounding is half-away-from-
    /// zero (`f64::round`). The count carries through unchanged.
    fn apply_scale(&self, e: &Entry) -> ColorCount {
        ColorCount {
            r: self.rescale(e.r),
            g: self.rescale(e.g),
            b: self.rescale(e.b),
            count: e.count,
        }
    }

    fn rescale(&self, c: u32) -> u32 {
        let midpoint = ((c << self.shift) + self.mean) as f64;
        (midpoint / MAX_CHANNEL as f64 * self.scale).round() as u32
    }
}
