//! chroma-quant: sparse histogram color quantization
//!
//! This library reduces the per-pixel 3-channel color space of a
//! decoded raster image to a small set of representative colors ranked
//! by frequency. It is the engine behind a "what are the dominant
//! colors of this image" query.
//!
//! # Quick Start
//!
//! ```
//! use chroma_quant::{Quantizer, RawPixels};
//!
//! // A 2x1 image: one red pixel, one green pixel, both opaque.
//! let image = RawPixels::new(2, 1, vec![
//!     (65535, 0, 0, 65535),
//!     (0, 65535, 0, 65535),
//! ]);
//!
//! let mut quantizer = Quantizer::new(13, 255.0).unwrap();
//! quantizer.scan(&image).unwrap();
//!
//! for color in quantizer.most_frequent(5) {
//!     println!("({}, {}, {}) x{}", color.r, color.g, color.b, color.count);
//! }
//! ```
//!
//! # How it works
//!
//! Each 16-bit channel value is coarsened by discarding its low
//! `shift` bits, so `(r, g, b)` maps to a bin coordinate in a cube of
//! `bins = (65535 >> shift) + 1` cells per side. The scan counts every
//! opaque pixel into a dense `bins³` array, then compacts the non-empty
//! cells into a sparse entry list. The dense array is a transient of
//! the scan: peak memory is bounded by the bin count, never by image
//! resolution, and per-pixel work allocates nothing.
//!
//! Ranking sorts a snapshot of the sparse list by count (ties broken by
//! bin coordinate, so results are deterministic) and maps each bin back
//! to its midpoint in 16-bit space, rescaled into the configured output
//! range (typically `[0, 255]`).
//!
//! # Input abstraction
//!
//! Pixels are read through the [`PixelSource`] trait, so the crate has
//! no opinion about image codecs. [`RawPixels`] is provided for raw
//! buffers; applications wrap their decoder's type in an adapter.

pub mod error;
pub mod pixel;
pub mod quantizer;


pub use error::QuantError;
pub use pixel::{PixelSource, RawPixels};
pub use quantizer::{ColorCount, Quantizer, MAX_CHANNEL};
