//! Error types for quantizer configuration and lifecycle.

use std::fmt;

/// Error type for quantizer construction and scanning.
///
/// Returned when the quantizer is configured with an out-of-range bit
/// shift, or when a scan is attempted on an instance that already
/// holds a histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantError {
    /// Bit shift outside the supported range [1, 16].
    ///
    /// A shift of 0 would put every distinct 16-bit color in its own
    /// bin; a shift above 16 would collapse the channel to nothing.
    InvalidShift {
        /// The rejected shift value
        shift: u32,
    },
    /// The quantizer has already scanned an image.
    ///
    /// Scanning appends to the existing histogram without resetting it,
    /// so a second scan would double every count. Construct a fresh
    /// quantizer per image instead.
    AlreadyScanned,
}

impl fmt::Display for QuantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantError::InvalidShift { shift } => {
                write!(f, "invalid bit shift {} (expected 1..=16)", shift)
            }
            QuantError::AlreadyScanned => {
                write!(f, "quantizer has already scanned an image")
            }
        }
    }
}

impl std::error::Error for QuantError {}
