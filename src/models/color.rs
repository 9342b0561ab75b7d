use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An output color in 8-bit display space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Rgb {
    /// Red channel, 0-255
    pub r: u32,
    /// Green channel, 0-255
    pub g: u32,
    /// Blue channel, 0-255
    pub b: u32,
}

/// One dominant color and the share of the image it covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ColorResult {
    /// The representative color
    pub rgb: Rgb,
    /// Percentage of the image's total pixel count in this color's bin
    pub ratio: f64,
}
