//! Display strings for a single color.

use huewheel_color::{Hsl, Rgb};
use serde::{Deserialize, Serialize};

/// The three textual forms shown on a swatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorDescription {
    /// `rgb(r, g, b)`
    pub rgb: String,
    /// `#rrggbb`
    pub hex: String,
    /// `hsl(h, s%, l%)`
    pub hsl: String,
}

/// Describes `color` in RGB, hex and HSL notation.
///
/// RGB and hex are derived from the same floored conversion, so they always
/// agree with each other.
pub fn describe(color: Hsl) -> ColorDescription {
    let rgb = color.to_rgb();
    ColorDescription {
        rgb: rgb.to_string(),
        hex: rgb.to_hex(),
        hsl: color.to_string(),
    }
}

/// Describes a color given as RGB.
///
/// The rgb and hex strings are exact; only the hsl string is rounded.
pub fn describe_rgb(rgb: Rgb) -> ColorDescription {
    ColorDescription {
        rgb: rgb.to_string(),
        hex: rgb.to_hex(),
        hsl: rgb.to_hsl().to_string(),
    }
}
