//! Color value types.
//!
//! [`Hsl`] is the canonical representation: palettes are built and stored as
//! HSL triples, and [`Rgb`] / hex strings are derived from it on demand.
//! [`Rgba`] only exists as the result of parsing an 8-digit hex string.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::convert;

/// An 8-bit RGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Returns the lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        convert::rgb_to_hex(self.0, self.1, self.2)
    }

    /// Returns the HSL form, rounded to whole degrees and percents.
    pub fn to_hsl(self) -> Hsl {
        convert::rgb_to_hsl(self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

/// An RGB color with an optional alpha byte.
///
/// Alpha is kept as the raw byte read from the hex string (0-255), not
/// normalized to a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub rgb: Rgb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<u8>,
}

impl Rgba {
    pub fn opaque(rgb: Rgb) -> Self {
        Self { rgb, alpha: None }
    }

    pub fn with_alpha(rgb: Rgb, alpha: u8) -> Self {
        Self {
            rgb,
            alpha: Some(alpha),
        }
    }

    /// Returns `#rrggbb`, or `#rrggbbaa` when an alpha byte is present.
    pub fn to_hex(self) -> String {
        match self.alpha {
            Some(a) => format!("{}{:02x}", self.rgb.to_hex(), a),
            None => self.rgb.to_hex(),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb(r, g, b) = self.rgb;
        match self.alpha {
            Some(a) => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
            None => write!(f, "rgb({}, {}, {})", r, g, b),
        }
    }
}

/// A color as integer hue, saturation and lightness.
///
/// Hue is always in `0..360`; saturation and lightness are percentages in
/// `0..=100`. The constructor enforces both, so every `Hsl` in circulation
/// is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawHsl")]
pub struct Hsl {
    hue: u16,
    saturation: u8,
    lightness: u8,
}

/// Unchecked wire form, normalized through [`Hsl::new`] on deserialize.
#[derive(Deserialize)]
struct RawHsl {
    hue: u32,
    saturation: u8,
    lightness: u8,
}

impl From<RawHsl> for Hsl {
    fn from(raw: RawHsl) -> Self {
        Hsl::new(raw.hue, raw.saturation, raw.lightness)
    }
}

impl Hsl {
    /// Creates a color, wrapping `hue` modulo 360 and capping saturation and
    /// lightness at 100.
    pub fn new(hue: u32, saturation: u8, lightness: u8) -> Self {
        Self {
            hue: (hue % 360) as u16,
            saturation: saturation.min(100),
            lightness: lightness.min(100),
        }
    }

    pub fn hue(self) -> u16 {
        self.hue
    }

    pub fn saturation(self) -> u8 {
        self.saturation
    }

    pub fn lightness(self) -> u8 {
        self.lightness
    }

    /// Returns the same color turned `degrees` around the color wheel.
    #[must_use]
    pub fn rotate(self, degrees: u16) -> Self {
        Hsl::new(
            u32::from(self.hue) + u32::from(degrees),
            self.saturation,
            self.lightness,
        )
    }

    /// Converts to RGB with floored channels.
    pub fn to_rgb(self) -> Rgb {
        convert::hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }

    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}
