//! # huewheel-color - Integer color conversion
//!
//! Converts a single color between three notations:
//!
//! - RGB: three channels in `0..=255` ([`Rgb`])
//! - Hex: `#rrggbb`, lowercase, with 3-digit shorthand and 8-digit alpha on input
//! - HSL: hue in `0..360`, saturation and lightness in `0..=100` ([`Hsl`])
//!
//! Every value crossing the public API is an integer. HSL math runs on
//! floating point internally and is rounded (RGB → HSL) or floored
//! (HSL → RGB) on the way out.
//!
//! ## Quick Start
//!
//! ```rust
//! use huewheel_color::{hex_to_rgb, parse_hsl, rgb_to_hex, Hsl, Rgb};
//!
//! assert_eq!(rgb_to_hex(255, 107, 53), "#ff6b35");
//! assert_eq!(hex_to_rgb("#fff").unwrap().rgb, Rgb(255, 255, 255));
//!
//! let hsl = parse_hsl("hsl(200, 50%, 60%)").unwrap();
//! assert_eq!(hsl, Hsl::new(200, 50, 60));
//! assert_eq!(hsl.to_string(), "hsl(200, 50%, 60%)");
//!
//! assert_eq!(Hsl::new(0, 100, 50).to_rgb(), Rgb(255, 0, 0));
//! ```
//!
//! ## Errors
//!
//! Parsing functions return [`FormatError`]. Conversions between numeric
//! forms cannot fail.

mod convert;
mod error;
mod model;
mod parse;

pub use convert::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
pub use error::{FormatError, Result};
pub use model::{Hsl, Rgb, Rgba};
pub use parse::{parse_color, parse_hsl, parse_rgb};
