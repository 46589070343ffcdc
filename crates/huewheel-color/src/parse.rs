//! Parsing of functional color notations.
//!
//! `hsl(...)` and `rgb(...)` are read leniently: every character that is not
//! a digit or a comma is dropped and the remainder is split on commas. This
//! accepts `hsl(200, 50%, 60%)`, `hsl(200,50,60)` and `hsla(200, 50%, 60%, 1)`
//! alike, at the price of ignoring signs and decimal points.

use crate::convert::hex_to_rgb;
use crate::error::{FormatError, Result};
use crate::model::{Hsl, Rgb};

/// Parses `hsl(h, s%, l%)` into an [`Hsl`].
///
/// The hue wraps modulo 360; saturation and lightness above 100 are errors.
pub fn parse_hsl(text: &str) -> Result<Hsl> {
    let [hue, saturation, lightness] = numeric_fields(text)?;
    let saturation = bounded(text, "saturation", saturation, 100)?;
    let lightness = bounded(text, "lightness", lightness, 100)?;
    Ok(Hsl::new(hue, saturation, lightness))
}

/// Parses `rgb(r, g, b)` into an [`Rgb`].
pub fn parse_rgb(text: &str) -> Result<Rgb> {
    let [r, g, b] = numeric_fields(text)?;
    Ok(Rgb(
        bounded(text, "red", r, 255)?,
        bounded(text, "green", g, 255)?,
        bounded(text, "blue", b, 255)?,
    ))
}

/// Parses any supported notation and normalizes it to HSL.
///
/// Accepts `#hex` (with or without `#`), `hsl(...)`/`hsla(...)` and
/// `rgb(...)`/`rgba(...)`. An alpha channel, if any, is dropped.
pub fn parse_color(text: &str) -> Result<Hsl> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FormatError::Empty);
    }

    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with('#') {
        return hex_to_rgb(trimmed).map(|rgba| rgba.rgb.to_hsl());
    }
    if lower.starts_with("hsl") {
        return parse_hsl(trimmed);
    }
    if lower.starts_with("rgb") {
        return parse_rgb(trimmed).map(Rgb::to_hsl);
    }
    if lower.bytes().all(|b| b.is_ascii_hexdigit()) {
        return hex_to_rgb(trimmed).map(|rgba| rgba.rgb.to_hsl());
    }

    Err(FormatError::Unrecognized {
        input: text.to_string(),
    })
}

impl std::str::FromStr for Hsl {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

impl std::str::FromStr for Rgb {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        if lower.starts_with("rgb") {
            parse_rgb(s)
        } else if lower.starts_with("hsl") {
            parse_hsl(s).map(Hsl::to_rgb)
        } else {
            hex_to_rgb(s).map(|rgba| rgba.rgb)
        }
    }
}

/// Extracts the first three comma-separated integers.
fn numeric_fields(text: &str) -> Result<[u32; 3]> {
    let stripped: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect();
    let fields: Vec<&str> = stripped.split(',').collect();

    if fields.len() < 3 {
        return Err(FormatError::MissingFields {
            input: text.to_string(),
            found: fields.iter().filter(|f| !f.is_empty()).count(),
        });
    }

    let mut values = [0u32; 3];
    for (i, field) in fields.iter().take(3).enumerate() {
        values[i] = field.parse().map_err(|_| FormatError::InvalidNumber {
            input: text.to_string(),
            field: i,
        })?;
    }
    Ok(values)
}

fn bounded(text: &str, component: &'static str, value: u32, max: u32) -> Result<u8> {
    if value > max {
        return Err(FormatError::OutOfRange {
            input: text.to_string(),
            component,
            value,
            max,
        });
    }
    Ok(value as u8)
}
