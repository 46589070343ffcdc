//! Conversions between RGB, hex and HSL.
//!
//! All public inputs and outputs are integers. HSL computations go through
//! `f64` intermediates and are brought back to integers at the boundary:
//! [`rgb_to_hsl`] rounds to the nearest degree/percent, [`hsl_to_rgb`] floors
//! each channel. A round trip through both can therefore drift by one unit
//! per component.

use crate::error::{FormatError, Result};
use crate::model::{Hsl, Rgb, Rgba};

/// Formats three channels as `#rrggbb`, lowercase and zero-padded.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Parses a hex color, with or without a leading `#`.
///
/// - 3 digits: shorthand, each digit doubled (`f` → `ff`).
/// - 8 digits: `rrggbbaa`, the last byte returned as alpha.
/// - any other length: read as one number and split as `0xrrggbb`, so `"ff"`
///   is `rgb(0, 0, 255)`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgba> {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(FormatError::Empty);
    }
    let invalid = || FormatError::InvalidHex {
        input: hex.to_string(),
    };
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    match digits.len() {
        3 => {
            let mut channels = [0u8; 3];
            for (slot, digit) in channels.iter_mut().zip(digits.chars()) {
                // is_ascii_hexdigit above guarantees a value
                let nibble = digit.to_digit(16).ok_or_else(invalid)? as u8;
                *slot = nibble * 17;
            }
            Ok(Rgba::opaque(Rgb(channels[0], channels[1], channels[2])))
        }
        8 => {
            let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
            let [r, g, b, a] = value.to_be_bytes();
            Ok(Rgba::with_alpha(Rgb(r, g, b), a))
        }
        _ => {
            let value = u64::from_str_radix(digits, 16).map_err(|_| invalid())?;
            Ok(Rgba::opaque(Rgb(
                ((value >> 16) & 0xff) as u8,
                ((value >> 8) & 0xff) as u8,
                (value & 0xff) as u8,
            )))
        }
    }
}

/// Converts RGB channels to HSL.
///
/// Gray colors (all channels equal) have no defined hue and report hue 0.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let red = f64::from(r) / 255.0;
    let green = f64::from(g) / 255.0;
    let blue = f64::from(b) / 255.0;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let delta = max - min;
    let lightness = (max + min) / 2.0;

    if delta == 0.0 {
        return Hsl::new(0, 0, percent(lightness));
    }

    let saturation = if lightness <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let sector = if max == red {
        ((green - blue) / delta).rem_euclid(6.0)
    } else if max == green {
        (blue - red) / delta + 2.0
    } else {
        (red - green) / delta + 4.0
    };
    // 359.6 rounds to 360, which Hsl::new wraps back to 0
    let hue = (sector * 60.0).round() as u32;

    Hsl::new(hue, percent(saturation), percent(lightness))
}

/// Converts HSL to RGB using the chroma / hue-sector method.
///
/// Each channel is floored, not rounded.
pub fn hsl_to_rgb(hue: u16, saturation: u8, lightness: u8) -> Rgb {
    let h = f64::from(hue % 360);
    let s = f64::from(saturation.min(100)) / 100.0;
    let l = f64::from(lightness.min(100)) / 100.0;

    let a = s * l.min(1.0 - l);
    let channel = |n: f64| -> u8 {
        let k = (n + h / 30.0) % 12.0;
        let f = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (255.0 * f).floor().clamp(0.0, 255.0) as u8
    };

    Rgb(channel(0.0), channel(8.0), channel(4.0))
}

fn percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // rgb_to_hex
    // =========================================================================

    #[test]
    fn test_rgb_to_hex_zero_pads() {
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(1, 10, 15), "#010a0f");
    }

    #[test]
    fn test_rgb_to_hex_lowercase() {
        assert_eq!(rgb_to_hex(255, 171, 205), "#ffabcd");
    }

    // =========================================================================
    // hex_to_rgb
    // =========================================================================

    #[test]
    fn test_hex_to_rgb_six_digit() {
        assert_eq!(hex_to_rgb("#ff6b35").unwrap(), Rgba::opaque(Rgb(255, 107, 53)));
        assert_eq!(hex_to_rgb("FF6B35").unwrap(), Rgba::opaque(Rgb(255, 107, 53)));
    }

    #[test]
    fn test_hex_to_rgb_shorthand() {
        assert_eq!(hex_to_rgb("#fff").unwrap().rgb, Rgb(255, 255, 255));
        assert_eq!(hex_to_rgb("fff").unwrap().rgb, Rgb(255, 255, 255));
        assert_eq!(hex_to_rgb("#f80").unwrap().rgb, Rgb(255, 136, 0));
    }

    #[test]
    fn test_hex_to_rgb_alpha() {
        let parsed = hex_to_rgb("#11223380").unwrap();
        assert_eq!(parsed.rgb, Rgb(0x11, 0x22, 0x33));
        assert_eq!(parsed.alpha, Some(128));
    }

    #[test]
    fn test_hex_to_rgb_other_lengths_read_as_number() {
        assert_eq!(hex_to_rgb("ff").unwrap().rgb, Rgb(0, 0, 255));
        assert_eq!(hex_to_rgb("#1234").unwrap().rgb, Rgb(0, 0x12, 0x34));
    }

    #[test]
    fn test_hex_to_rgb_rejects_non_hex() {
        assert!(matches!(
            hex_to_rgb("#ggg"),
            Err(FormatError::InvalidHex { .. })
        ));
        assert!(matches!(
            hex_to_rgb("12 34 56"),
            Err(FormatError::InvalidHex { .. })
        ));
    }

    #[test]
    fn test_hex_to_rgb_rejects_empty() {
        assert_eq!(hex_to_rgb("#"), Err(FormatError::Empty));
        assert_eq!(hex_to_rgb(""), Err(FormatError::Empty));
    }

    #[test]
    fn test_hex_to_rgb_rejects_overlong() {
        assert!(hex_to_rgb("#00112233445566778899").is_err());
    }

    // =========================================================================
    // rgb_to_hsl
    // =========================================================================

    #[test]
    fn test_rgb_to_hsl_primaries() {
        assert_eq!(rgb_to_hsl(255, 0, 0), Hsl::new(0, 100, 50));
        assert_eq!(rgb_to_hsl(0, 255, 0), Hsl::new(120, 100, 50));
        assert_eq!(rgb_to_hsl(0, 0, 255), Hsl::new(240, 100, 50));
    }

    #[test]
    fn test_rgb_to_hsl_red_sector_wraps_negative() {
        // magenta: red is max, green < blue
        assert_eq!(rgb_to_hsl(255, 0, 255), Hsl::new(300, 100, 50));
    }

    #[test]
    fn test_rgb_to_hsl_orange() {
        assert_eq!(rgb_to_hsl(255, 128, 0), Hsl::new(30, 100, 50));
    }

    #[test]
    fn test_rgb_to_hsl_grays_have_zero_hue() {
        assert_eq!(rgb_to_hsl(0, 0, 0), Hsl::new(0, 0, 0));
        assert_eq!(rgb_to_hsl(255, 255, 255), Hsl::new(0, 0, 100));
        assert_eq!(rgb_to_hsl(128, 128, 128), Hsl::new(0, 0, 50));
    }

    // =========================================================================
    // hsl_to_rgb
    // =========================================================================

    #[test]
    fn test_hsl_to_rgb_primaries() {
        assert_eq!(hsl_to_rgb(0, 100, 50), Rgb(255, 0, 0));
        assert_eq!(hsl_to_rgb(120, 100, 50), Rgb(0, 255, 0));
        assert_eq!(hsl_to_rgb(240, 100, 50), Rgb(0, 0, 255));
        assert_eq!(hsl_to_rgb(60, 100, 50), Rgb(255, 255, 0));
    }

    #[test]
    fn test_hsl_to_rgb_floors() {
        // 255 * 0.5 = 127.5
        assert_eq!(hsl_to_rgb(0, 100, 25), Rgb(127, 0, 0));
    }

    #[test]
    fn test_hsl_to_rgb_extremes() {
        assert_eq!(hsl_to_rgb(200, 0, 0), Rgb(0, 0, 0));
        assert_eq!(hsl_to_rgb(200, 0, 100), Rgb(255, 255, 255));
        assert_eq!(hsl_to_rgb(17, 80, 100), Rgb(255, 255, 255));
    }
}
