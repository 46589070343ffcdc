//! Palette generation strategies.
//!
//! A [`Strategy`] names how the colors of a [`Palette`] relate to each other:
//!
//! | Strategy | Colors | Construction |
//! |----------|--------|--------------|
//! | `random` | 5 | independent random colors |
//! | `shades` | 5 | one random RGB base scaled down in equal steps |
//! | `complementary` | 2 | base, +180° |
//! | `split` | 3 | base, +150°, +210° |
//! | `triadic` | 3 | base, +120°, +240° |
//! | `tetradic` | 4 | base, +90°, +180°, +270° |
//! | `analogous` | 5 | base, +40°, +80°, +120°, +160° |
//!
//! The last five share one rule, see [`Rotation`]. Their base color is drawn
//! at random unless the caller supplies a [`Seed`].
//!
//! Palettes are values: every call to [`PaletteGenerator::generate`] returns a
//! fresh one and nothing is kept between calls.

use std::fmt;
use std::str::FromStr;

use huewheel_color::{FormatError, Hsl, Rgb};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::PaletteConfig;
use crate::error::UnknownName;
use crate::random::{RandomSource, RngSource};

// ─── Strategy ───────────────────────────────────────────────────────────────

/// A named palette construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Random,
    Shades,
    Complementary,
    Split,
    Triadic,
    Tetradic,
    Analogous,
}

/// Hue offsets `start, start + interval, ..., end` added to a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    pub start: u16,
    pub end: u16,
    pub interval: u16,
}

impl Rotation {
    pub const fn new(start: u16, end: u16, interval: u16) -> Self {
        Self {
            start,
            end,
            interval,
        }
    }

    /// The offsets in order, `end` included when reachable.
    pub fn offsets(&self) -> impl Iterator<Item = u16> {
        (self.start..=self.end).step_by(usize::from(self.interval.max(1)))
    }

    /// Returns `base` followed by one rotated copy per offset.
    pub fn apply(&self, base: Hsl) -> Vec<Hsl> {
        std::iter::once(base)
            .chain(self.offsets().map(|offset| base.rotate(offset)))
            .collect()
    }
}

impl Strategy {
    /// Every strategy, in menu order.
    pub const ALL: [Strategy; 7] = [
        Strategy::Random,
        Strategy::Shades,
        Strategy::Complementary,
        Strategy::Split,
        Strategy::Triadic,
        Strategy::Tetradic,
        Strategy::Analogous,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Shades => "shades",
            Strategy::Complementary => "complementary",
            Strategy::Split => "split",
            Strategy::Triadic => "triadic",
            Strategy::Tetradic => "tetradic",
            Strategy::Analogous => "analogous",
        }
    }

    /// The hue rotation for color-wheel schemes; `None` for `random` and `shades`.
    pub fn rotation(self) -> Option<Rotation> {
        match self {
            Strategy::Random | Strategy::Shades => None,
            Strategy::Complementary => Some(Rotation::new(180, 180, 1)),
            Strategy::Split => Some(Rotation::new(150, 210, 60)),
            Strategy::Triadic => Some(Rotation::new(120, 240, 120)),
            Strategy::Tetradic => Some(Rotation::new(90, 270, 90)),
            Strategy::Analogous => Some(Rotation::new(40, 160, 40)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if name == "spawn" {
            return Ok(Strategy::Random);
        }
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == name)
            .ok_or_else(|| UnknownName {
                kind: "strategy",
                name: s.to_string(),
                expected: Strategy::ALL.map(Strategy::name).join(", "),
            })
    }
}

// ─── Palette ────────────────────────────────────────────────────────────────

/// An ordered set of colors produced by one strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    strategy: Strategy,
    colors: Vec<Hsl>,
}

impl Palette {
    pub fn new(strategy: Strategy, colors: Vec<Hsl>) -> Self {
        Self { strategy, colors }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn colors(&self) -> &[Hsl] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hsl> {
        self.colors.iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Hsl;
    type IntoIter = std::slice::Iter<'a, Hsl>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

// ─── Options ────────────────────────────────────────────────────────────────

/// An externally supplied base color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    /// An already-parsed color.
    Color(Hsl),
    /// Text in any notation `huewheel-color` reads: `#hex`, `hsl(...)`, `rgb(...)`.
    Text(String),
}

impl Seed {
    /// The seed as HSL, for hue-rotation schemes.
    pub fn to_hsl(&self) -> Result<Hsl, FormatError> {
        match self {
            Seed::Color(hsl) => Ok(*hsl),
            Seed::Text(text) => text.parse(),
        }
    }

    /// The seed as RGB, for shades. Hex and `rgb(...)` text is read directly
    /// so it does not pick up HSL rounding.
    pub fn to_rgb(&self) -> Result<Rgb, FormatError> {
        match self {
            Seed::Color(hsl) => Ok(hsl.to_rgb()),
            Seed::Text(text) => text.parse(),
        }
    }
}

impl From<Hsl> for Seed {
    fn from(hsl: Hsl) -> Self {
        Seed::Color(hsl)
    }
}

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Seed::Text(text.to_string())
    }
}

/// Per-call generation options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Base color for rotation schemes and shades. Ignored by `random`.
    pub seed: Option<Seed>,
}

impl GenerateOptions {
    pub fn seeded(seed: impl Into<Seed>) -> Self {
        Self {
            seed: Some(seed.into()),
        }
    }
}

// ─── Generator ──────────────────────────────────────────────────────────────

/// Builds palettes from a random source and a [`PaletteConfig`].
#[derive(Debug, Clone)]
pub struct PaletteGenerator<R> {
    rng: R,
    config: PaletteConfig,
}

impl<R: RandomSource> PaletteGenerator<R> {
    /// A generator with the default configuration.
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, PaletteConfig::default())
    }

    pub fn with_config(rng: R, config: PaletteConfig) -> Self {
        Self { rng, config }
    }

    /// Produces a palette for `strategy`.
    ///
    /// Only a malformed [`Seed`] can fail; the random draws always yield
    /// valid colors.
    pub fn generate(
        &mut self,
        strategy: Strategy,
        options: &GenerateOptions,
    ) -> Result<Palette, FormatError> {
        debug!(%strategy, seeded = options.seed.is_some(), "generating palette");

        let colors = match strategy {
            Strategy::Random => (0..5).map(|_| self.random_hsl()).collect(),
            Strategy::Shades => {
                let base = match &options.seed {
                    Some(seed) => seed.to_rgb()?,
                    None => self.random_rgb(),
                };
                debug!(base = %base, "shade base");
                shades(base, self.config.shades.count)
            }
            rotating => {
                let base = match &options.seed {
                    Some(seed) => seed.to_hsl()?,
                    None => self.random_hsl(),
                };
                debug!(base = %base, "rotation base");
                // every strategy other than random and shades has a rotation
                match rotating.rotation() {
                    Some(rotation) => rotation.apply(base),
                    None => vec![base],
                }
            }
        };

        for color in &colors {
            trace!(color = %color, "palette entry");
        }
        Ok(Palette::new(strategy, colors))
    }

    /// One color with each component drawn from its configured range.
    pub fn random_hsl(&mut self) -> Hsl {
        let ranges = &self.config.random;
        let hue = self.rng.int_in(ranges.hue.min, ranges.hue.max);
        let saturation = self
            .rng
            .int_in(ranges.saturation.min, ranges.saturation.max);
        let lightness = self.rng.int_in(ranges.lightness.min, ranges.lightness.max);
        // validated ranges keep saturation and lightness within 0..=100
        Hsl::new(hue, saturation.min(100) as u8, lightness.min(100) as u8)
    }

    /// One color with every channel drawn from `0..=255`.
    pub fn random_rgb(&mut self) -> Rgb {
        let r = self.rng.int_in(0, 255) as u8;
        let g = self.rng.int_in(0, 255) as u8;
        let b = self.rng.int_in(0, 255) as u8;
        Rgb(r, g, b)
    }
}

impl PaletteGenerator<RngSource<rand::rngs::ThreadRng>> {
    /// A generator on the thread-local RNG with the default configuration.
    pub fn thread() -> Self {
        Self::new(RngSource::thread())
    }
}

/// Scales `base` down in `count` equal steps, brightest first.
///
/// Step `i` (1-based) has every channel at `round(i * channel / count)`; the
/// result runs from `i = count` (the base itself) down to `i = 1`.
pub fn shades(base: Rgb, count: u8) -> Vec<Hsl> {
    let count = u32::from(count.max(1));
    let scale = |channel: u8, step: u32| -> u8 {
        // round half up on an exact integer ratio
        ((2 * step * u32::from(channel) + count) / (2 * count)) as u8
    };

    (1..=count)
        .rev()
        .map(|step| {
            Rgb(
                scale(base.0, step),
                scale(base.1, step),
                scale(base.2, step),
            )
            .to_hsl()
        })
        .collect()
}

/// Generates a palette on the thread-local RNG with the default configuration.
pub fn generate(strategy: Strategy, options: &GenerateOptions) -> Result<Palette, FormatError> {
    PaletteGenerator::thread().generate(strategy, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceSource;

    fn scripted(values: &[u32]) -> PaletteGenerator<SequenceSource> {
        PaletteGenerator::new(SequenceSource::new(values.to_vec()))
    }

    // =========================================================================
    // Strategy names
    // =========================================================================

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("triadic".parse::<Strategy>().unwrap(), Strategy::Triadic);
        assert_eq!("Analogous".parse::<Strategy>().unwrap(), Strategy::Analogous);
        assert_eq!("spawn".parse::<Strategy>().unwrap(), Strategy::Random);
    }

    #[test]
    fn test_strategy_from_str_unknown() {
        let err = "pastel".parse::<Strategy>().unwrap_err();
        assert_eq!(err.name, "pastel");
        assert!(err.expected.contains("complementary"));
    }

    #[test]
    fn test_strategy_display_round_trips() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }

    // =========================================================================
    // Rotation
    // =========================================================================

    #[test]
    fn test_rotation_offsets() {
        let offsets = |s: Strategy| s.rotation().unwrap().offsets().collect::<Vec<_>>();
        assert_eq!(offsets(Strategy::Complementary), vec![180]);
        assert_eq!(offsets(Strategy::Split), vec![150, 210]);
        assert_eq!(offsets(Strategy::Triadic), vec![120, 240]);
        assert_eq!(offsets(Strategy::Tetradic), vec![90, 180, 270]);
        assert_eq!(offsets(Strategy::Analogous), vec![40, 80, 120, 160]);
        assert!(Strategy::Random.rotation().is_none());
        assert!(Strategy::Shades.rotation().is_none());
    }

    #[test]
    fn test_rotation_apply_wraps_hue() {
        let colors = Rotation::new(120, 240, 120).apply(Hsl::new(300, 70, 60));
        assert_eq!(
            colors,
            vec![
                Hsl::new(300, 70, 60),
                Hsl::new(60, 70, 60),
                Hsl::new(180, 70, 60),
            ]
        );
    }

    // =========================================================================
    // Generation
    // =========================================================================

    #[test]
    fn test_random_uses_configured_draws() {
        let mut generator = scripted(&[360, 100, 99, 10, 50, 50]);
        let palette = generator
            .generate(Strategy::Random, &GenerateOptions::default())
            .unwrap();
        assert_eq!(palette.len(), 5);
        // 360 wraps to 0
        assert_eq!(palette.colors()[0], Hsl::new(0, 100, 99));
        assert_eq!(palette.colors()[1], Hsl::new(10, 50, 50));
    }

    #[test]
    fn test_complementary_from_random_base() {
        let mut generator = scripted(&[200, 60, 70]);
        let palette = generator
            .generate(Strategy::Complementary, &GenerateOptions::default())
            .unwrap();
        assert_eq!(
            palette.colors(),
            &[Hsl::new(200, 60, 70), Hsl::new(20, 60, 70)]
        );
    }

    #[test]
    fn test_split_from_text_seed() {
        let mut generator = scripted(&[]);
        let palette = generator
            .generate(Strategy::Split, &GenerateOptions::seeded("hsl(10, 50%, 60%)"))
            .unwrap();
        assert_eq!(
            palette.colors(),
            &[
                Hsl::new(10, 50, 60),
                Hsl::new(160, 50, 60),
                Hsl::new(220, 50, 60),
            ]
        );
    }

    #[test]
    fn test_hex_seed_converted_to_hsl() {
        let mut generator = scripted(&[]);
        let palette = generator
            .generate(Strategy::Tetradic, &GenerateOptions::seeded("#ff0000"))
            .unwrap();
        assert_eq!(palette.colors()[0], Hsl::new(0, 100, 50));
        assert_eq!(palette.colors()[3], Hsl::new(270, 100, 50));
    }

    #[test]
    fn test_malformed_seed_propagates() {
        let mut generator = scripted(&[]);
        let err = generator
            .generate(Strategy::Triadic, &GenerateOptions::seeded("hsl(abc)"))
            .unwrap_err();
        assert!(matches!(err, FormatError::MissingFields { .. }));
    }

    #[test]
    fn test_random_ignores_seed() {
        let mut generator = scripted(&[100, 60, 60]);
        let palette = generator
            .generate(Strategy::Random, &GenerateOptions::seeded("not a color"))
            .unwrap();
        assert_eq!(palette.len(), 5);
    }

    // =========================================================================
    // Shades
    // =========================================================================

    #[test]
    fn test_shades_scaling() {
        let colors = shades(Rgb(255, 100, 0), 5);
        let rgb: Vec<Rgb> = [255u32, 204, 153, 102, 51]
            .iter()
            .zip([100u32, 80, 60, 40, 20])
            .map(|(&r, g)| Rgb(r as u8, g as u8, 0))
            .collect();
        let expected: Vec<Hsl> = rgb.into_iter().map(Rgb::to_hsl).collect();
        assert_eq!(colors, expected);
    }

    #[test]
    fn test_shades_round_to_nearest() {
        // 3 * 3 / 5 = 1.8 -> 2, 1 * 3 / 5 = 0.6 -> 1
        let colors = shades(Rgb(3, 3, 3), 5);
        assert_eq!(colors[2], Rgb(2, 2, 2).to_hsl());
        assert_eq!(colors[4], Rgb(1, 1, 1).to_hsl());
    }

    #[test]
    fn test_shades_from_random_base() {
        let mut generator = scripted(&[10, 20, 30]);
        let palette = generator
            .generate(Strategy::Shades, &GenerateOptions::default())
            .unwrap();
        assert_eq!(palette.len(), 5);
        assert_eq!(palette.colors()[0], Rgb(10, 20, 30).to_hsl());
    }

    #[test]
    fn test_shades_count_from_config() {
        let mut config = PaletteConfig::default();
        config.shades.count = 3;
        let mut generator = PaletteGenerator::with_config(SequenceSource::new(vec![90]), config);
        let palette = generator
            .generate(Strategy::Shades, &GenerateOptions::default())
            .unwrap();
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn test_shades_rgb_seed_read_directly() {
        let mut generator = scripted(&[]);
        let palette = generator
            .generate(Strategy::Shades, &GenerateOptions::seeded("rgb(100, 50, 25)"))
            .unwrap();
        assert_eq!(palette.colors()[0], Rgb(100, 50, 25).to_hsl());
        assert_eq!(palette.colors()[4], Rgb(20, 10, 5).to_hsl());
    }
}
