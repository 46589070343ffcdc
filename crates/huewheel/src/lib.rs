//! # huewheel - Color palette generation
//!
//! `huewheel` builds palettes of related colors and renders them as labeled
//! swatches showing each color's RGB, hex and HSL forms.
//!
//! ## Core Concepts
//!
//! - [`Strategy`]: how the colors relate (random, shades, or a color-wheel scheme)
//! - [`PaletteGenerator`]: turns a strategy into a fresh [`Palette`]
//! - [`RandomSource`]: the only source of variation; swap in [`SequenceSource`]
//!   or a seeded [`RngSource`] for reproducible output
//! - [`describe`] / [`describe_rgb`]: the three display strings of one color
//! - [`PaletteSession`]: keeps the current palette across regenerations
//! - [`render_palette`]: terminal, plain text, JSON or YAML output
//!
//! Colors are [`huewheel_color::Hsl`] values throughout; conversions come
//! from the `huewheel-color` crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use huewheel::{GenerateOptions, PaletteGenerator, RngSource, Strategy};
//!
//! let mut generator = PaletteGenerator::new(RngSource::seeded(42));
//! let palette = generator
//!     .generate(Strategy::Triadic, &GenerateOptions::default())
//!     .unwrap();
//!
//! assert_eq!(palette.len(), 3);
//! let base = palette.colors()[0];
//! assert_eq!(palette.colors()[1].hue(), (base.hue() + 120) % 360);
//! ```
//!
//! ## Seeding a Scheme
//!
//! Color-wheel schemes and shades can start from a given color in any
//! notation. A malformed seed is the only way generation fails:
//!
//! ```rust
//! use huewheel::{generate, GenerateOptions, Strategy};
//!
//! let palette = generate(Strategy::Complementary, &GenerateOptions::seeded("#ff0000")).unwrap();
//! assert_eq!(palette.colors()[1].to_hex(), "#00ffff");
//!
//! assert!(generate(Strategy::Triadic, &GenerateOptions::seeded("hsl(abc)")).is_err());
//! ```

pub mod config;
pub mod describe;
pub mod error;
pub mod palette;
pub mod random;
pub mod render;
pub mod session;

pub use config::{IntRange, PaletteConfig, RandomConfig, ShadesConfig};
pub use describe::{describe, describe_rgb, ColorDescription};
pub use error::{ConfigError, RenderError, UnknownName};
pub use palette::{
    generate, shades, GenerateOptions, Palette, PaletteGenerator, Rotation, Seed, Strategy,
};
pub use random::{RandomSource, RngSource, SequenceSource};
pub use render::{render_color, render_palette, render_rgb, OutputMode, PaletteView, SwatchView};
pub use session::PaletteSession;

pub use huewheel_color::{FormatError, Hsl, Rgb};
