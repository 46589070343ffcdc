//! Palette output for terminals and pipes.
//!
//! [`OutputMode`] picks between styled terminal swatches, plain text, and
//! structured data:
//!
//! - `Term` - a colored block per swatch followed by its rgb / hex / hsl forms
//! - `Text` - the same lines without ANSI codes
//! - `Json` / `Yaml` - the serialized [`PaletteView`], no template involved
//! - `Auto` - `Term` when stdout supports colors, `Text` otherwise
//!
//! Text modes go through a MiniJinja template, so the line layout lives in
//! one place regardless of styling.
//!
//! # Example
//!
//! ```rust
//! use huewheel::{render_palette, OutputMode, Palette, Strategy};
//! use huewheel_color::Hsl;
//!
//! let palette = Palette::new(
//!     Strategy::Complementary,
//!     vec![Hsl::new(0, 100, 50), Hsl::new(180, 100, 50)],
//! );
//! let text = render_palette(&palette, OutputMode::Text).unwrap();
//! assert!(text.contains("#ff0000"));
//! assert!(text.contains("hsl(180, 100%, 50%)"));
//! ```

use std::fmt;
use std::str::FromStr;

use console::{Color, Style, Term};
use huewheel_color::{Hsl, Rgb};
use minijinja::{context, Environment};
use serde::Serialize;

use crate::describe::{describe, describe_rgb, ColorDescription};
use crate::error::{RenderError, UnknownName};
use crate::palette::Palette;

const PALETTE_TEMPLATE: &str = "\
{{ strategy }}: {{ swatches | length }} colors
{% for swatch in swatches -%}
{{ swatch.block }}{{ swatch.rgb }}  {{ swatch.hex }}  {{ swatch.hsl }}  ({{ swatch.width }})
{% endfor %}";

const SWATCH_BLOCK: &str = "        ";

/// Controls how a palette is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Detect terminal color support.
    #[default]
    Auto,
    /// Always include ANSI color blocks.
    Term,
    /// Never include ANSI codes.
    Text,
    /// Serialize as JSON.
    Json,
    /// Serialize as YAML.
    Yaml,
}

impl OutputMode {
    const NAMES: [(&'static str, OutputMode); 5] = [
        ("auto", OutputMode::Auto),
        ("term", OutputMode::Term),
        ("text", OutputMode::Text),
        ("json", OutputMode::Json),
        ("yaml", OutputMode::Yaml),
    ];

    /// Resolves whether ANSI color blocks are drawn.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => Term::stdout().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::Json | OutputMode::Yaml => false,
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = Self::NAMES
            .iter()
            .find(|(_, mode)| mode == self)
            .map(|(name, _)| *name)
            .unwrap_or("auto");
        f.write_str(name)
    }
}

impl FromStr for OutputMode {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, mode)| *mode)
            .ok_or_else(|| UnknownName {
                kind: "output mode",
                name: s.to_string(),
                expected: Self::NAMES.map(|(name, _)| name).join(", "),
            })
    }
}

/// One swatch as handed to the template or serializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwatchView {
    #[serde(flatten)]
    pub description: ColorDescription,
    /// Share of the row this swatch occupies, e.g. `20%`.
    pub width: String,
    /// Pre-styled color block; empty unless colors are on.
    #[serde(skip)]
    pub block: String,
}

/// A palette prepared for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteView {
    pub strategy: String,
    pub swatches: Vec<SwatchView>,
}

impl PaletteView {
    /// Builds the view, drawing color blocks only when `color` is set.
    pub fn new(palette: &Palette, color: bool) -> Self {
        let width = swatch_width(palette.len());
        let swatches = palette
            .iter()
            .map(|&hsl| SwatchView {
                description: describe(hsl),
                width: width.clone(),
                block: if color {
                    color_block(hsl.to_rgb())
                } else {
                    String::new()
                },
            })
            .collect();

        Self {
            strategy: palette.strategy().to_string(),
            swatches,
        }
    }
}

/// Renders a whole palette in the given mode.
pub fn render_palette(palette: &Palette, mode: OutputMode) -> Result<String, RenderError> {
    let view = PaletteView::new(palette, mode.should_use_color());
    match mode {
        OutputMode::Json => Ok(serde_json::to_string_pretty(&view)?),
        OutputMode::Yaml => Ok(serde_yaml::to_string(&view)?),
        _ => render_template(&view),
    }
}

/// Renders the description of one color, as shown by a single swatch.
pub fn render_color(color: Hsl, mode: OutputMode) -> Result<String, RenderError> {
    render_description(&describe(color), color.to_rgb(), mode)
}

/// Like [`render_color`], but keeps the exact channels of an RGB color.
pub fn render_rgb(rgb: Rgb, mode: OutputMode) -> Result<String, RenderError> {
    render_description(&describe_rgb(rgb), rgb, mode)
}

fn render_description(
    description: &ColorDescription,
    rgb: Rgb,
    mode: OutputMode,
) -> Result<String, RenderError> {
    match mode {
        OutputMode::Json => Ok(serde_json::to_string_pretty(description)?),
        OutputMode::Yaml => Ok(serde_yaml::to_string(description)?),
        _ => {
            let block = if mode.should_use_color() {
                color_block(rgb)
            } else {
                String::new()
            };
            Ok(format!(
                "{}{}  {}  {}",
                block, description.rgb, description.hex, description.hsl
            ))
        }
    }
}

fn render_template(view: &PaletteView) -> Result<String, RenderError> {
    let mut env = Environment::new();
    env.add_template("palette.txt", PALETTE_TEMPLATE)?;
    let template = env.get_template("palette.txt")?;

    // #[serde(skip)] keeps blocks out of structured output, so pass them separately
    let swatches: Vec<_> = view
        .swatches
        .iter()
        .map(|s| {
            context! {
                block => s.block.as_str(),
                rgb => s.description.rgb.as_str(),
                hex => s.description.hex.as_str(),
                hsl => s.description.hsl.as_str(),
                width => s.width.as_str(),
            }
        })
        .collect();

    Ok(template.render(context! {
        strategy => view.strategy.as_str(),
        swatches => swatches,
    })?)
}

/// Formats `100 / count` the way swatch widths are labeled: `20%`, `33.33%`.
pub fn swatch_width(count: usize) -> String {
    if count == 0 {
        return "100%".to_string();
    }
    let percent = format!("{:.2}", 100.0 / count as f64);
    let trimmed = percent.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", trimmed)
}

fn color_block(rgb: Rgb) -> String {
    let style = Style::new()
        .bg(Color::Color256(rgb_to_ansi256(rgb)))
        .force_styling(true);
    format!("{} ", style.apply_to(SWATCH_BLOCK))
}

/// Maps an RGB color to the nearest xterm-256 palette index.
///
/// Grays go to the 24-step ramp (232-255), everything else to the 6×6×6 cube.
pub fn rgb_to_ansi256(Rgb(r, g, b): Rgb) -> u8 {
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            _ => 232 + ((u16::from(r) - 8) * 24 / 247) as u8,
        };
    }
    let level = |c: u8| (u16::from(c) * 5 / 255) as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}
