//! Error types for palette configuration and rendering.
//!
//! Color parsing failures are [`FormatError`](huewheel_color::FormatError)
//! and come straight from `huewheel-color`; the types here cover the
//! surrounding layers.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when loading or validating a [`PaletteConfig`](crate::PaletteConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML or JSON syntax error, or a field of the wrong type.
    #[error("failed to parse config{}: {message}", location(.path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    /// A range is inverted or exceeds what its component allows.
    #[error("invalid {field} range {min}..={max} (allowed 0..={limit})")]
    InvalidRange {
        field: &'static str,
        min: u32,
        max: u32,
        limit: u32,
    },

    /// Shades need at least one step.
    #[error("shade count must be at least 1")]
    NoShades,
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Error type for palette rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template compilation or evaluation failure.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// JSON serialization failure.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failure.
    #[error("serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Error returned when a strategy or output mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{name}' (expected one of: {expected})")]
pub struct UnknownName {
    pub kind: &'static str,
    pub name: String,
    pub expected: String,
}
