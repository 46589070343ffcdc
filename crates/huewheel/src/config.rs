//! Palette generation settings.
//!
//! The defaults reproduce the classic behavior: random colors draw hue from
//! `0..=360`, saturation from `50..=100` and lightness from `50..=99`, and
//! shades come in five steps. Every section is optional, so a config file
//! only needs to name what it changes:
//!
//! ```yaml
//! random:
//!   lightness: { min: 20, max: 60 }
//! shades:
//!   count: 7
//! ```
//!
//! Files ending in `.json` are read as JSON, anything else as YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// An inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: u32,
    pub max: u32,
}

impl IntRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    fn validate(&self, field: &'static str, limit: u32) -> Result<(), ConfigError> {
        if self.min > self.max || self.max > limit {
            return Err(ConfigError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
                limit,
            });
        }
        Ok(())
    }
}

/// Ranges for the independent draws of the `random` strategy and of every
/// random base color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Hue draw; 360 is allowed and wraps to 0.
    pub hue: IntRange,
    pub saturation: IntRange,
    pub lightness: IntRange,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            hue: IntRange::new(0, 360),
            saturation: IntRange::new(50, 100),
            lightness: IntRange::new(50, 99),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadesConfig {
    pub count: u8,
}

impl Default for ShadesConfig {
    fn default() -> Self {
        Self { count: 5 }
    }
}

/// Top-level generation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub random: RandomConfig,
    pub shades: ShadesConfig,
}

impl PaletteConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            path: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            path: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config file, choosing the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        };

        parsed.map_err(|err| match err {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }

    /// Checks every range against its component's bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.random.hue.validate("hue", 360)?;
        self.random.saturation.validate("saturation", 100)?;
        self.random.lightness.validate("lightness", 100)?;
        if self.shades.count == 0 {
            return Err(ConfigError::NoShades);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranges() {
        let config = PaletteConfig::default();
        assert_eq!(config.random.hue, IntRange::new(0, 360));
        assert_eq!(config.random.saturation, IntRange::new(50, 100));
        assert_eq!(config.random.lightness, IntRange::new(50, 99));
        assert_eq!(config.shades.count, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_partial_override() {
        let config = PaletteConfig::from_yaml(
            r#"
random:
  lightness: { min: 20, max: 60 }
shades:
  count: 7
"#,
        )
        .unwrap();
        assert_eq!(config.random.lightness, IntRange::new(20, 60));
        assert_eq!(config.random.saturation, IntRange::new(50, 100));
        assert_eq!(config.shades.count, 7);
    }

    #[test]
    fn test_from_yaml_empty_document_is_default() {
        assert_eq!(PaletteConfig::from_yaml("{}").unwrap(), PaletteConfig::default());
    }

    #[test]
    fn test_from_json() {
        let config =
            PaletteConfig::from_json(r#"{"random": {"hue": {"min": 180, "max": 240}}}"#).unwrap();
        assert_eq!(config.random.hue, IntRange::new(180, 240));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = PaletteConfig::from_yaml("random:\n  saturation: { min: 90, max: 10 }\n")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidRange {
                field: "saturation",
                ..
            }
        ));
    }

    #[test]
    fn test_lightness_above_100_rejected() {
        let err =
            PaletteConfig::from_yaml("random:\n  lightness: { min: 0, max: 120 }\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidRange {
                field: "lightness",
                limit: 100,
                ..
            }
        ));
    }

    #[test]
    fn test_zero_shades_rejected() {
        let err = PaletteConfig::from_yaml("shades:\n  count: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::NoShades));
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        let err = PaletteConfig::from_yaml("random: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
    }
}
