//! Error types for color parsing.

use thiserror::Error;

/// Error returned when a textual color cannot be read into numeric fields.
///
/// Every variant carries the input as it was given, so callers can report
/// the offending value without keeping it around themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Nothing left to parse after trimming and stripping the prefix.
    #[error("empty color string")]
    Empty,

    /// A hex color contains non-hexadecimal characters or is too long.
    #[error("invalid hex color '{input}'")]
    InvalidHex { input: String },

    /// A functional color (`hsl(...)`, `rgb(...)`) has fewer than three fields.
    #[error("expected 3 numeric fields in '{input}', found {found}")]
    MissingFields { input: String, found: usize },

    /// A field is present but is not an integer.
    #[error("field {field} of '{input}' is not a number")]
    InvalidNumber { input: String, field: usize },

    /// A field parsed but lies outside its channel range.
    #[error("{component} {value} in '{input}' is out of range (0-{max})")]
    OutOfRange {
        input: String,
        component: &'static str,
        value: u32,
        max: u32,
    },

    /// The text is neither hex, `hsl(...)` nor `rgb(...)`.
    #[error("unrecognized color '{input}'")]
    Unrecognized { input: String },
}

/// Result type for color parsing.
pub type Result<T> = std::result::Result<T, FormatError>;
