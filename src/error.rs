//! Error types for numeral configuration.
//!
//! The formatting and parsing operations themselves never fail: [`crate::NumeralFormatter::format`]
//! degrades to an empty string when the configured base is unusable, unmapped glyphs fall back to
//! their raw characters, and [`crate::unformat`] always produces a numeric string (possibly `"0"`).
//! Errors therefore only arise at the configuration boundary, when textual preset or system names
//! are resolved into their typed counterparts.
//!
//! ## Examples
//!
//! ```rust
//! use numera::{Error, Preset};
//!
//! let err = "Klingon-1".parse::<Preset>().unwrap_err();
//! assert!(matches!(err, Error::UnknownPreset(_)));
//! assert!(err.to_string().contains("Klingon-1"));
//! ```

use thiserror::Error;

/// Errors produced while resolving textual configuration into typed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A preset name did not match any known formatting preset.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// A numeral system name did not match any built-in conversion table.
    #[error("unknown numeral system: {0}")]
    UnknownSystem(String),

    /// A base outside the supported range was requested where a valid base is required.
    #[error("base {0} is outside the supported range 2-36")]
    BaseOutOfRange(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
