//! # numera
//!
//! Locale-aware numeral formatting and parsing for Rust.
//!
//! ## What does it do?
//!
//! `numera` renders canonical decimal values into the numeral conventions of ~30 writing systems
//! and best-effort parses such text back. It covers plain digit-substitution scripts (Eastern
//! Arabic, Devanagari, Thai, ...), multiplicative systems that compose digit and power glyphs
//! (Chinese, Japanese), additive systems (Roman, Hebrew, Armenian, Tamil, Ge'ez), positional
//! bases from 2 to 36, and grouping layouts with irregular first groups (Indian numbering).
//!
//! ## Key Features
//!
//! - **Table-driven**: each system is a static glyph table; the rendering algorithm is shared
//! - **Total**: formatting never panics and never fails — unusable bases degrade to an empty
//!   string and unmapped digits fall back to their raw characters
//! - **Exact**: radix and fraction conversion run on big integers, not floats, so precision
//!   holds at any magnitude
//! - **Configurable**: presets for common locale layouts, or build options field by field
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! numera = "0.1"
//! ```
//!
//! ### Formatting
//!
//! ```rust
//! use numera::{NumeralFormatter, Preset};
//!
//! let latin = NumeralFormatter::default();
//! assert_eq!(latin.format(1234567, 0), "1,234,567");
//! assert_eq!(latin.format("3.14159", 2), "3.14");
//!
//! let devanagari = NumeralFormatter::preset(Preset::India2);
//! assert_eq!(devanagari.format(1234567, 0), "१२,३४,५६७");
//!
//! let roman = NumeralFormatter::preset(Preset::Roman);
//! assert_eq!(roman.format(1994, 0), "MCMXCIV");
//!
//! let hex = NumeralFormatter::preset(Preset::Base(16));
//! assert_eq!(hex.format(255, 0), "ff");
//! ```
//!
//! ### Parsing back
//!
//! ```rust
//! use numera::unformat;
//!
//! assert_eq!(unformat("١٬٢٣٤٫٥٦", "٫", 10), "1234.56");
//! assert_eq!(unformat("一千二百三十四", "", 10), "1234");
//! assert_eq!(unformat("ff", "", 16), "255");
//! ```
//!
//! Parsing is exact for positional output and heuristic for multiplicative and additive systems;
//! see [`mod@unformat`] for the contract.
//!
//! ### Version comparison
//!
//! The [`compare`] module carries the companion version-constraint utilities used alongside the
//! formatter for data-versioning checks:
//!
//! ```rust
//! use numera::Comparator;
//!
//! let mut comparator = Comparator::new();
//! assert!(comparator.compare("1.4.2", ">=1.2&<2.0"));
//! ```
//!
//! ## Design notes
//!
//! - Conversion tables are immutable process-wide statics; a formatter indexes one at
//!   construction and is safe to share for read-only use.
//! - Negative numbers receive no sign handling: the sign passes through base-ten rendering as an
//!   unmapped character and is dropped by radix conversion. Format magnitudes and apply signs at
//!   the call site.
//! - The key notation the tables are written in is documented in [`notation`].
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable examples:
//!
//! - **`presets.rs`** - one value through every preset
//! - **`bases.rs`** - positional bases and dozenal transcription
//! - **`round_trip.rs`** - formatting and parsing back
//!
//! Run any of them with: `cargo run --example <name>`

pub mod compare;
pub mod error;
pub mod format;
mod macros;
pub mod notation;
pub mod options;
mod radix;
pub mod system;
mod tables;
pub mod unformat;

pub use compare::Comparator;
pub use error::{Error, Result};
pub use format::NumeralFormatter;
pub use options::{NumeralOptions, Preset};
pub use system::{ConversionTable, NumeralSystem};
pub use unformat::unformat;

use std::fmt;

/// Formats `number` with the default Western layout (comma groups of three, full-stop decimal
/// point).
///
/// Shorthand for [`NumeralFormatter::default`] followed by
/// [`format`](NumeralFormatter::format); build a formatter once instead when formatting many
/// values.
///
/// # Examples
///
/// ```rust
/// assert_eq!(numera::format(1234567, 0), "1,234,567");
/// assert_eq!(numera::format(2.5, 1), "2.5");
/// ```
#[must_use]
pub fn format<N: fmt::Display>(number: N, decimals: usize) -> String {
    NumeralFormatter::default().format(number, decimals)
}

/// Formats `number` through a preset.
///
/// # Examples
///
/// ```rust
/// use numera::Preset;
///
/// assert_eq!(numera::format_with(Preset::Roman, 2024, 0), "MMXXIV");
/// assert_eq!(numera::format_with(Preset::Thai2, 42, 0), "๔๒");
/// ```
#[must_use]
pub fn format_with<N: fmt::Display>(preset: Preset, number: N, decimals: usize) -> String {
    NumeralFormatter::preset(preset).format(number, decimals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_format_uses_the_default_layout() {
        assert_eq!(format(1234, 0), "1,234");
        assert_eq!(format("56.789", 2), "56.78");
    }

    #[test]
    fn top_level_format_with_preset() {
        assert_eq!(format_with(Preset::Roman, 1994, 0), "MCMXCIV");
        assert_eq!(format_with(Preset::Base(2), 10, 0), "1010");
    }

    #[test]
    fn formatter_and_free_function_agree() {
        let formatter = NumeralFormatter::preset(Preset::ChineseSimplified);
        assert_eq!(
            formatter.format(1234, 0),
            format_with(Preset::ChineseSimplified, 1234, 0)
        );
    }

    #[test]
    fn unformat_inverts_positional_formatting() {
        let text = format(9876543, 0);
        assert_eq!(unformat(&text, "", 10), "9876543");
    }

    #[test]
    fn preset_names_flow_through_the_public_api() {
        let preset: Preset = "Kannada".parse().unwrap();
        assert_eq!(format_with(preset, 1234567, 0), "೧೨,೩೪,೫೬೭");
    }
}
