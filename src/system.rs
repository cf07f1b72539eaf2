//! Built-in numeral systems and their conversion tables.
//!
//! This module provides two types:
//!
//! - [`NumeralSystem`]: an enum naming every built-in numeral system. Selecting a table through
//!   an enum rather than a runtime string means an unknown system is unrepresentable and a `match`
//!   over systems is checked for exhaustiveness by the compiler.
//! - [`ConversionTable`]: a static table mapping symbolic keys (digits, parity-qualified digits,
//!   positional powers, whole-number literals) to target-script glyphs. The key syntax is
//!   documented in [`crate::notation`].
//!
//! Tables are process-wide constants and are never mutated; a [`crate::NumeralFormatter`] borrows
//! one for the lifetime of its configuration.
//!
//! ## Examples
//!
//! ```rust
//! use numera::NumeralSystem;
//!
//! let system = NumeralSystem::Eastern;
//! assert_eq!(system.table().get("7"), Some("٧"));
//!
//! // Systems round-trip through their names.
//! let parsed: NumeralSystem = "ChineseSimplified".parse().unwrap();
//! assert_eq!(parsed, NumeralSystem::ChineseSimplified);
//! ```

use crate::error::Error;
use crate::tables;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A static mapping from symbolic digit/position keys to target-script glyphs.
///
/// Entries are stored in declaration order, so serializing a table (or iterating it) is
/// deterministic. Lookup keys that are absent simply fall back to the raw character during
/// formatting; a table never causes a failure.
///
/// # Examples
///
/// ```rust
/// use numera::NumeralSystem;
///
/// let geez = NumeralSystem::Geez.table();
/// assert!(geez.is_additive());
/// assert_eq!(geez.get("Hundreds"), Some("፻"));
/// assert_eq!(geez.get("no-such-key"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionTable {
    pub(crate) additive: bool,
    pub(crate) entries: &'static [(&'static str, &'static str)],
}

impl ConversionTable {
    /// Looks up the glyph for a symbolic key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    /// Returns `true` for additive (non-positional) systems such as Roman, Hebrew, Armenian,
    /// Tamil, and Ge'ez. Additive systems encode magnitude in the glyphs themselves, so fractional
    /// rendering via a decimal separator is suppressed for them.
    #[must_use]
    pub const fn is_additive(&self) -> bool {
        self.additive
    }

    /// Returns the number of key/glyph entries in the table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table carries no entries (the identity table).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the key/glyph entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

impl Serialize for ConversionTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = usize::from(self.additive);
        let mut map = serializer.serialize_map(Some(self.entries.len() + extra))?;
        if self.additive {
            map.serialize_entry(".", &true)?;
        }
        for (key, glyph) in self.entries {
            map.serialize_entry(key, glyph)?;
        }
        map.end()
    }
}

/// Every numeral system with a built-in conversion table.
///
/// The default is [`NumeralSystem::Western`], whose table is intentionally empty: Western Arabic
/// digits are the canonical representation, so formatting through it is the identity transform on
/// each digit.
///
/// # Examples
///
/// ```rust
/// use numera::NumeralSystem;
///
/// assert!(NumeralSystem::Western.table().is_empty());
/// assert_eq!(NumeralSystem::Devanagari.table().get("0"), Some("०"));
/// assert_eq!(NumeralSystem::Roman.to_string(), "Roman");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NumeralSystem {
    /// Hindu-Arabic / Western Arabic numerals (the identity table).
    #[default]
    Western,
    /// Eastern Arabic numerals.
    Eastern,
    /// Persian/Urdu numerals (Eastern Arabic variant).
    Persian,
    /// Bengali/Bangla numerals.
    Nagari,
    /// Devanagari numerals (Hindi, Marathi, and others).
    Devanagari,
    Gujarati,
    /// Gurmukhi/Punjabi numerals.
    Gurmukhi,
    Kannada,
    Telugu,
    Burmese,
    Khmer,
    Thai,
    Lao,
    /// Mayan numerals, a base-20 system.
    Mayan,
    /// Japanese numerals, a multiplicative system with named fractional powers.
    Japanese,
    /// Tamil numerals, additive with dedicated ten/hundred/thousand glyphs.
    Tamil,
    Javanese,
    /// Roman numerals in modern standard form with vinculum overlines for thousands.
    Roman,
    Odia,
    Tibetan,
    Mongolian,
    /// Hebrew numerals in modern standard form.
    Hebrew,
    /// Armenian numerals in historic form with overlines for myriads.
    Armenian,
    /// Standard simplified Chinese numerals.
    ChineseSimplified,
    /// Standard traditional Chinese numerals.
    ChineseTraditional,
    /// Financial ("banker's") simplified Chinese numerals.
    ChineseSimplifiedFinancial,
    /// Financial ("banker's") traditional Chinese numerals.
    ChineseTraditionalFinancial,
    /// Dozenal transcription digits (Dwiggins): X and E for ten and eleven.
    Dwiggins,
    /// Dozenal transcription digits (Pitman): ↊ and ↋ for ten and eleven.
    Pitman,
    /// Fullwidth forms of the ASCII digits and letters.
    Fullwidth,
    /// Ol Chiki numerals (used by Santali).
    OlChiki,
    /// Kaktovik numerals, a base-20 system.
    Kaktovik,
    /// Ge'ez/Ethiopic numerals, additive with parity-dependent glyphs.
    Geez,
}

impl NumeralSystem {
    /// All built-in systems, in a stable order.
    pub const ALL: &'static [NumeralSystem] = &[
        NumeralSystem::Western,
        NumeralSystem::Eastern,
        NumeralSystem::Persian,
        NumeralSystem::Nagari,
        NumeralSystem::Devanagari,
        NumeralSystem::Gujarati,
        NumeralSystem::Gurmukhi,
        NumeralSystem::Kannada,
        NumeralSystem::Telugu,
        NumeralSystem::Burmese,
        NumeralSystem::Khmer,
        NumeralSystem::Thai,
        NumeralSystem::Lao,
        NumeralSystem::Mayan,
        NumeralSystem::Japanese,
        NumeralSystem::Tamil,
        NumeralSystem::Javanese,
        NumeralSystem::Roman,
        NumeralSystem::Odia,
        NumeralSystem::Tibetan,
        NumeralSystem::Mongolian,
        NumeralSystem::Hebrew,
        NumeralSystem::Armenian,
        NumeralSystem::ChineseSimplified,
        NumeralSystem::ChineseTraditional,
        NumeralSystem::ChineseSimplifiedFinancial,
        NumeralSystem::ChineseTraditionalFinancial,
        NumeralSystem::Dwiggins,
        NumeralSystem::Pitman,
        NumeralSystem::Fullwidth,
        NumeralSystem::OlChiki,
        NumeralSystem::Kaktovik,
        NumeralSystem::Geez,
    ];

    /// Returns the conversion table for this system.
    #[must_use]
    pub fn table(&self) -> &'static ConversionTable {
        match self {
            NumeralSystem::Western => &tables::WESTERN,
            NumeralSystem::Eastern => &tables::EASTERN,
            NumeralSystem::Persian => &tables::PERSIAN,
            NumeralSystem::Nagari => &tables::NAGARI,
            NumeralSystem::Devanagari => &tables::DEVANAGARI,
            NumeralSystem::Gujarati => &tables::GUJARATI,
            NumeralSystem::Gurmukhi => &tables::GURMUKHI,
            NumeralSystem::Kannada => &tables::KANNADA,
            NumeralSystem::Telugu => &tables::TELUGU,
            NumeralSystem::Burmese => &tables::BURMESE,
            NumeralSystem::Khmer => &tables::KHMER,
            NumeralSystem::Thai => &tables::THAI,
            NumeralSystem::Lao => &tables::LAO,
            NumeralSystem::Mayan => &tables::MAYAN,
            NumeralSystem::Japanese => &tables::JAPANESE,
            NumeralSystem::Tamil => &tables::TAMIL,
            NumeralSystem::Javanese => &tables::JAVANESE,
            NumeralSystem::Roman => &tables::ROMAN,
            NumeralSystem::Odia => &tables::ODIA,
            NumeralSystem::Tibetan => &tables::TIBETAN,
            NumeralSystem::Mongolian => &tables::MONGOLIAN,
            NumeralSystem::Hebrew => &tables::HEBREW,
            NumeralSystem::Armenian => &tables::ARMENIAN,
            NumeralSystem::ChineseSimplified => &tables::CHINESE_SIMPLIFIED,
            NumeralSystem::ChineseTraditional => &tables::CHINESE_TRADITIONAL,
            NumeralSystem::ChineseSimplifiedFinancial => &tables::CHINESE_SIMPLIFIED_FINANCIAL,
            NumeralSystem::ChineseTraditionalFinancial => &tables::CHINESE_TRADITIONAL_FINANCIAL,
            NumeralSystem::Dwiggins => &tables::DWIGGINS,
            NumeralSystem::Pitman => &tables::PITMAN,
            NumeralSystem::Fullwidth => &tables::FULLWIDTH,
            NumeralSystem::OlChiki => &tables::OL_CHIKI,
            NumeralSystem::Kaktovik => &tables::KAKTOVIK,
            NumeralSystem::Geez => &tables::GEEZ,
        }
    }

    /// Returns the canonical name of this system.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            NumeralSystem::Western => "Western",
            NumeralSystem::Eastern => "Eastern",
            NumeralSystem::Persian => "Persian",
            NumeralSystem::Nagari => "Nagari",
            NumeralSystem::Devanagari => "Devanagari",
            NumeralSystem::Gujarati => "Gujarati",
            NumeralSystem::Gurmukhi => "Gurmukhi",
            NumeralSystem::Kannada => "Kannada",
            NumeralSystem::Telugu => "Telugu",
            NumeralSystem::Burmese => "Burmese",
            NumeralSystem::Khmer => "Khmer",
            NumeralSystem::Thai => "Thai",
            NumeralSystem::Lao => "Lao",
            NumeralSystem::Mayan => "Mayan",
            NumeralSystem::Japanese => "Japanese",
            NumeralSystem::Tamil => "Tamil",
            NumeralSystem::Javanese => "Javanese",
            NumeralSystem::Roman => "Roman",
            NumeralSystem::Odia => "Odia",
            NumeralSystem::Tibetan => "Tibetan",
            NumeralSystem::Mongolian => "Mongolian",
            NumeralSystem::Hebrew => "Hebrew",
            NumeralSystem::Armenian => "Armenian",
            NumeralSystem::ChineseSimplified => "ChineseSimplified",
            NumeralSystem::ChineseTraditional => "ChineseTraditional",
            NumeralSystem::ChineseSimplifiedFinancial => "ChineseSimplifiedFinancial",
            NumeralSystem::ChineseTraditionalFinancial => "ChineseTraditionalFinancial",
            NumeralSystem::Dwiggins => "Dwiggins",
            NumeralSystem::Pitman => "Pitman",
            NumeralSystem::Fullwidth => "Fullwidth",
            NumeralSystem::OlChiki => "OlChiki",
            NumeralSystem::Kaktovik => "Kaktovik",
            NumeralSystem::Geez => "Geez",
        }
    }

    /// Serializes this system's conversion table to a JSON object string.
    ///
    /// Additive systems carry a `"."` key set to `true`, matching the shape the tables take when
    /// exported for front-end consumers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numera::NumeralSystem;
    ///
    /// assert_eq!(NumeralSystem::Western.to_json(), "{}");
    /// assert!(NumeralSystem::Roman.to_json().starts_with("{\".\":true"));
    /// ```
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self.table()).unwrap_or_else(|_| String::from("{}"))
    }
}

impl fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for NumeralSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumeralSystem::ALL
            .iter()
            .copied()
            .find(|system| system.name() == s)
            .ok_or_else(|| Error::UnknownSystem(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_system_parses_from_its_own_name() {
        for system in NumeralSystem::ALL {
            assert_eq!(system.name().parse::<NumeralSystem>().unwrap(), *system);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "Klingon".parse::<NumeralSystem>(),
            Err(Error::UnknownSystem("Klingon".to_string()))
        );
    }

    #[test]
    fn decimal_systems_cover_all_ten_digits() {
        // Pure positional base-10 tables map every digit; multiplicative and
        // dozenal-overlay tables rely on fallbacks instead.
        for system in [
            NumeralSystem::Eastern,
            NumeralSystem::Persian,
            NumeralSystem::Nagari,
            NumeralSystem::Devanagari,
            NumeralSystem::Gujarati,
            NumeralSystem::Gurmukhi,
            NumeralSystem::Kannada,
            NumeralSystem::Telugu,
            NumeralSystem::Burmese,
            NumeralSystem::Khmer,
            NumeralSystem::Thai,
            NumeralSystem::Lao,
            NumeralSystem::Javanese,
            NumeralSystem::Odia,
            NumeralSystem::Tibetan,
            NumeralSystem::Mongolian,
            NumeralSystem::Fullwidth,
            NumeralSystem::OlChiki,
        ] {
            for digit in 0..10u32 {
                let key = digit.to_string();
                assert!(
                    system.table().get(&key).is_some(),
                    "{system} is missing digit {digit}"
                );
            }
        }
    }

    #[test]
    fn base20_systems_cover_twenty_digits() {
        for system in [NumeralSystem::Mayan, NumeralSystem::Kaktovik] {
            let table = system.table();
            assert_eq!(table.len(), 20);
            assert!(table.get("j").is_some());
        }
    }

    #[test]
    fn table_json_is_ordered() {
        let json = NumeralSystem::Eastern.to_json();
        assert!(json.starts_with("{\"0\":\"٠\""));
        assert!(json.ends_with("\"9\":\"٩\"}"));
    }

    #[test]
    fn serde_names_match_display() {
        let json = serde_json::to_string(&NumeralSystem::ChineseTraditional).unwrap();
        assert_eq!(json, "\"ChineseTraditional\"");
        let back: NumeralSystem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NumeralSystem::ChineseTraditional);
    }
}
