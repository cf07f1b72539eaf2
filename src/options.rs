//! Configuration for numeral formatting.
//!
//! This module provides two types:
//!
//! - [`NumeralOptions`]: the five scalar settings (group separator, group size, group offset,
//!   decimal separator, base) plus the selected [`NumeralSystem`]. Options are plain data,
//!   buildable field by field; a [`crate::NumeralFormatter`] takes a copy and treats it as
//!   immutable from then on.
//! - [`Preset`]: short names for commonly used combinations ("Latin-3", "India-5", "Base-16",
//!   "SDN-Dwiggins", ...) that deterministically expand into a full `NumeralOptions` value.
//!
//! ## Examples
//!
//! ```rust
//! use numera::{NumeralOptions, NumeralSystem, Preset};
//!
//! // Field-by-field configuration.
//! let options = NumeralOptions::new()
//!     .with_system(NumeralSystem::Thai)
//!     .with_group_separator("")
//!     .with_base(10);
//! assert_eq!(options.system, NumeralSystem::Thai);
//!
//! // Preset expansion.
//! let options = NumeralOptions::from(Preset::India5);
//! assert_eq!(options.system, NumeralSystem::Kannada);
//! assert_eq!(options.group_size, 2);
//! assert_eq!(options.group_offset, -1);
//! ```

use crate::error::Error;
use crate::system::NumeralSystem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Settings controlling how a number is rendered.
///
/// The defaults describe the common Western layout: comma-separated groups of three, a full stop
/// for the decimal marker, base ten, and the identity digit table.
///
/// # Examples
///
/// ```rust
/// use numera::NumeralOptions;
///
/// let options = NumeralOptions::new();
/// assert_eq!(options.group_separator, ",");
/// assert_eq!(options.group_size, 3);
/// assert_eq!(options.base, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumeralOptions {
    /// The conversion table to render digits through.
    pub system: NumeralSystem,
    /// String inserted between digit groups; empty disables grouping output.
    pub group_separator: String,
    /// Digits per group. Always at least 1.
    pub group_size: u32,
    /// Bias applied when counting out the first group, for layouts where the first group has a
    /// different size (Indian numbering uses `-1` with a group size of 2).
    pub group_offset: i32,
    /// String marking the fractional boundary; empty disables fractional rendering.
    pub decimal_separator: String,
    /// Positional base of the target format. Formatting requires `2..=36`; anything else makes
    /// [`crate::NumeralFormatter::format`] return an empty string.
    pub base: u32,
}

impl Default for NumeralOptions {
    fn default() -> Self {
        NumeralOptions {
            system: NumeralSystem::Western,
            group_separator: String::from(","),
            group_size: 3,
            group_offset: 0,
            decimal_separator: String::from("."),
            base: 10,
        }
    }
}

impl NumeralOptions {
    /// Creates the default Western options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the numeral system.
    #[must_use]
    pub fn with_system(mut self, system: NumeralSystem) -> Self {
        self.system = system;
        self
    }

    /// Sets the group separator.
    #[must_use]
    pub fn with_group_separator(mut self, separator: impl Into<String>) -> Self {
        self.group_separator = separator.into();
        self
    }

    /// Sets the group size. Values below 1 are clamped to 1.
    #[must_use]
    pub fn with_group_size(mut self, size: u32) -> Self {
        self.group_size = size.max(1);
        self
    }

    /// Sets the first-group bias.
    #[must_use]
    pub fn with_group_offset(mut self, offset: i32) -> Self {
        self.group_offset = offset;
        self
    }

    /// Sets the decimal separator.
    #[must_use]
    pub fn with_decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = separator.into();
        self
    }

    /// Sets the target base.
    #[must_use]
    pub fn with_base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }
}

impl From<Preset> for NumeralOptions {
    fn from(preset: Preset) -> Self {
        preset.options()
    }
}

/// Named presets expanding to complete [`NumeralOptions`].
///
/// Preset names parse via [`FromStr`], including the locale aliases ("Persian" for `Arabic3`,
/// "Kannada" for `India5`, and so on) and the parameterized families `Base-N` and `SDN-<system>`.
/// [`fmt::Display`] renders the canonical name, which always parses back to the same preset.
///
/// # Examples
///
/// ```rust
/// use numera::{NumeralSystem, Preset};
///
/// assert_eq!("Urdu".parse::<Preset>().unwrap(), Preset::Arabic4);
/// assert_eq!("Base-16".parse::<Preset>().unwrap(), Preset::Base(16));
/// assert_eq!(
///     "SDN-Pitman".parse::<Preset>().unwrap(),
///     Preset::Sdn(NumeralSystem::Pitman)
/// );
/// assert_eq!(Preset::Base(16).to_string(), "Base-16");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Western digits, comma groups, full-stop decimal point.
    Latin1,
    /// As `Latin-1` with a narrow no-break space between groups.
    Latin2,
    /// As `Latin-1` with full stop and comma swapped (continental European layout).
    Latin3,
    /// Narrow no-break space between groups, comma decimal marker.
    Latin4,
    /// As `Latin-1` with an interpunct decimal marker.
    Latin5,
    /// Western digits with no grouping.
    NoSep1,
    /// No grouping, comma decimal marker.
    NoSep2,
    /// Eastern Arabic digits, no grouping.
    Arabic1,
    /// Eastern Arabic digits with Arabic thousands and decimal separators.
    Arabic2,
    /// Persian digits with Arabic separators. Alias: `Persian`.
    Arabic3,
    /// Persian digits, Arabic separators, Indian-style grouping. Alias: `Urdu`.
    Arabic4,
    ChineseSimplified,
    ChineseSimplifiedFinancial,
    ChineseTraditional,
    ChineseTraditionalFinancial,
    /// Western digits with Indian-style 2-after-3 grouping.
    India,
    /// Devanagari digits, Indian grouping. Alias: `Devanagari`.
    India2,
    /// Gujarati digits, Indian grouping. Alias: `Gujarati`.
    India3,
    /// Gurmukhi digits, Indian grouping. Alias: `Gurmukhi`.
    India4,
    /// Kannada digits, Indian grouping. Alias: `Kannada`.
    India5,
    /// Telugu digits, Indian grouping. Alias: `Telugu`.
    India6,
    /// Bengali digits, Indian grouping. Aliases: `Bangla`, `Nagari`.
    Bengali,
    Burmese,
    /// Western digits grouped in fours.
    China,
    Thai,
    /// Thai digits with no grouping.
    Thai2,
    Armenian,
    Geez,
    Hebrew,
    Roman,
    Tamil,
    Fullwidth,
    Javanese,
    Lao,
    Mongolian,
    Odia,
    Tibetan,
    Japanese,
    Kaktovik,
    Mayan,
    Khmer,
    /// Western-style layout targeting an arbitrary base. A base outside `2..=36` is preserved
    /// as configured and makes formatting return an empty string.
    Base(u32),
    /// Systematic Dozenal Nomenclature: the given digit table at base 12 with a semicolon
    /// (Humphrey point) as the fractional marker.
    Sdn(NumeralSystem),
}

impl Preset {
    /// Expands this preset into its full options.
    #[must_use]
    pub fn options(&self) -> NumeralOptions {
        let defaults = NumeralOptions::default();
        match self {
            Preset::Latin1 => defaults,
            Preset::Latin2 => defaults.with_group_separator("\u{202F}"),
            Preset::Latin3 => defaults
                .with_group_separator(".")
                .with_decimal_separator(","),
            Preset::Latin4 => defaults
                .with_group_separator("\u{202F}")
                .with_decimal_separator(","),
            Preset::Latin5 => defaults.with_decimal_separator("\u{B7}"),
            Preset::NoSep1 => defaults.with_group_separator(""),
            Preset::NoSep2 => defaults
                .with_group_separator("")
                .with_decimal_separator(","),
            Preset::Arabic1 => defaults
                .with_system(NumeralSystem::Eastern)
                .with_group_separator("")
                .with_decimal_separator("٫"),
            Preset::Arabic2 => defaults
                .with_system(NumeralSystem::Eastern)
                .with_group_separator("٬")
                .with_decimal_separator("٫"),
            Preset::Arabic3 => defaults
                .with_system(NumeralSystem::Persian)
                .with_group_separator("٬")
                .with_decimal_separator("٫"),
            Preset::Arabic4 => defaults
                .with_system(NumeralSystem::Persian)
                .with_group_separator("٬")
                .with_decimal_separator("٫")
                .with_group_size(2)
                .with_group_offset(-1),
            Preset::ChineseSimplified => defaults
                .with_system(NumeralSystem::ChineseSimplified)
                .with_group_separator("")
                .with_decimal_separator("点"),
            Preset::ChineseSimplifiedFinancial => defaults
                .with_system(NumeralSystem::ChineseSimplifiedFinancial)
                .with_group_separator("")
                .with_decimal_separator("点"),
            Preset::ChineseTraditional => defaults
                .with_system(NumeralSystem::ChineseTraditional)
                .with_group_separator("")
                .with_decimal_separator("點"),
            Preset::ChineseTraditionalFinancial => defaults
                .with_system(NumeralSystem::ChineseTraditionalFinancial)
                .with_group_separator("")
                .with_decimal_separator("點"),
            Preset::India => defaults.with_group_size(2).with_group_offset(-1),
            Preset::India2 => defaults
                .with_system(NumeralSystem::Devanagari)
                .with_group_size(2)
                .with_group_offset(-1),
            Preset::India3 => defaults
                .with_system(NumeralSystem::Gujarati)
                .with_group_size(2)
                .with_group_offset(-1),
            Preset::India4 => defaults
                .with_system(NumeralSystem::Gurmukhi)
                .with_group_size(2)
                .with_group_offset(-1),
            Preset::India5 => defaults
                .with_system(NumeralSystem::Kannada)
                .with_group_size(2)
                .with_group_offset(-1),
            Preset::India6 => defaults
                .with_system(NumeralSystem::Telugu)
                .with_group_size(2)
                .with_group_offset(-1),
            Preset::Bengali => defaults
                .with_system(NumeralSystem::Nagari)
                .with_group_size(2)
                .with_group_offset(-1),
            Preset::Burmese => defaults
                .with_system(NumeralSystem::Burmese)
                .with_group_separator(""),
            Preset::China => defaults.with_group_size(4),
            Preset::Thai => defaults.with_system(NumeralSystem::Thai),
            Preset::Thai2 => defaults
                .with_system(NumeralSystem::Thai)
                .with_group_separator(""),
            Preset::Armenian => additive_options(NumeralSystem::Armenian),
            Preset::Geez => additive_options(NumeralSystem::Geez),
            Preset::Hebrew => additive_options(NumeralSystem::Hebrew),
            Preset::Roman => additive_options(NumeralSystem::Roman),
            Preset::Tamil => additive_options(NumeralSystem::Tamil),
            Preset::Fullwidth => defaults
                .with_system(NumeralSystem::Fullwidth)
                .with_group_separator(""),
            Preset::Javanese => defaults
                .with_system(NumeralSystem::Javanese)
                .with_group_separator(""),
            Preset::Lao => defaults
                .with_system(NumeralSystem::Lao)
                .with_group_separator(""),
            Preset::Mongolian => defaults
                .with_system(NumeralSystem::Mongolian)
                .with_group_separator(""),
            Preset::Odia => defaults
                .with_system(NumeralSystem::Odia)
                .with_group_separator(""),
            Preset::Tibetan => defaults
                .with_system(NumeralSystem::Tibetan)
                .with_group_separator(""),
            Preset::Japanese => defaults
                .with_system(NumeralSystem::Japanese)
                .with_group_separator("")
                .with_decimal_separator("・"),
            Preset::Kaktovik => defaults
                .with_system(NumeralSystem::Kaktovik)
                .with_group_separator("")
                .with_base(20),
            Preset::Mayan => defaults
                .with_system(NumeralSystem::Mayan)
                .with_group_separator("")
                .with_base(20),
            Preset::Khmer => defaults
                .with_system(NumeralSystem::Khmer)
                .with_group_separator(".")
                .with_decimal_separator(","),
            Preset::Base(base) => {
                let mut options = defaults.with_group_separator("");
                // Not with_base: an out-of-range request stays out of range so
                // that formatting fails as specified instead of being masked.
                options.base = *base;
                options
            }
            Preset::Sdn(system) => defaults
                .with_system(*system)
                .with_decimal_separator(";")
                .with_base(12),
        }
    }

    /// Returns the canonical preset name.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Preset::Latin1 => "Latin-1".to_string(),
            Preset::Latin2 => "Latin-2".to_string(),
            Preset::Latin3 => "Latin-3".to_string(),
            Preset::Latin4 => "Latin-4".to_string(),
            Preset::Latin5 => "Latin-5".to_string(),
            Preset::NoSep1 => "NoSep-1".to_string(),
            Preset::NoSep2 => "NoSep-2".to_string(),
            Preset::Arabic1 => "Arabic-1".to_string(),
            Preset::Arabic2 => "Arabic-2".to_string(),
            Preset::Arabic3 => "Arabic-3".to_string(),
            Preset::Arabic4 => "Arabic-4".to_string(),
            Preset::ChineseSimplified => "Chinese-Simplified".to_string(),
            Preset::ChineseSimplifiedFinancial => "Chinese-Simplified-Financial".to_string(),
            Preset::ChineseTraditional => "Chinese-Traditional".to_string(),
            Preset::ChineseTraditionalFinancial => "Chinese-Traditional-Financial".to_string(),
            Preset::India => "India".to_string(),
            Preset::India2 => "India-2".to_string(),
            Preset::India3 => "India-3".to_string(),
            Preset::India4 => "India-4".to_string(),
            Preset::India5 => "India-5".to_string(),
            Preset::India6 => "India-6".to_string(),
            Preset::Bengali => "Bengali".to_string(),
            Preset::Burmese => "Burmese".to_string(),
            Preset::China => "China".to_string(),
            Preset::Thai => "Thai".to_string(),
            Preset::Thai2 => "Thai-2".to_string(),
            Preset::Armenian => "Armenian".to_string(),
            Preset::Geez => "Geez".to_string(),
            Preset::Hebrew => "Hebrew".to_string(),
            Preset::Roman => "Roman".to_string(),
            Preset::Tamil => "Tamil".to_string(),
            Preset::Fullwidth => "Fullwidth".to_string(),
            Preset::Javanese => "Javanese".to_string(),
            Preset::Lao => "Lao".to_string(),
            Preset::Mongolian => "Mongolian".to_string(),
            Preset::Odia => "Odia".to_string(),
            Preset::Tibetan => "Tibetan".to_string(),
            Preset::Japanese => "Japanese".to_string(),
            Preset::Kaktovik => "Kaktovik".to_string(),
            Preset::Mayan => "Mayan".to_string(),
            Preset::Khmer => "Khmer".to_string(),
            Preset::Base(base) => format!("Base-{base}"),
            Preset::Sdn(system) => format!("SDN-{system}"),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Exact names and their locale aliases.
        let exact = match s {
            "" | "Latin-1" => Some(Preset::Latin1),
            "Latin-2" => Some(Preset::Latin2),
            "Latin-3" => Some(Preset::Latin3),
            "Latin-4" => Some(Preset::Latin4),
            "Latin-5" => Some(Preset::Latin5),
            "NoSep-1" => Some(Preset::NoSep1),
            "NoSep-2" => Some(Preset::NoSep2),
            "Arabic-2" => Some(Preset::Arabic2),
            "Arabic-3" | "Persian" => Some(Preset::Arabic3),
            "Arabic-4" | "Urdu" => Some(Preset::Arabic4),
            "Chinese-Simplified" => Some(Preset::ChineseSimplified),
            "Chinese-Simplified-Financial" => Some(Preset::ChineseSimplifiedFinancial),
            "Chinese-Traditional" => Some(Preset::ChineseTraditional),
            "Chinese-Traditional-Financial" => Some(Preset::ChineseTraditionalFinancial),
            "India-2" | "Devanagari" => Some(Preset::India2),
            "India-3" | "Gujarati" => Some(Preset::India3),
            "India-4" | "Gurmukhi" => Some(Preset::India4),
            "India-5" | "Kannada" => Some(Preset::India5),
            "India-6" | "Telugu" => Some(Preset::India6),
            "Thai-2" => Some(Preset::Thai2),
            _ => None,
        };
        if let Some(preset) = exact {
            return Ok(preset);
        }

        // Families selected by the segment before the first dash.
        let mut segments = s.split('-');
        let family = segments.next().unwrap_or_default();
        let parameter = segments.next();
        let preset = match family {
            "Arabic" => Some(Preset::Arabic1),
            "Armenian" => Some(Preset::Armenian),
            "Geez" => Some(Preset::Geez),
            "Hebrew" => Some(Preset::Hebrew),
            "Roman" => Some(Preset::Roman),
            "Tamil" => Some(Preset::Tamil),
            "Base" => Some(Preset::Base(
                parameter.and_then(|p| p.parse().ok()).unwrap_or(0),
            )),
            "Bangla" | "Bengali" | "Nagari" => Some(Preset::Bengali),
            "Burmese" => Some(Preset::Burmese),
            "China" => Some(Preset::China),
            "Fullwidth" => Some(Preset::Fullwidth),
            "Javanese" => Some(Preset::Javanese),
            "Lao" => Some(Preset::Lao),
            "Mongolian" => Some(Preset::Mongolian),
            "Odia" => Some(Preset::Odia),
            "Tibetan" => Some(Preset::Tibetan),
            "India" => Some(Preset::India),
            "Japanese" => Some(Preset::Japanese),
            "Kaktovik" => Some(Preset::Kaktovik),
            "Mayan" => Some(Preset::Mayan),
            "Khmer" => Some(Preset::Khmer),
            "SDN" => parameter
                .and_then(|name| name.parse::<NumeralSystem>().ok())
                .map(Preset::Sdn),
            "Thai" => Some(Preset::Thai),
            _ => None,
        };
        preset.ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}

fn additive_options(system: NumeralSystem) -> NumeralOptions {
    NumeralOptions::default()
        .with_system(system)
        .with_group_separator("")
        .with_decimal_separator("")
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMED: &[Preset] = &[
        Preset::Latin1,
        Preset::Latin2,
        Preset::Latin3,
        Preset::Latin4,
        Preset::Latin5,
        Preset::NoSep1,
        Preset::NoSep2,
        Preset::Arabic1,
        Preset::Arabic2,
        Preset::Arabic3,
        Preset::Arabic4,
        Preset::ChineseSimplified,
        Preset::ChineseSimplifiedFinancial,
        Preset::ChineseTraditional,
        Preset::ChineseTraditionalFinancial,
        Preset::India,
        Preset::India2,
        Preset::India3,
        Preset::India4,
        Preset::India5,
        Preset::India6,
        Preset::Bengali,
        Preset::Burmese,
        Preset::China,
        Preset::Thai,
        Preset::Thai2,
        Preset::Armenian,
        Preset::Geez,
        Preset::Hebrew,
        Preset::Roman,
        Preset::Tamil,
        Preset::Fullwidth,
        Preset::Javanese,
        Preset::Lao,
        Preset::Mongolian,
        Preset::Odia,
        Preset::Tibetan,
        Preset::Japanese,
        Preset::Kaktovik,
        Preset::Mayan,
        Preset::Khmer,
    ];

    #[test]
    fn canonical_names_round_trip() {
        for preset in NAMED {
            assert_eq!(preset.name().parse::<Preset>().unwrap(), *preset);
        }
        assert_eq!("Base-16".parse::<Preset>().unwrap(), Preset::Base(16));
        assert_eq!(
            "SDN-Dwiggins".parse::<Preset>().unwrap(),
            Preset::Sdn(NumeralSystem::Dwiggins)
        );
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!("Persian".parse::<Preset>().unwrap(), Preset::Arabic3);
        assert_eq!("Urdu".parse::<Preset>().unwrap(), Preset::Arabic4);
        assert_eq!("Devanagari".parse::<Preset>().unwrap(), Preset::India2);
        assert_eq!("Bangla".parse::<Preset>().unwrap(), Preset::Bengali);
        assert_eq!("Nagari".parse::<Preset>().unwrap(), Preset::Bengali);
    }

    #[test]
    fn family_names_accept_variants() {
        assert_eq!("Roman-1".parse::<Preset>().unwrap(), Preset::Roman);
        assert_eq!("Arabic".parse::<Preset>().unwrap(), Preset::Arabic1);
        assert_eq!("Kaktovik-1".parse::<Preset>().unwrap(), Preset::Kaktovik);
    }

    #[test]
    fn empty_name_is_the_default_preset() {
        assert_eq!("".parse::<Preset>().unwrap(), Preset::Latin1);
        assert_eq!(Preset::Latin1.options(), NumeralOptions::default());
    }

    #[test]
    fn base_family_tolerates_garbage_numbers() {
        // An unusable number collapses to base 0, which formatting rejects.
        assert_eq!("Base".parse::<Preset>().unwrap(), Preset::Base(0));
        assert_eq!("Base-xyz".parse::<Preset>().unwrap(), Preset::Base(0));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(matches!(
            "Klingon-1".parse::<Preset>(),
            Err(Error::UnknownPreset(_))
        ));
        assert!(matches!(
            "SDN-Klingon".parse::<Preset>(),
            Err(Error::UnknownPreset(_))
        ));
    }

    #[test]
    fn additive_presets_disable_separators() {
        for preset in [
            Preset::Armenian,
            Preset::Geez,
            Preset::Hebrew,
            Preset::Roman,
            Preset::Tamil,
        ] {
            let options = preset.options();
            assert_eq!(options.group_separator, "");
            assert_eq!(options.decimal_separator, "");
            assert!(options.system.table().is_additive());
        }
    }

    #[test]
    fn sdn_presets_use_base_twelve_and_humphrey_point() {
        let options = Preset::Sdn(NumeralSystem::Pitman).options();
        assert_eq!(options.base, 12);
        assert_eq!(options.decimal_separator, ";");
        assert_eq!(options.group_separator, ",");
    }

    #[test]
    fn group_size_is_clamped() {
        assert_eq!(NumeralOptions::new().with_group_size(0).group_size, 1);
    }

    #[test]
    fn options_serde_round_trip() {
        let options = Preset::Arabic4.options();
        let json = serde_json::to_string(&options).unwrap();
        let back: NumeralOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
