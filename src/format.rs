//! Locale-aware numeral rendering.
//!
//! [`NumeralFormatter`] turns a canonical decimal value into a culturally specific textual form:
//! substituted digit glyphs, optional group separators at configurable (possibly irregular)
//! intervals, positional bases from 2 to 36, and the compound digit/power glyph composition that
//! multiplicative and additive systems require.
//!
//! Formatting is total. Invalid bases produce an empty string, unmapped digits pass through as
//! their raw characters, and no input ever causes a panic. The rendering loop walks the digit
//! string from the least significant position, consulting the conversion table at each unit index
//! with the precedence described in [`crate::notation`].
//!
//! ## Examples
//!
//! ```rust
//! use numera::{NumeralFormatter, Preset};
//!
//! let latin = NumeralFormatter::default();
//! assert_eq!(latin.format("1234567", 0), "1,234,567");
//! assert_eq!(latin.format(3.14159, 2), "3.14");
//!
//! let roman = NumeralFormatter::preset(Preset::Roman);
//! assert_eq!(roman.format(1994, 0), "MCMXCIV");
//!
//! let chinese = NumeralFormatter::preset(Preset::ChineseSimplified);
//! assert_eq!(chinese.format(1234, 0), "一千二百三十四");
//!
//! let hex = NumeralFormatter::preset(Preset::Base(16));
//! assert_eq!(hex.format(255, 0), "ff");
//! ```

use crate::options::{NumeralOptions, Preset};
use crate::radix;
use crate::unformat;
use indexmap::IndexMap;
use std::fmt;

/// A configured numeral renderer.
///
/// A formatter owns an immutable copy of its [`NumeralOptions`] and an index over the selected
/// conversion table, built once at construction. Formatters are cheap to clone and safe to share
/// across threads for read-only use.
///
/// # Examples
///
/// ```rust
/// use numera::{NumeralFormatter, NumeralOptions, NumeralSystem, Preset};
///
/// // From a preset.
/// let urdu = NumeralFormatter::preset(Preset::Arabic4);
/// assert_eq!(urdu.format("1234567", 0), "۱۲٬۳۴٬۵۶۷");
///
/// // From hand-built options.
/// let options = NumeralOptions::new()
///     .with_system(NumeralSystem::Thai)
///     .with_group_separator("");
/// let thai = NumeralFormatter::new(options);
/// assert_eq!(thai.format(42, 0), "๔๒");
/// ```
#[derive(Debug, Clone)]
pub struct NumeralFormatter {
    options: NumeralOptions,
    table: IndexMap<&'static str, &'static str>,
    additive: bool,
}

impl NumeralFormatter {
    /// Creates a formatter from explicit options.
    #[must_use]
    pub fn new(options: NumeralOptions) -> Self {
        let table_data = options.system.table();
        let table = table_data.entries().collect();
        NumeralFormatter {
            additive: table_data.is_additive(),
            table,
            options,
        }
    }

    /// Creates a formatter from a preset.
    #[must_use]
    pub fn preset(preset: Preset) -> Self {
        Self::new(preset.options())
    }

    /// Returns the options this formatter was built with.
    #[must_use]
    pub fn options(&self) -> &NumeralOptions {
        &self.options
    }

    /// Formats `number` with up to `decimals` fractional digits.
    ///
    /// The value is coerced through its `Display` form and split at the first `.`. The integer
    /// part is reduced to a canonical decimal digit string; anything after the first non-digit
    /// is discarded, so unparseable input formats as zero. A fractional part is rendered only
    /// when the input itself carries one, `decimals` is nonzero, a decimal separator is
    /// configured, and the selected system is positional; it is converted into the target base
    /// and padded or truncated to exactly `decimals` digits.
    ///
    /// Negative values receive no special treatment: in base ten the sign character passes
    /// through the rendering loop as an unmapped symbol (and is counted by the grouping walk),
    /// and in any other base it is dropped by the radix conversion. Callers needing signed
    /// output should format the magnitude and apply the sign themselves.
    ///
    /// Returns an empty string when the configured base lies outside `2..=36`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numera::{NumeralFormatter, Preset};
    ///
    /// let latin = NumeralFormatter::default();
    /// assert_eq!(latin.format(1234, 0), "1,234");
    /// assert_eq!(latin.format("not a number", 0), "0");
    ///
    /// // decimals = 0 suppresses an existing fractional part.
    /// assert_eq!(latin.format("2.75", 0), "2");
    ///
    /// let bad = NumeralFormatter::preset(Preset::Base(37));
    /// assert_eq!(bad.format(1, 0), "");
    /// ```
    #[must_use]
    pub fn format<N: fmt::Display>(&self, number: N, decimals: usize) -> String {
        self.format_str(&number.to_string(), decimals)
    }

    /// Parses previously formatted text back into a canonical decimal string, using this
    /// formatter's decimal separator and base as hints. See [`mod@crate::unformat`] for the
    /// underlying best-effort contract.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numera::{NumeralFormatter, Preset};
    ///
    /// let hex = NumeralFormatter::preset(Preset::Base(16));
    /// assert_eq!(hex.unformat("ff"), "255");
    ///
    /// let thai = NumeralFormatter::preset(Preset::Thai);
    /// assert_eq!(thai.unformat("๑,๒๓๔.๕"), "1234.5");
    /// ```
    #[must_use]
    pub fn unformat(&self, text: &str) -> String {
        unformat::unformat(text, &self.options.decimal_separator, self.options.base)
    }

    fn format_str(&self, number: &str, decimals: usize) -> String {
        if !(2..=radix::MAX_BASE).contains(&self.options.base) {
            return String::new();
        }

        let (integer_input, fraction_input) = match number.find('.') {
            Some(pos) => (&number[..pos], Some(&number[pos + 1..])),
            None => (number, None),
        };
        let mut integer = canonical_integer(integer_input);

        // A fractional part is rendered only when the input carries one and the
        // configuration can express one.
        let fraction = match fraction_input {
            Some(digits)
                if decimals > 0 && !self.options.decimal_separator.is_empty() && !self.additive =>
            {
                let mut converted = if digits.is_empty() {
                    String::new()
                } else {
                    radix::convert_fraction(digits, 10, self.options.base, decimals)
                };
                converted.truncate(decimals);
                while converted.len() < decimals {
                    converted.push('0');
                }
                Some(converted)
            }
            _ => None,
        };

        if self.options.base != 10 {
            integer = radix::convert_integer(&integer, 10, self.options.base);
        }

        let mut formatted = match self.table.get(format!("={integer}").as_str()) {
            Some(literal) => (*literal).to_string(),
            None => self.render_integer(&integer),
        };

        if let Some(fraction) = fraction {
            formatted.push_str(&self.options.decimal_separator);
            self.render_fraction(&fraction, &mut formatted);
        }

        // An integer part that rendered empty leaves the separator dangling in front.
        let separator = &self.options.decimal_separator;
        if !separator.is_empty() {
            if let Some(stripped) = formatted.strip_prefix(separator.as_str()) {
                formatted = stripped.to_string();
            }
        }
        formatted
    }

    /// Renders the integer digit string from the least significant position, prepending each
    /// digit/power pair and any due group separator.
    fn render_integer(&self, integer: &str) -> String {
        let digits: Vec<char> = integer.chars().collect();
        let group_size = i64::from(self.options.group_size);
        let mut group_pos = i64::from(self.options.group_offset);
        let mut parity = 'o';
        // Pieces accumulate least-significant first and are reversed into place.
        let mut pieces: Vec<String> = Vec::with_capacity(digits.len() * 2);

        for (unit, pos) in (0..digits.len()).rev().enumerate() {
            if group_pos >= group_size {
                group_pos = 1;
                pieces.push(self.options.group_separator.clone());
            } else {
                group_pos += 1;
            }

            let (myriads, hundreds) = if unit == 0 {
                (false, false)
            } else {
                let myriads = unit % 4 == 0;
                (myriads, !myriads && unit % 2 == 0)
            };

            let key = digits[pos];
            let mut power = "";
            let digit: String;

            let pair = if pos > 0 {
                self.lookup(&format!("^{unit}+{}{key}", digits[pos - 1]))
            } else {
                None
            };
            if let Some(glyph) = pair {
                digit = glyph.to_string();
            } else if let Some(glyph) = self.lookup(&format!("^{unit}+{key}")) {
                digit = glyph.to_string();
            } else if let Some(glyph) = self.lookup(&format!("+{key}")) {
                digit = glyph.to_string();
            } else {
                let mut plain = self
                    .lookup(&format!("{parity}{key}"))
                    .or_else(|| self.lookup(&key.to_string()))
                    .map(str::to_string)
                    .unwrap_or_else(|| key.to_string());
                let myriads_glyph = if myriads { self.lookup("Myriads") } else { None };
                let hundreds_glyph = if hundreds { self.lookup("Hundreds") } else { None };
                if let Some(group_power) = myriads_glyph {
                    power = group_power;
                    if let Some(glyph) = self.lookup(&format!("Myriads+{key}")) {
                        plain = glyph.to_string();
                    }
                } else if let Some(group_power) = hundreds_glyph {
                    power = group_power;
                    if let Some(glyph) = self.lookup(&format!("Hundreds+{key}")) {
                        plain = glyph.to_string();
                    }
                } else if let Some(suffix) = self.lookup(&format!("^{unit}")) {
                    power = suffix;
                }
                digit = plain;
            }

            pieces.push(power.to_string());
            pieces.push(digit);
            parity = if parity == 'o' { 'e' } else { 'o' };
        }

        pieces.iter().rev().flat_map(|piece| piece.chars()).collect()
    }

    /// Renders fractional digits left to right with the mirrored (negative-exponent) key set.
    fn render_fraction(&self, fraction: &str, out: &mut String) {
        for (pos, key) in fraction.chars().enumerate() {
            let mut power = "";
            let digit: String;
            if let Some(glyph) = self.lookup(&format!("^-{pos}+{key}")) {
                digit = glyph.to_string();
            } else if let Some(glyph) = self.lookup(&format!("-+{key}")) {
                digit = glyph.to_string();
            } else {
                digit = self
                    .lookup(&format!("-{key}"))
                    .or_else(|| self.lookup(&key.to_string()))
                    .map(str::to_string)
                    .unwrap_or_else(|| key.to_string());
                if let Some(suffix) = self.lookup(&format!("^-{pos}")) {
                    power = suffix;
                }
            }
            out.push_str(&digit);
            out.push_str(power);
        }
    }

    fn lookup(&self, key: &str) -> Option<&'static str> {
        self.table.get(key).copied()
    }
}

impl Default for NumeralFormatter {
    fn default() -> Self {
        Self::new(NumeralOptions::default())
    }
}

impl From<Preset> for NumeralFormatter {
    fn from(preset: Preset) -> Self {
        Self::preset(preset)
    }
}

/// Reduces text to a canonical decimal integer string the way a loose numeric cast would:
/// optional leading whitespace and sign, then a digit run, stopping at the first other character.
/// Leading zeros collapse; a zero value renders unsigned.
fn canonical_integer(text: &str) -> String {
    let trimmed = text.trim_start();
    let mut chars = trimmed.chars().peekable();
    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };
    let digits: String = chars.take_while(char::is_ascii_digit).collect();
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        String::from("0")
    } else if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::NumeralSystem;

    fn preset(preset: Preset) -> NumeralFormatter {
        NumeralFormatter::preset(preset)
    }

    #[test]
    fn default_formatting_is_identity_plus_grouping() {
        let latin = NumeralFormatter::default();
        assert_eq!(latin.format("0", 0), "0");
        assert_eq!(latin.format("1234", 0), "1,234");
        assert_eq!(latin.format(1_234_567, 0), "1,234,567");
        assert_eq!(latin.format("001234", 0), "1,234");
    }

    #[test]
    fn canonical_integer_behaves_like_a_loose_cast() {
        assert_eq!(canonical_integer("0042"), "42");
        assert_eq!(canonical_integer(" 12abc"), "12");
        assert_eq!(canonical_integer("abc"), "0");
        assert_eq!(canonical_integer("-7"), "-7");
        assert_eq!(canonical_integer("-0"), "0");
        assert_eq!(canonical_integer("+9"), "9");
        assert_eq!(canonical_integer(""), "0");
    }

    #[test]
    fn indian_grouping_offsets_the_first_boundary() {
        let india = preset(Preset::India);
        assert_eq!(india.format("1234567", 0), "12,34,567");
        assert_eq!(india.format("123", 0), "123");
        assert_eq!(india.format("1234", 0), "1,234");
    }

    #[test]
    fn china_preset_groups_in_fours() {
        assert_eq!(preset(Preset::China).format("123456789", 0), "1,2345,6789");
    }

    #[test]
    fn eastern_arabic_with_separators() {
        let arabic = preset(Preset::Arabic2);
        assert_eq!(arabic.format("1234.56", 2), "١٬٢٣٤٫٥٦");
    }

    #[test]
    fn decimal_digits_render_when_input_has_a_fraction() {
        let latin = NumeralFormatter::default();
        assert_eq!(latin.format("3.14159", 2), "3.14");
        assert_eq!(latin.format("3.1", 3), "3.100");
        // Without a fractional part in the input no fraction is invented.
        assert_eq!(latin.format("3", 2), "3");
        // A bare trailing point pads with zeros.
        assert_eq!(latin.format("3.", 2), "3.00");
    }

    #[test]
    fn base_sixteen_round_trip_digits() {
        let hex = preset(Preset::Base(16));
        assert_eq!(hex.format(255, 0), "ff");
        assert_eq!(hex.format(4096, 0), "1000");
        assert_eq!(hex.format("0.5", 2), "0.80");
    }

    #[test]
    fn out_of_range_bases_fail_to_empty() {
        assert_eq!(preset(Preset::Base(0)).format(1, 0), "");
        assert_eq!(preset(Preset::Base(1)).format(1, 0), "");
        assert_eq!(preset(Preset::Base(37)).format(1, 0), "");
    }

    #[test]
    fn roman_numerals() {
        let roman = preset(Preset::Roman);
        assert_eq!(roman.format(1994, 0), "MCMXCIV");
        assert_eq!(roman.format(2024, 0), "MMXXIV");
        assert_eq!(roman.format(49, 0), "XLIX");
        assert_eq!(roman.format(3888, 0), "MMMDCCCLXXXVIII");
        // No zero glyph exists.
        assert_eq!(roman.format(0, 0), "");
    }

    #[test]
    fn roman_vinculum_extends_thousands() {
        assert_eq!(preset(Preset::Roman).format(5000, 0), "V\u{305}");
    }

    #[test]
    fn chinese_simplified_multiplicative_rendering() {
        let chinese = preset(Preset::ChineseSimplified);
        assert_eq!(chinese.format(1234, 0), "一千二百三十四");
        assert_eq!(chinese.format(10, 0), "十");
        assert_eq!(chinese.format(1005, 0), "一千五");
        assert_eq!(chinese.format(123_456, 0), "一十二万三千四百五十六");
        assert_eq!(chinese.format(0, 0), "〇");
        assert_eq!(chinese.format("0.5", 2), "〇点五〇");
    }

    #[test]
    fn chinese_financial_uses_bankers_digits() {
        let financial = preset(Preset::ChineseSimplifiedFinancial);
        assert_eq!(financial.format(21, 0), "贰拾壹");
    }

    #[test]
    fn japanese_drops_leading_one_before_ten() {
        let japanese = preset(Preset::Japanese);
        assert_eq!(japanese.format(10, 0), "十");
        assert_eq!(japanese.format(11, 0), "十一");
        assert_eq!(japanese.format(111, 0), "百十一");
        assert_eq!(japanese.format(1, 0), "一");
    }

    #[test]
    fn japanese_fraction_strips_empty_integer_rendering() {
        // The integer zero elides, leaving the decimal separator to be stripped.
        assert_eq!(preset(Preset::Japanese).format("0.5", 1), "五");
    }

    #[test]
    fn hebrew_additive_values() {
        let hebrew = preset(Preset::Hebrew);
        assert_eq!(hebrew.format(15, 0), "ט״ו");
        assert_eq!(hebrew.format(214, 0), "ריד");
        assert_eq!(hebrew.format(5784, 0), "ה׳ןפד");
    }

    #[test]
    fn armenian_additive_values() {
        assert_eq!(preset(Preset::Armenian).format(2025, 0), "ՍԻԵ");
    }

    #[test]
    fn geez_parity_and_power_glyphs() {
        let geez = preset(Preset::Geez);
        assert_eq!(geez.format(123, 0), "፻፳፫");
        assert_eq!(geez.format(100, 0), "፻");
        assert_eq!(geez.format(1000, 0), "፲፻");
        assert_eq!(geez.format(7, 0), "፯");
    }

    #[test]
    fn tamil_additive_values() {
        let tamil = preset(Preset::Tamil);
        assert_eq!(tamil.format(1, 0), "௧");
        assert_eq!(tamil.format(21, 0), "௨௰௧");
        assert_eq!(tamil.format(100, 0), "௱");
    }

    #[test]
    fn additive_systems_suppress_fractions() {
        assert_eq!(preset(Preset::Roman).format("12.5", 2), "XII");
        assert_eq!(preset(Preset::Geez).format("12.5", 2), "፲፪");
    }

    #[test]
    fn mayan_and_kaktovik_use_base_twenty() {
        assert_eq!(preset(Preset::Mayan).format(400, 0), "𝋡𝋠𝋠");
        assert_eq!(preset(Preset::Kaktovik).format(39, 0), "𝋁𝋓");
    }

    #[test]
    fn dozenal_presets_format_base_twelve() {
        let dwiggins = preset(Preset::Sdn(NumeralSystem::Dwiggins));
        assert_eq!(dwiggins.format(22, 0), "1X");
        assert_eq!(dwiggins.format(23, 0), "1E");
        let pitman = preset(Preset::Sdn(NumeralSystem::Pitman));
        assert_eq!(pitman.format(131, 0), "↊↋");
        assert_eq!(pitman.format("0.5", 1), "0;6");
    }

    #[test]
    fn fullwidth_covers_the_whole_alphabet() {
        let fullwidth = preset(Preset::Fullwidth);
        assert_eq!(fullwidth.format(90, 0), "９０");
        let hex = NumeralFormatter::new(
            Preset::Fullwidth
                .options()
                .with_base(16),
        );
        assert_eq!(hex.format(255, 0), "ｆｆ");
    }

    #[test]
    fn unmapped_digits_fall_back_to_raw_characters() {
        // The dozenal overlay only maps ten and eleven; ordinary digits pass through.
        let dwiggins = preset(Preset::Sdn(NumeralSystem::Dwiggins));
        assert_eq!(dwiggins.format(9, 0), "9");
    }

    #[test]
    fn negative_decimal_input_passes_the_sign_through() {
        // Documented quirk: the sign is treated as just another unmapped character.
        assert_eq!(NumeralFormatter::default().format(-1_234_567, 0), "-1,234,567");
    }

    #[test]
    fn grouping_counts_the_sign_as_a_position() {
        // With groups of two the sign occupies a slot: -1234 walks 4,3,2,1,'-'.
        let options = NumeralOptions::new().with_group_size(2);
        assert_eq!(NumeralFormatter::new(options).format(-1234, 0), "-,12,34");
    }
}
