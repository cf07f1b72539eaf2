//! Radix conversion over digit strings.
//!
//! Numbers travel through this crate as strings of digit symbols rather than machine integers, so
//! the converters here work on arbitrary-precision values via `num_bigint`. Digit values ten and
//! above use the lowercase letters `a`-`z`, giving a symbol alphabet that is exhausted at base 36.
//!
//! Integer conversion follows the permissive convention of classic base-conversion routines:
//! characters that are not valid digits of the source base (including signs and separators) are
//! silently ignored instead of raising an error.
//!
//! Fractional conversion preserves the contract callers depend on: same-base input is returned
//! unchanged, output is truncated at the caller's digit limit, and invalid bases or a zero limit
//! yield an empty string. Internally it is exact rational arithmetic (numerator/denominator over
//! big integers) rather than a floating-point approximation, so long fractions do not drift.

use num_bigint::BigUint;

/// Highest base representable with the `0`-`9` `a`-`z` symbol alphabet.
pub(crate) const MAX_BASE: u32 = 36;

/// Returns the symbol for a digit value, lowercase letters from ten upward.
pub(crate) fn symbol_for(value: u32) -> Option<char> {
    match value {
        0..=9 => char::from_digit(value, 10),
        10..=35 => Some((b'a' + (value - 10) as u8) as char),
        _ => None,
    }
}

/// Returns the digit value of a symbol. Letters are accepted in either case.
pub(crate) fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Collects the digit values of `text` that are valid under `base`, ignoring everything else.
fn digit_values(text: &str, base: u32) -> Vec<u8> {
    text.chars()
        .filter_map(digit_value)
        .filter(|v| *v < base)
        .map(|v| v as u8)
        .collect()
}

/// Converts an integer digit string between bases.
///
/// Invalid characters are ignored; an input with no valid digits converts to `"0"`. Bases outside
/// `[2, 36]` yield an empty string.
pub(crate) fn convert_integer(number: &str, from: u32, to: u32) -> String {
    if !(2..=MAX_BASE).contains(&from) || !(2..=MAX_BASE).contains(&to) {
        return String::new();
    }
    let values = digit_values(number, from);
    let value = BigUint::from_radix_be(&values, from).unwrap_or_default();
    let digits = value.to_radix_be(to);
    digits
        .iter()
        .filter_map(|d| symbol_for(u32::from(*d)))
        .collect()
}

/// Converts a fractional digit string between bases, emitting at most `limit` digits.
///
/// The input is the digit sequence after the radix point. Same-base input is returned unchanged
/// (callers truncate it themselves); trailing zeros are dropped before conversion; digit emission
/// stops early once the remainder is exhausted. Bases outside `[2, 36]` or a zero limit yield an
/// empty string.
pub(crate) fn convert_fraction(fraction: &str, from: u32, to: u32, limit: usize) -> String {
    if !(2..=MAX_BASE).contains(&from) || !(2..=MAX_BASE).contains(&to) || limit == 0 {
        return String::new();
    }
    if from == to || fraction.is_empty() {
        return fraction.to_string();
    }
    let values = digit_values(fraction.trim_end_matches('0'), from);
    let mut numerator = BigUint::from_radix_be(&values, from).unwrap_or_default();
    let denominator = BigUint::from(from).pow(values.len() as u32);
    let scale = BigUint::from(to);

    let mut out = String::new();
    for _ in 0..limit {
        if numerator == BigUint::default() {
            break;
        }
        numerator *= &scale;
        let digit = &numerator / &denominator;
        numerator %= &denominator;
        let value = digit.to_u32_digits().first().copied().unwrap_or(0);
        if let Some(symbol) = symbol_for(value) {
            out.push(symbol);
        }
    }
    out
}
