//! Conversion-table key notation
//!
//! This module documents the key syntax used by the built-in conversion tables and the precedence
//! with which the formatter consults them. It contains no code.
//!
//! # Unit indices
//!
//! The formatter walks the integer digit string from its least significant digit. Each digit has
//! a *unit index*: 0 for the ones place, 1 for the tens, 2 for the hundreds, and so on. Fractional
//! digits are indexed from 0 at the first position after the decimal separator.
//!
//! # Key categories
//!
//! | Key | Meaning |
//! |-----|---------|
//! | `"0"`..`"9"`, `"a"`..`"z"` | Plain digit substitution. A digit with no entry renders as itself. |
//! | `"o3"` / `"e3"` | Parity-qualified digits: `o` entries apply at even unit indices (0, 2, ...), `e` entries at odd ones, alternating from the least significant digit. Ge'ez uses this for its distinct ones and tens glyph rows. |
//! | `"+3"` | Prefix override consulted before the plain digit. Systems that elide a digit entirely map it to an empty glyph here (`"+0"` in Chinese, Japanese, Tamil, and Hebrew suppresses zeros). |
//! | `"^2+3"` | Compound positional key: digit 3 at unit 2 renders as one combined glyph. This is how subtractive Roman patterns (`"^1+4"` is `XL`) and Armenian/Hebrew letter values are expressed. |
//! | `"^1+23"` | Two-digit compound: the current digit together with the digit above it. Hebrew uses this for 15 and 16 (`ט״ו`, `ט״ז`), which are written irregularly. |
//! | `"^2"` | Positional power suffix appended after the digit glyph (`"^2"` is `百` in Japanese). |
//! | `"Hundreds"` / `"Myriads"` | Generic power glyphs reused across unit positions. `Hundreds` applies at units 2, 6, 10, ... and `Myriads` at units 4, 8, 12, ...; unit 0 is never classified. `"Hundreds+1"`-style entries override the digit glyph at those positions (Ge'ez writes one hundred as bare `፻`). |
//! | `"=0"` | Whole-number literal: when the complete converted integer equals the text after `=`, this glyph replaces the entire integer rendering and grouping is skipped. |
//! | `"-3"`, `"-+3"`, `"^-1"`, `"^-1+3"` | Fractional mirrors of the digit, prefix, power, and compound keys, applied per fractional position. |
//!
//! Tables declared `additive` (Roman, Hebrew, Armenian, Tamil, Ge'ez) encode magnitude in their
//! glyphs rather than positionally, so fractional rendering through the decimal separator is
//! suppressed for them.
//!
//! # Lookup precedence
//!
//! For each integer digit, highest priority first:
//!
//! 1. two-digit compound `^unit+pair`;
//! 2. compound `^unit+digit`;
//! 3. prefix `+digit`;
//! 4. parity digit (`o`/`e`), then plain digit, then the raw character — plus, in this branch
//!    only, a power suffix: the `Myriads`/`Hundreds` group glyph when the unit is so classified
//!    (with its optional digit override), otherwise the direct `^unit` power.
//!
//! A compound or prefix match deliberately suppresses the power suffix: `"^1+1"` in Japanese
//! renders ten as bare `十` with no digit glyph, and an elided zero contributes neither digit nor
//! power.
//!
//! Fractional digits mirror the same ladder with the `-`-prefixed and negative-exponent keys.
//!
//! # Worked example
//!
//! Formatting `1994` with the Roman table:
//!
//! ```text
//! unit 0, digit 4  ->  "^0+4"  ->  IV
//! unit 1, digit 9  ->  "^1+9"  ->  XC
//! unit 2, digit 9  ->  "^2+9"  ->  CM
//! unit 3, digit 1  ->  "^3+1"  ->  M
//! ```
//!
//! Most significant first, the rendering is `MCMXCIV`.

// This module contains only documentation; no implementation code
