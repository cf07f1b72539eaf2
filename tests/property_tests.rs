//! Property-based tests - pragmatic coverage of the totality and round-trip guarantees
//! across generated inputs rather than hand-picked values.

use numera::{unformat, NumeralFormatter, NumeralOptions, Preset};
use proptest::prelude::*;

proptest! {
    // The ungrouped Western configuration is the identity on canonical integers.
    #[test]
    fn prop_default_ungrouped_is_identity(n in any::<u64>()) {
        let formatter = NumeralFormatter::preset(Preset::NoSep1);
        prop_assert_eq!(formatter.format(n, 0), n.to_string());
    }

    // Grouped output always parses back to the same value.
    #[test]
    fn prop_grouping_round_trips(n in any::<u64>()) {
        let text = numera::format(n, 0);
        prop_assert_eq!(unformat(&text, "", 10), n.to_string());
    }

    // Grouping inserts exactly one separator per started group of three.
    #[test]
    fn prop_group_separator_count(n in any::<u64>()) {
        let text = numera::format(n, 0);
        let digits = n.to_string().len();
        prop_assert_eq!(text.matches(',').count(), (digits - 1) / 3);
    }

    // Positional formatting in any base parses back exactly. Base 36 is excluded:
    // parsing clamps its working base to 35, so the top symbol cannot survive.
    #[test]
    fn prop_bases_round_trip(n in any::<u32>(), base in 2u32..=35) {
        let formatter = NumeralFormatter::new(
            NumeralOptions::new().with_group_separator("").with_base(base),
        );
        let text = formatter.format(n, 0);
        prop_assert_eq!(unformat(&text, "", base), n.to_string());
    }

    // Formatting is total: no input string or precision may panic, and non-additive
    // presets never panic either.
    #[test]
    fn prop_format_never_panics(s in ".*", decimals in 0usize..8) {
        let _ = NumeralFormatter::default().format(&s, decimals);
        let _ = NumeralFormatter::preset(Preset::ChineseSimplified).format(&s, decimals);
        let _ = NumeralFormatter::preset(Preset::Roman).format(&s, decimals);
        let _ = NumeralFormatter::preset(Preset::Base(16)).format(&s, decimals);
    }

    // Parsing is total and always yields a canonical numeric string.
    #[test]
    fn prop_unformat_output_is_canonical(s in ".*", base in 0u32..40) {
        let out = unformat(&s, ".", base);
        prop_assert!(!out.is_empty());
        prop_assert!(out.chars().all(|c| c.is_ascii_digit() || c == '.'));
        prop_assert!(out.matches('.').count() <= 1);
    }

    // Fractional output always carries exactly the requested number of digits.
    #[test]
    fn prop_fraction_width_is_exact(n in 0u32..1_000_000, frac in 1u32..1_000_000, decimals in 1usize..8) {
        let formatter = NumeralFormatter::preset(Preset::NoSep1);
        let text = formatter.format(format!("{n}.{frac}"), decimals);
        let (_, rendered) = text.split_once('.').expect("fraction expected");
        prop_assert_eq!(rendered.len(), decimals);
    }
}
