use numera::{format_with, NumeralFormatter, NumeralOptions, NumeralSystem, Preset};

#[test]
fn test_western_identity_and_grouping() {
    let latin = NumeralFormatter::default();
    assert_eq!(latin.format("1234", 0), "1,234");
    assert_eq!(latin.format(0, 0), "0");
    assert_eq!(latin.format(999, 0), "999");
    assert_eq!(latin.format(1000, 0), "1,000");
    assert_eq!(latin.format(1_000_000_000u64, 0), "1,000,000,000");
}

#[test]
fn test_latin_separator_variants() {
    assert_eq!(
        format_with(Preset::Latin2, 1234567, 0),
        "1\u{202F}234\u{202F}567"
    );
    assert_eq!(format_with(Preset::Latin3, "1234567.5", 1), "1.234.567,5");
    assert_eq!(format_with(Preset::Latin5, "3.14", 2), "3\u{B7}14");
    assert_eq!(format_with(Preset::NoSep1, 1234567, 0), "1234567");
    assert_eq!(format_with(Preset::NoSep2, "8.25", 2), "8,25");
}

#[test]
fn test_digit_substitution_scripts() {
    assert_eq!(format_with(Preset::Arabic1, 1234567, 0), "١٢٣٤٥٦٧");
    assert_eq!(format_with(Preset::Arabic3, 1234567, 0), "۱٬۲۳۴٬۵۶۷");
    assert_eq!(format_with(Preset::Bengali, 1234567, 0), "১২,৩৪,৫৬৭");
    assert_eq!(format_with(Preset::India2, 1234567, 0), "१२,३४,५६७");
    assert_eq!(format_with(Preset::Burmese, 1234567, 0), "၁၂၃၄၅၆၇");
    assert_eq!(format_with(Preset::Thai, 1234567, 0), "๑,๒๓๔,๕๖๗");
    assert_eq!(format_with(Preset::Thai2, 1234567, 0), "๑๒๓๔๕๖๗");
    assert_eq!(format_with(Preset::Fullwidth, 2024, 0), "２０２４");
}

#[test]
fn test_khmer_swaps_separator_roles() {
    assert_eq!(
        format_with(Preset::Khmer, "1234567.89", 2),
        "១.២៣៤.៥៦៧,៨៩"
    );
}

#[test]
fn test_systems_without_presets_work_through_options() {
    let ol_chiki = NumeralFormatter::new(
        NumeralOptions::new()
            .with_system(NumeralSystem::OlChiki)
            .with_group_separator(""),
    );
    assert_eq!(ol_chiki.format(107, 0), "᱑᱐᱗");
}

#[test]
fn test_indian_grouping() {
    assert_eq!(format_with(Preset::India, 1234567, 0), "12,34,567");
    assert_eq!(format_with(Preset::India, 100000, 0), "1,00,000");
    assert_eq!(format_with(Preset::Arabic4, 1234567, 0), "۱۲٬۳۴٬۵۶۷");
}

#[test]
fn test_roman_numerals() {
    for (value, expected) in [
        (1, "I"),
        (4, "IV"),
        (9, "IX"),
        (14, "XIV"),
        (40, "XL"),
        (90, "XC"),
        (400, "CD"),
        (944, "CMXLIV"),
        (1994, "MCMXCIV"),
        (2024, "MMXXIV"),
        (3999, "MMMCMXCIX"),
    ] {
        assert_eq!(format_with(Preset::Roman, value, 0), expected);
    }
}

#[test]
fn test_chinese_and_japanese() {
    assert_eq!(
        format_with(Preset::ChineseSimplified, 1234, 0),
        "一千二百三十四"
    );
    assert_eq!(
        format_with(Preset::ChineseTraditional, 56789, 0),
        "五萬六千七百八十九"
    );
    assert_eq!(
        format_with(Preset::ChineseTraditionalFinancial, 21, 0),
        "貳拾壹"
    );
    assert_eq!(format_with(Preset::Japanese, 2024, 0), "二千二十四");
    assert_eq!(format_with(Preset::Japanese, 11, 0), "十一");
}

#[test]
fn test_geez() {
    assert_eq!(format_with(Preset::Geez, 2015, 0), "፳፻፲፭");
    assert_eq!(format_with(Preset::Geez, 123, 0), "፻፳፫");
    assert_eq!(format_with(Preset::Geez, 9, 0), "፱");
}

#[test]
fn test_hebrew_and_armenian() {
    assert_eq!(format_with(Preset::Hebrew, 26, 0), "כו");
    assert_eq!(format_with(Preset::Hebrew, 15, 0), "ט״ו");
    assert_eq!(format_with(Preset::Hebrew, 16, 0), "ט״ז");
    assert_eq!(format_with(Preset::Armenian, 1051, 0), "ՌԾԱ");
    assert_eq!(format_with(Preset::Armenian, 2025, 0), "ՍԻԵ");
}

#[test]
fn test_base_twenty_glyph_systems() {
    assert_eq!(format_with(Preset::Mayan, 8000, 0), "𝋡𝋠𝋠𝋠");
    assert_eq!(format_with(Preset::Kaktovik, 2024, 0), "𝋅𝋁𝋄");
}

#[test]
fn test_positional_bases() {
    assert_eq!(format_with(Preset::Base(2), 10, 0), "1010");
    assert_eq!(format_with(Preset::Base(8), 511, 0), "777");
    assert_eq!(format_with(Preset::Base(16), 255, 0), "ff");
    assert_eq!(format_with(Preset::Base(36), 1295, 0), "zz");
}

#[test]
fn test_dozenal_transcriptions() {
    assert_eq!(format_with(Preset::Sdn(NumeralSystem::Dwiggins), 142, 0), "EX");
    assert_eq!(format_with(Preset::Sdn(NumeralSystem::Pitman), 142, 0), "↋↊");
    assert_eq!(
        format_with(Preset::Sdn(NumeralSystem::Pitman), "12.5", 1),
        "10;6"
    );
}

#[test]
fn test_fractions_follow_the_configured_base() {
    let hex = NumeralFormatter::preset(Preset::Base(16));
    // 0.1 decimal is 0.1999... in hex.
    assert_eq!(hex.format("0.1", 4), "0.1999");
    let binary = NumeralFormatter::preset(Preset::Base(2));
    assert_eq!(binary.format("0.5", 4), "0.1000");
}

#[test]
fn test_failure_degrades_to_empty_or_identity() {
    assert_eq!(format_with(Preset::Base(1), 5, 0), "");
    assert_eq!(format_with(Preset::Base(37), 5, 0), "");
    // Unparseable numbers collapse to zero rather than failing.
    assert_eq!(numera::format("garbage", 0), "0");
}

#[test]
fn test_formatter_is_reusable_and_cloneable() {
    let formatter = NumeralFormatter::preset(Preset::ChineseSimplified);
    let clone = formatter.clone();
    assert_eq!(formatter.format(77, 0), clone.format(77, 0));
    assert_eq!(formatter.options().base, 10);
}
