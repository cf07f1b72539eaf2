//! Formatting and parsing back.
//!
//! Run with: cargo run --example round_trip

use numera::{NumeralFormatter, Preset};

fn main() {
    let cases = [
        (Preset::Latin1, "1234567.89"),
        (Preset::Arabic2, "1234567.89"),
        (Preset::India2, "1234567"),
        (Preset::ChineseSimplified, "1234"),
        (Preset::Base(16), "3735928559"),
        (Preset::Kaktovik, "48923"),
    ];

    for (preset, value) in cases {
        let formatter = NumeralFormatter::preset(preset);
        let formatted = formatter.format(value, 2);
        let recovered = formatter.unformat(&formatted);
        println!(
            "{:>20}: {value} -> {formatted} -> {recovered}",
            preset.name()
        );
    }

    // The inversion is heuristic: additive letter systems do not come back.
    let roman = NumeralFormatter::preset(Preset::Roman);
    let formatted = roman.format(1994, 0);
    println!(
        "{:>20}: 1994 -> {formatted} -> {} (not recoverable)",
        Preset::Roman.name(),
        roman.unformat(&formatted)
    );
}
