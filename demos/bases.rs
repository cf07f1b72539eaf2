//! Positional bases and dozenal transcription.
//!
//! Run with: cargo run --example bases

use numera::{NumeralFormatter, NumeralSystem, Preset};

fn main() {
    let value = 2024u32;

    println!("{value} in positional bases:\n");
    for base in [2u32, 8, 12, 16, 20, 36] {
        let formatter = NumeralFormatter::preset(Preset::Base(base));
        println!("  base {base:>2}  {}", formatter.format(value, 0));
    }

    println!("\nDozenal transcriptions of 131:");
    for system in [NumeralSystem::Dwiggins, NumeralSystem::Pitman] {
        let formatter = NumeralFormatter::preset(Preset::Sdn(system));
        println!("  {system:>8}  {}", formatter.format(131, 0));
    }

    println!("\nBase-20 glyph systems:");
    for preset in [Preset::Mayan, Preset::Kaktovik] {
        let formatter = NumeralFormatter::preset(preset);
        println!("  {:>8}  {}", preset.name(), formatter.format(value, 0));
    }
}
