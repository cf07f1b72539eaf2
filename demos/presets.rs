//! One value rendered through a spread of presets.
//!
//! Run with: cargo run --example presets

use numera::{NumeralFormatter, Preset};

fn main() {
    let value = "1234567.89";
    let presets = [
        Preset::Latin1,
        Preset::Latin3,
        Preset::Arabic2,
        Preset::Arabic4,
        Preset::Bengali,
        Preset::India2,
        Preset::Thai,
        Preset::Khmer,
        Preset::ChineseSimplified,
        Preset::ChineseTraditional,
        Preset::Japanese,
        Preset::Geez,
        Preset::Roman,
        Preset::Hebrew,
        Preset::Armenian,
        Preset::Mayan,
        Preset::Kaktovik,
        Preset::Fullwidth,
    ];

    println!("{value} across presets:\n");
    for preset in presets {
        let formatter = NumeralFormatter::preset(preset);
        println!("{:>30}  {}", preset.name(), formatter.format(value, 2));
    }
}
