//! Registers, styles and zero glyphs.
//!
//! Run with: cargo run --example registers

use kansuji::{number_to_kanji_with_options, FormatOptions, Register, Style, ZeroGlyph};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let amount = 123_456_789u64;

    // Daiji registers keep amounts on contracts and receipts from being altered
    for register in [Register::Standard, Register::Financial, Register::Archaic] {
        let options = FormatOptions::new().with_register(register);
        let kanji = number_to_kanji_with_options(amount, &options)?;
        println!("{:<10} {}", format!("{:?}", register), kanji);
    }

    // Plain style reads digits one by one, as in years
    let year = FormatOptions::new()
        .with_style(Style::Plain)
        .with_zero_glyph(ZeroGlyph::Circle);
    println!("\nYear: {}年", number_to_kanji_with_options(2026, &year)?);

    // Zero glyph choice
    let formal = number_to_kanji_with_options(0, &FormatOptions::new())?;
    let circle = FormatOptions::new().with_zero_glyph(ZeroGlyph::Circle);
    let circle = number_to_kanji_with_options(0, &circle)?;
    println!("Zero: {} / {}", formal, circle);

    Ok(())
}
