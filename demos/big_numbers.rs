//! Arbitrary-precision values up to 無量大数.
//!
//! Run with: cargo run --example big_numbers

use kansuji::{
    kanji_to_number_with_options, number_to_kanji, number_to_kanji_with_options, FormatOptions,
    ParseOptions, ReturnKind,
};
use num_bigint::BigUint;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let auto = ParseOptions::new().with_return_kind(ReturnKind::Auto);

    // Fits in u64, comes back as an integer
    let kanji = number_to_kanji(u64::MAX)?;
    println!("u64::MAX = {}", kanji);
    println!("  parsed: {:?}", kanji_to_number_with_options(&kanji, &auto)?);

    // Past u64, comes back as a big integer
    let huge = BigUint::from(10u32).pow(68) * 9u32 + BigUint::from(10u32).pow(60);
    let kanji = number_to_kanji(&huge)?;
    println!("\n{}", kanji);
    let back = kanji_to_number_with_options(&kanji, &auto)?;
    assert_eq!(back.to_biguint(), huge);
    println!("  parsed: {}", back);

    // Floats past 2^53 are refused unless precision loss is accepted
    let float = 2f64.powi(60);
    match number_to_kanji(float) {
        Ok(kanji) => println!("\n{}", kanji),
        Err(err) => println!("\n{}", err),
    }
    let lossy = FormatOptions::new().with_lossy_overflow(true);
    println!("lossy: {}", number_to_kanji_with_options(float, &lossy)?);

    Ok(())
}
