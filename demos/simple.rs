//! Basic conversion in both directions.
//!
//! Run with: cargo run --example simple

use kansuji::{kanji_to_number, number_to_kanji};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let numbers = [0u64, 10, 2024, 10_000, 123_456_789];

    for n in numbers {
        let kanji = number_to_kanji(n)?;
        let back = kanji_to_number(&kanji)?;
        println!("{:>12} → {} → {}", n, kanji, back);
        assert_eq!(back.as_u64(), Some(n));
    }
    println!("✓ Round-trip successful");

    // Malformed numerals are rejected with a reason
    for bad in ["一十", "三十百", "一万一億", "億"] {
        if let Err(err) = kanji_to_number(bad) {
            println!("{} rejected: {}", bad, err);
        }
    }

    Ok(())
}
