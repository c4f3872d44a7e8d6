//! Kanji numeral parsing.
//!
//! This module provides the [`Parser`] that reads a kanji numeral into an
//! arbitrary-precision integer.
//!
//! ## Overview
//!
//! Parsing is a single left-to-right pass with no backtracking. The parser
//! keeps a running total for finished myriad groups, the value of the group
//! in progress, and the last digit, small unit and big unit it has seen.
//!
//! - **Register-agnostic**: standard, financial and archaic glyphs may be mixed
//! - **Compound big units**: 恒河沙, 阿僧祇, 那由他, 不可思議, 無量大数 are
//!   matched as a whole
//! - **Strict grammar**: every malformed input is an error, nothing is coerced
//!
//! ## Grammar
//!
//! ```text
//! number  := zero | group (big-unit group?)*
//! group   := (digit? small-unit)* digit?        small units strictly descending
//! big-unit must strictly descend across the whole number
//! ```
//!
//! `一` may stand before `千` but not before `十` or `百`.
//!
//! ## Usage
//!
//! ```rust
//! use kansuji::parse::parse;
//! use num_bigint::BigUint;
//!
//! let value = parse("一億二千三百四十五万六千七百八十九").unwrap();
//! assert_eq!(value, BigUint::from(123_456_789u32));
//!
//! assert!(parse("一万一億").is_err());
//! ```

use crate::tables::{self, Symbol};
use crate::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::{debug, debug_span, trace};

/// Parses a kanji numeral into a `BigUint`.
///
/// # Errors
///
/// Returns an error if the input is empty, contains a character that is not
/// a numeral glyph, or breaks the numeral grammar.
pub fn parse(input: &str) -> Result<BigUint> {
    Parser::new(input).parse()
}

/// The kanji numeral parser.
///
/// A parser is consumed by [`Parser::parse`]; create one per input.
pub struct Parser<'a> {
    input: &'a str,
    position: usize, // byte offset of the next unread character
    index: usize,    // character offset of the next unread character
    result: BigUint,
    group: BigUint,
    last_digit: Option<u8>,
    last_small_unit: Option<u32>,
    last_big_unit: Option<u32>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser {
            input,
            position: 0,
            index: 0,
            result: BigUint::zero(),
            group: BigUint::zero(),
            last_digit: None,
            last_small_unit: None,
            last_big_unit: None,
        }
    }

    /// Runs the parser to completion.
    ///
    /// # Errors
    ///
    /// See [`parse`].
    pub fn parse(self) -> Result<BigUint> {
        let _span = debug_span!("parse_kanji", input = self.input).entered();
        self.run()
            .inspect_err(|err| debug!(%err, "rejected kanji numeral"))
    }

    fn run(mut self) -> Result<BigUint> {
        if self.input.is_empty() {
            return Err(Error::EmptyInput);
        }
        if tables::is_zero_glyph(self.input) {
            return Ok(BigUint::zero());
        }

        while let Some((index, glyph, symbol)) = self.next_glyph()? {
            trace!(index, glyph, ?symbol);
            match symbol {
                Symbol::Digit(digit) => self.push_digit(index, digit)?,
                Symbol::SmallUnit(exp) => self.push_small_unit(index, glyph, exp)?,
                Symbol::BigUnit(exp) => self.push_big_unit(index, glyph, exp)?,
            }
        }

        Ok(self.finish())
    }

    /// Reads the next complete glyph, accumulating characters while they
    /// spell the beginning of a compound big unit.
    fn next_glyph(&mut self) -> Result<Option<(usize, &'a str, Symbol)>> {
        let input = self.input;
        let rest = &input[self.position..];
        if rest.is_empty() {
            return Ok(None);
        }

        let start = self.index;
        let mut end = 0;
        for ch in rest.chars() {
            end += ch.len_utf8();
            self.index += 1;
            let candidate = &rest[..end];

            if let Some(symbol) = tables::lookup(candidate) {
                self.position += end;
                return Ok(Some((start, candidate, symbol)));
            }
            if !tables::is_compound_prefix(candidate) {
                return Err(Error::unknown_glyph(start, candidate));
            }
        }

        Err(Error::incomplete_compound(start, rest))
    }

    fn push_digit(&mut self, index: usize, digit: u8) -> Result<()> {
        if self.last_digit.is_some() {
            return Err(Error::ConsecutiveDigits { index });
        }
        self.last_digit = Some(digit);
        Ok(())
    }

    fn push_small_unit(&mut self, index: usize, glyph: &str, exp: u32) -> Result<()> {
        // 一千 is accepted, 一十 and 一百 are not
        if self.last_digit == Some(1) && exp < 3 {
            return Err(Error::invalid_digit_unit_pair(index, glyph));
        }
        if matches!(self.last_small_unit, Some(prev) if exp >= prev) {
            return Err(Error::unit_order(index, glyph));
        }

        let multiplier = self.last_digit.take().map_or(1, u32::from);
        self.group += tables::power_of_ten(exp) * multiplier;
        self.last_small_unit = Some(exp);
        Ok(())
    }

    fn push_big_unit(&mut self, index: usize, glyph: &str, exp: u32) -> Result<()> {
        if let Some(digit) = self.last_digit.take() {
            self.group += u32::from(digit);
        }
        if self.group.is_zero() {
            return Err(Error::missing_value(index, glyph));
        }
        if matches!(self.last_big_unit, Some(prev) if exp >= prev) {
            return Err(Error::unit_order(index, glyph));
        }

        let group = std::mem::take(&mut self.group);
        self.result += group * tables::power_of_ten(exp);
        self.last_big_unit = Some(exp);
        self.last_small_unit = None;
        Ok(())
    }

    fn finish(mut self) -> BigUint {
        if let Some(digit) = self.last_digit.take() {
            self.group += u32::from(digit);
        }
        self.result + self.group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(input: &str) -> BigUint {
        parse(input).unwrap()
    }

    #[test]
    fn test_single_glyphs() {
        assert_eq!(value("一"), BigUint::from(1u32));
        assert_eq!(value("九"), BigUint::from(9u32));
        assert_eq!(value("十"), BigUint::from(10u32));
        assert_eq!(value("百"), BigUint::from(100u32));
        assert_eq!(value("千"), BigUint::from(1000u32));
    }

    #[test]
    fn test_zero_glyphs() {
        assert_eq!(value("零"), BigUint::zero());
        assert_eq!(value("〇"), BigUint::zero());
    }

    #[test]
    fn test_zero_glyph_inside_number_is_unknown() {
        let err = parse("二〇二四").unwrap_err();
        assert_eq!(err, Error::unknown_glyph(1, "〇"));

        let err = parse("零零").unwrap_err();
        assert_eq!(err, Error::unknown_glyph(0, "零"));
    }

    #[test]
    fn test_trailing_digit() {
        assert_eq!(value("五千六"), BigUint::from(5006u32));
        assert_eq!(value("二十一"), BigUint::from(21u32));
        assert_eq!(value("一万一"), BigUint::from(10_001u32));
    }

    #[test]
    fn test_ichi_before_sen_is_allowed() {
        assert_eq!(value("一千"), BigUint::from(1000u32));
        assert_eq!(value("一千万"), BigUint::from(10_000_000u32));
    }

    #[test]
    fn test_digit_folds_into_big_unit() {
        assert_eq!(value("三億"), BigUint::from(300_000_000u32));
        assert_eq!(value("十二万"), BigUint::from(120_000u32));
    }

    #[test]
    fn test_small_units_reset_after_big_unit() {
        assert_eq!(value("千万千"), BigUint::from(10_001_000u32));
        assert_eq!(value("十億十万十"), BigUint::from(1_000_100_010u32));
    }

    #[test]
    fn test_mixed_registers() {
        assert_eq!(value("壱萬弐阡参佰肆拾伍"), BigUint::from(12_345u32));
        assert_eq!(value("弐仟"), BigUint::from(2000u32));
    }

    #[test]
    fn test_compound_big_units() {
        assert_eq!(&value("一恒河沙"), tables::power_of_ten(52));
        assert_eq!(&value("一那由他"), tables::power_of_ten(60));
        assert_eq!(&value("一那由多"), tables::power_of_ten(60));
        assert_eq!(
            value("二不可思議三"),
            tables::power_of_ten(64) * 2u32 + 3u32
        );
    }

    #[test]
    fn test_non_bmp_glyph() {
        assert_eq!(&value("一𥝱"), tables::power_of_ten(24));
        assert_eq!(&value("一秭"), tables::power_of_ten(24));
        // 𥝱 is one character even though it takes four bytes
        assert_eq!(parse("𥝱𥝱").unwrap_err().index(), Some(0));
        assert_eq!(parse("一𥝱あ").unwrap_err(), Error::unknown_glyph(2, "あ"));
    }

    #[test]
    fn test_consecutive_digits() {
        assert_eq!(parse("一一").unwrap_err(), Error::ConsecutiveDigits { index: 1 });
        assert_eq!(parse("十二三").unwrap_err(), Error::ConsecutiveDigits { index: 2 });
    }

    #[test]
    fn test_invalid_digit_unit_pair() {
        assert_eq!(parse("一十").unwrap_err(), Error::invalid_digit_unit_pair(1, "十"));
        assert_eq!(parse("壱拾").unwrap_err(), Error::invalid_digit_unit_pair(1, "拾"));
        assert_eq!(parse("二千一百").unwrap_err(), Error::invalid_digit_unit_pair(3, "百"));
    }

    #[test]
    fn test_small_unit_order() {
        assert_eq!(parse("三十百").unwrap_err(), Error::unit_order(2, "百"));
        assert_eq!(parse("十十").unwrap_err(), Error::unit_order(1, "十"));
        assert_eq!(parse("百拾拾").unwrap_err(), Error::unit_order(2, "拾"));
    }

    #[test]
    fn test_big_unit_order() {
        assert_eq!(parse("一万一億").unwrap_err(), Error::unit_order(3, "億"));
        assert_eq!(parse("一万一万").unwrap_err(), Error::unit_order(3, "万"));
        assert_eq!(parse("一万一萬").unwrap_err(), Error::unit_order(3, "萬"));
    }

    #[test]
    fn test_missing_value_before_big_unit() {
        assert_eq!(parse("億").unwrap_err(), Error::missing_value(0, "億"));
        assert_eq!(parse("万五千六").unwrap_err(), Error::missing_value(0, "万"));
        assert_eq!(parse("一億万").unwrap_err(), Error::missing_value(2, "万"));
        assert_eq!(parse("無量大数").unwrap_err(), Error::missing_value(0, "無量大数"));
    }

    #[test]
    fn test_incomplete_compound() {
        assert_eq!(
            parse("一無量大").unwrap_err(),
            Error::incomplete_compound(1, "無量大")
        );
        assert_eq!(parse("五那由").unwrap_err(), Error::incomplete_compound(1, "那由"));
    }

    #[test]
    fn test_broken_compound_is_unknown() {
        assert_eq!(parse("一恒河億").unwrap_err(), Error::unknown_glyph(1, "恒河億"));
        assert_eq!(parse("一河沙").unwrap_err(), Error::unknown_glyph(1, "河"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse("").unwrap_err(), Error::EmptyInput);
    }
}
