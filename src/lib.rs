//! # kansuji
//!
//! Conversion between integers and Japanese kanji numerals (漢数字), in both
//! directions, with arbitrary-precision support up to 無量大数 (10^68).
//!
//! ## Key Features
//!
//! - **Both directions**: [`number_to_kanji`] and [`kanji_to_number`]
//! - **Registers**: standard (一二三), financial daiji (壱弐参) and the full
//!   archaic daiji set (壱弐参肆伍…萬) used to prevent forgery on legal documents
//! - **Big numbers**: every big unit from 万 to 無量大数, including the
//!   multi-character ones, through `num-bigint`
//! - **Strict parsing**: malformed numerals (`一一`, `一十`, `三十百`, `一万一億`, …)
//!   are errors, never silently coerced
//! - **Serde**: store integer fields as kanji with [`serde_kanji`]
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! kansuji = "0.1"
//! ```
//!
//! ### Formatting
//!
//! ```rust
//! use kansuji::{number_to_kanji, number_to_kanji_with_options, FormatOptions, Register};
//!
//! assert_eq!(number_to_kanji(123_456_789).unwrap(), "一億二千三百四十五万六千七百八十九");
//! assert_eq!(number_to_kanji(10).unwrap(), "十");
//! assert_eq!(number_to_kanji(0).unwrap(), "零");
//!
//! let options = FormatOptions::new().with_register(Register::Financial);
//! assert_eq!(
//!     number_to_kanji_with_options(123_456_789, &options).unwrap(),
//!     "壱億弐千参百四拾五万六千七百八拾九"
//! );
//! ```
//!
//! ### Parsing
//!
//! ```rust
//! use kansuji::{kanji_to_number, kanji_to_number_with_options, KanjiNumber, ParseOptions, ReturnKind};
//!
//! let n = kanji_to_number("一億二千三百四十五万六千七百八十九").unwrap();
//! assert_eq!(n, KanjiNumber::Integer(123_456_789));
//!
//! // Values beyond u64 need a big integer
//! let options = ParseOptions::new().with_return_kind(ReturnKind::Auto);
//! let n = kanji_to_number_with_options("一那由他", &options).unwrap();
//! assert!(n.is_bigint());
//!
//! assert!(kanji_to_number("一十").is_err());
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: O(n) single pass over the characters
//! - **Formatting**: O(d) over the decimal digits
//! - **Tables**: built once on first use, shared read-only by every call
//!
//! ## Logging
//!
//! Parsing and formatting emit `tracing` spans and events at `debug` and
//! `trace` level. Nothing is printed unless the application installs a
//! subscriber.

pub mod error;
pub mod format;
pub mod options;
pub mod parse;
pub mod serde_kanji;
pub mod tables;
pub mod value;

pub use error::{Error, Result};
pub use format::Formatter;
pub use options::{FormatOptions, ParseOptions, Register, ReturnKind, Style, ZeroGlyph};
pub use parse::Parser;
pub use value::{KanjiNumber, Number};

use num_bigint::BigUint;

/// Formats a number as grouped, standard-register kanji.
///
/// The sign is dropped and floats are truncated toward zero.
///
/// # Examples
///
/// ```rust
/// use kansuji::number_to_kanji;
///
/// assert_eq!(number_to_kanji(2024).unwrap(), "二千二十四");
/// assert_eq!(number_to_kanji(-100).unwrap(), "百");
/// assert_eq!(number_to_kanji(450.51).unwrap(), "四百五十");
/// ```
///
/// # Errors
///
/// Returns an error for non-finite floats, floats beyond 2^53 − 1, and
/// magnitudes past 無量大数.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn number_to_kanji<N>(value: N) -> Result<String>
where
    N: Into<Number>,
{
    number_to_kanji_with_options(value, &FormatOptions::default())
}

/// Formats a number as kanji with custom options.
///
/// # Examples
///
/// ```rust
/// use kansuji::{number_to_kanji_with_options, FormatOptions, Register, Style, ZeroGlyph};
///
/// let options = FormatOptions::new()
///     .with_register(Register::Archaic)
///     .with_zero_glyph(ZeroGlyph::Circle);
/// assert_eq!(number_to_kanji_with_options(14_000, &options).unwrap(), "壱萬肆阡");
/// assert_eq!(number_to_kanji_with_options(0, &options).unwrap(), "〇");
///
/// let options = FormatOptions::new().with_style(Style::Plain);
/// assert_eq!(number_to_kanji_with_options(1964, &options).unwrap(), "一九六四");
/// ```
///
/// # Errors
///
/// See [`Formatter::write_number`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn number_to_kanji_with_options<N>(value: N, options: &FormatOptions) -> Result<String>
where
    N: Into<Number>,
{
    format::format(&value.into(), options)
}

/// Parses a kanji numeral into a `u64`-backed [`KanjiNumber`].
///
/// # Examples
///
/// ```rust
/// use kansuji::{kanji_to_number, KanjiNumber};
///
/// assert_eq!(kanji_to_number("一万").unwrap(), KanjiNumber::Integer(10_000));
/// assert_eq!(kanji_to_number("〇").unwrap(), KanjiNumber::Integer(0));
/// ```
///
/// # Errors
///
/// Returns an error for malformed numerals and for values above `u64::MAX`;
/// use [`kanji_to_number_with_options`] with [`ReturnKind::BigInt`] or
/// [`ReturnKind::Auto`] for those.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn kanji_to_number(text: &str) -> Result<KanjiNumber> {
    kanji_to_number_with_options(text, &ParseOptions::default())
}

/// Parses a kanji numeral, returning the kind of number `options` asks for.
///
/// # Examples
///
/// ```rust
/// use kansuji::{kanji_to_number_with_options, ParseOptions, ReturnKind};
///
/// let options = ParseOptions::new().with_return_kind(ReturnKind::Auto);
/// assert!(kanji_to_number_with_options("九百二十二京", &options).unwrap().is_integer());
/// assert!(kanji_to_number_with_options("二千京", &options).unwrap().is_bigint());
/// ```
///
/// # Errors
///
/// Returns an error if the text is not a valid kanji numeral, or if
/// [`ReturnKind::Integer`] was requested and the value exceeds `u64::MAX`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn kanji_to_number_with_options(text: &str, options: &ParseOptions) -> Result<KanjiNumber> {
    let value = parse::parse(text)?;
    KanjiNumber::narrow(value, options.return_kind)
}

/// Parses a kanji numeral straight into a `u64`.
///
/// # Errors
///
/// Same as [`kanji_to_number`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn kanji_to_u64(text: &str) -> Result<u64> {
    u64::try_from(kanji_to_number(text)?)
}

/// Parses a kanji numeral straight into a `BigUint`.
///
/// # Examples
///
/// ```rust
/// use kansuji::kanji_to_biguint;
/// use num_bigint::BigUint;
///
/// assert_eq!(kanji_to_biguint("一無量大数").unwrap(), BigUint::from(10u32).pow(68));
/// ```
///
/// # Errors
///
/// Returns an error if the text is not a valid kanji numeral.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn kanji_to_biguint(text: &str) -> Result<BigUint> {
    parse::parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_then_parse() {
        for n in [0u64, 1, 10, 11, 101, 1000, 10_000, 123_456_789, u64::MAX] {
            let kanji = number_to_kanji(n).unwrap();
            assert_eq!(kanji_to_u64(&kanji).unwrap(), n, "{}", kanji);
        }
    }

    #[test]
    fn test_default_return_kind_is_integer() {
        assert!(kanji_to_number("一万").unwrap().is_integer());
    }

    #[test]
    fn test_integer_return_kind_overflow() {
        let err = kanji_to_number("二千京").unwrap_err();
        assert!(matches!(err, Error::Precision { .. }));
    }

    #[test]
    fn test_biguint_conveniences() {
        let big = kanji_to_biguint("一垓").unwrap();
        assert_eq!(big, BigUint::from(10u32).pow(20));
        assert_eq!(number_to_kanji(&big).unwrap(), "一垓");
    }

    #[test]
    fn test_custom_options() {
        let options = FormatOptions::financial().with_zero_glyph(ZeroGlyph::Circle);
        let kanji = number_to_kanji_with_options(12, &options).unwrap();
        assert_eq!(kanji, "拾弐");
        assert_eq!(kanji_to_u64(&kanji).unwrap(), 12);
    }
}
