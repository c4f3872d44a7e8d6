//! Kanji numeral formatting.
//!
//! This module provides the [`Formatter`] that writes a [`Number`] as kanji.
//!
//! ## Overview
//!
//! The magnitude is turned into decimal digits (sign dropped, fraction
//! truncated), then rendered in one of two styles:
//!
//! - **Grouped** (default): digits split into myriad groups of four from the
//!   right. Inside a group zeros are skipped and `一` is elided before a unit
//!   (`十`, not `一十`). Each non-empty group is followed by its big unit; an
//!   all-zero group writes nothing at all.
//! - **Plain**: one glyph per digit, zeros included, no units.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use kansuji::{number_to_kanji, number_to_kanji_with_options, FormatOptions, Style, ZeroGlyph};
//!
//! assert_eq!(number_to_kanji(100_010).unwrap(), "十万十");
//!
//! let options = FormatOptions::new()
//!     .with_style(Style::Plain)
//!     .with_zero_glyph(ZeroGlyph::Circle);
//! assert_eq!(number_to_kanji_with_options(2024, &options).unwrap(), "二〇二四");
//! ```
//!
//! ## Direct Formatter Usage
//!
//! ```rust
//! use kansuji::{FormatOptions, Formatter, Number};
//!
//! let options = FormatOptions::financial();
//! let mut formatter = Formatter::new(&options);
//! formatter.write_number(&Number::from(30)).unwrap();
//! assert_eq!(formatter.into_inner(), "参拾");
//! ```

use crate::options::{FormatOptions, Style};
use crate::tables::MAX_DIGITS;
use crate::{Error, Number, Result};
use tracing::{debug, debug_span, trace};

/// Formats `value` as kanji.
///
/// # Errors
///
/// See [`Formatter::write_number`].
pub fn format(value: &Number, options: &FormatOptions) -> Result<String> {
    let mut formatter = Formatter::new(options);
    formatter.write_number(value)?;
    Ok(formatter.into_inner())
}

/// The kanji numeral formatter.
pub struct Formatter<'a> {
    output: String,
    options: &'a FormatOptions,
}

impl<'a> Formatter<'a> {
    pub fn new(options: &'a FormatOptions) -> Self {
        Formatter {
            // most numerals fit in a dozen glyphs of three bytes each
            output: String::with_capacity(48),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends the kanji rendering of `value` to the output.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidType`] for NaN or infinite floats
    /// - [`Error::Precision`] for floats beyond 2^53 − 1 without lossy overflow
    /// - [`Error::Overflow`] when grouped output would need a unit past 無量大数
    pub fn write_number(&mut self, value: &Number) -> Result<()> {
        let _span = debug_span!(
            "format_kanji",
            %value,
            register = ?self.options.register,
            style = ?self.options.style
        )
        .entered();

        let digits = value
            .magnitude_digits(self.options.allow_lossy_overflow)
            .inspect_err(|err| debug!(%err, "rejected number"))?;
        self.write_digits(&digits)
    }

    /// Appends the kanji rendering of an unsigned decimal digit string.
    ///
    /// `digits` must be non-empty ASCII digits without leading zeros, as
    /// produced by [`Number::magnitude_digits`].
    fn write_digits(&mut self, digits: &str) -> Result<()> {
        if digits == "0" {
            self.output.push_str(self.options.zero_glyph.as_str());
            return Ok(());
        }

        match self.options.style {
            Style::Grouped => self.write_grouped(digits),
            Style::Plain => {
                self.write_plain(digits);
                Ok(())
            }
        }
    }

    fn write_grouped(&mut self, digits: &str) -> Result<()> {
        if digits.len() > MAX_DIGITS {
            return Err(Error::Overflow {
                digits: digits.len(),
            });
        }

        let register = self.options.register;
        let padding = (4 - digits.len() % 4) % 4;
        let padded = format!("{}{}", "0".repeat(padding), digits);
        let group_count = padded.len() / 4;

        for (i, chunk) in padded.as_bytes().chunks(4).enumerate() {
            let group = group_count - 1 - i;
            if self.write_group(chunk) {
                self.output.push_str(register.big_unit_glyph(group));
            } else {
                trace!(group, "skipped empty group");
            }
        }
        Ok(())
    }

    /// Writes one four-digit group, most significant digit first.
    /// Returns `false` if every digit was zero and nothing was written.
    fn write_group(&mut self, chunk: &[u8]) -> bool {
        let digit_glyphs = self.options.register.digit_glyphs();
        let unit_glyphs = self.options.register.small_unit_glyphs();
        let mut wrote = false;

        for (i, byte) in chunk.iter().enumerate() {
            let digit = usize::from(byte - b'0');
            if digit == 0 {
                continue;
            }
            let pos = chunk.len() - 1 - i;
            if digit != 1 || pos == 0 {
                self.output.push_str(digit_glyphs[digit]);
            }
            self.output.push_str(unit_glyphs[pos]);
            wrote = true;
        }
        wrote
    }

    fn write_plain(&mut self, digits: &str) {
        let digit_glyphs = self.options.register.digit_glyphs();
        let zero = self.options.zero_glyph.as_str();

        for byte in digits.bytes() {
            match usize::from(byte - b'0') {
                0 => self.output.push_str(zero),
                digit => self.output.push_str(digit_glyphs[digit]),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Register, ZeroGlyph};
    use num_bigint::BigUint;

    fn grouped(n: impl Into<Number>) -> String {
        format(&n.into(), &FormatOptions::default()).unwrap()
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(grouped(1), "一");
        assert_eq!(grouped(9), "九");
        assert_eq!(grouped(10), "十");
        assert_eq!(grouped(11), "十一");
        assert_eq!(grouped(20), "二十");
        assert_eq!(grouped(100), "百");
        assert_eq!(grouped(101), "百一");
        assert_eq!(grouped(1000), "千");
        assert_eq!(grouped(1001), "千一");
        assert_eq!(grouped(9999), "九千九百九十九");
    }

    #[test]
    fn test_zero() {
        assert_eq!(grouped(0), "零");
        let options = FormatOptions::new().with_zero_glyph(ZeroGlyph::Circle);
        assert_eq!(format(&Number::from(0), &options).unwrap(), "〇");
    }

    #[test]
    fn test_empty_groups_are_skipped() {
        assert_eq!(grouped(10_000), "一万");
        assert_eq!(grouped(100_000_000), "一億");
        assert_eq!(grouped(100_000_001), "一億一");
        assert_eq!(grouped(1_000_010_000u64), "十億一万");
    }

    #[test]
    fn test_elision_applies_per_group() {
        assert_eq!(grouped(11_110_000), "千百十一万");
        assert_eq!(grouped(10_000_000), "千万");
    }

    #[test]
    fn test_sign_and_fraction_are_dropped() {
        assert_eq!(grouped(-100), "百");
        assert_eq!(grouped(450.51), "四百五十");
        assert_eq!(grouped(-0.9), "零");
    }

    #[test]
    fn test_registers() {
        let financial = FormatOptions::financial();
        assert_eq!(format(&Number::from(1234), &financial).unwrap(), "千弐百参拾四");
        let archaic = FormatOptions::new().with_register(Register::Archaic);
        assert_eq!(format(&Number::from(14_000), &archaic).unwrap(), "壱萬肆阡");
        assert_eq!(format(&Number::from(10), &archaic).unwrap(), "拾");
    }

    #[test]
    fn test_plain_style() {
        let options = FormatOptions::new().with_style(Style::Plain);
        assert_eq!(format(&Number::from(1905), &options).unwrap(), "一九零五");
        assert_eq!(format(&Number::from(0), &options).unwrap(), "零");

        let options = options
            .with_register(Register::Financial)
            .with_zero_glyph(ZeroGlyph::Circle);
        assert_eq!(format(&Number::from(1203), &options).unwrap(), "壱弐〇参");
    }

    #[test]
    fn test_largest_representable() {
        let max = BigUint::from(10u32).pow(72) - 1u32;
        let kanji = grouped(max);
        assert!(kanji.starts_with("九千九百九十九無量大数"));
        assert!(kanji.ends_with("九千九百九十九"));
    }

    #[test]
    fn test_overflow() {
        let too_big = BigUint::from(10u32).pow(72);
        let err = format(&Number::from(too_big), &FormatOptions::default()).unwrap_err();
        assert_eq!(err, Error::Overflow { digits: 73 });
    }

    #[test]
    fn test_plain_style_has_no_ladder_limit() {
        let options = FormatOptions::new().with_style(Style::Plain);
        let big = BigUint::from(10u32).pow(80);
        let kanji = format(&Number::from(big), &options).unwrap();
        assert_eq!(kanji.chars().count(), 81);
    }
}
