//! Error types for kanji numeral parsing and formatting.
//!
//! Every failure is reported synchronously with enough context to locate the
//! problem in the input. Positions are **character** offsets (not byte
//! offsets), so they line up with what a reader sees in the kanji string.
//!
//! ## Error Categories
//!
//! - **Lexical errors**: unknown glyphs, multi-character big units cut short
//! - **Grammar errors**: consecutive digits, `一十`/`一百`, units out of order,
//!   a big unit with nothing in front of it
//! - **Range errors**: values that cannot be represented exactly in the
//!   requested type, or that exceed the largest big unit
//!
//! ## Examples
//!
//! ```rust
//! use kansuji::{kanji_to_number, Error};
//!
//! let result = kanji_to_number("一万一億");
//! assert!(matches!(result, Err(Error::UnitOrder { .. })));
//!
//! if let Err(err) = result {
//!     eprintln!("Parse error: {}", err);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while converting kanji numerals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The parser was given an empty string
    #[error("Input string cannot be empty")]
    EmptyInput,

    /// A character that is neither a numeral glyph nor part of one
    #[error("Unknown kanji '{glyph}' at index {index}")]
    UnknownGlyph { index: usize, glyph: String },

    /// Input ended in the middle of a multi-character big unit such as 無量大数
    #[error("Incomplete multi-character big unit '{partial}' starting at index {index}")]
    IncompleteCompound { index: usize, partial: String },

    /// Two digit glyphs with no unit between them
    #[error("Invalid kanji number: consecutive digits at index {index}")]
    ConsecutiveDigits { index: usize },

    /// `一` directly in front of `十` or `百`
    #[error("Invalid kanji number: '{unit}' at index {index} cannot be preceded by 一")]
    InvalidDigitUnitPair { index: usize, unit: String },

    /// A small or big unit that does not strictly descend from the previous one
    #[error("Invalid kanji number: unit '{unit}' at index {index} is out of order")]
    UnitOrder { index: usize, unit: String },

    /// A big unit with no accumulated value in front of it (e.g. a bare `億`)
    #[error("Invalid kanji number: big unit '{unit}' at index {index} must be preceded by a value")]
    MissingValueBeforeBigUnit { index: usize, unit: String },

    /// The value cannot be represented exactly
    #[error("Precision loss: {value} is not exactly representable\nHelp: use a big integer, or enable lossy overflow")]
    Precision { value: String },

    /// The magnitude needs a big unit beyond 無量大数 (10^68)
    #[error("Number too large: {digits} digits exceeds the largest big unit (無量大数, at most 72 digits)")]
    Overflow { digits: usize },

    /// Input of an unsupported type
    #[error("Invalid type: {0}")]
    InvalidType(String),
}

impl Error {
    /// Creates an unknown-glyph error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kansuji::Error;
    ///
    /// let err = Error::unknown_glyph(3, "あ");
    /// assert!(err.to_string().contains("index 3"));
    /// ```
    pub fn unknown_glyph(index: usize, glyph: &str) -> Self {
        Error::UnknownGlyph {
            index,
            glyph: glyph.to_string(),
        }
    }

    /// Creates an error for input that stops partway through a compound big unit.
    pub fn incomplete_compound(index: usize, partial: &str) -> Self {
        Error::IncompleteCompound {
            index,
            partial: partial.to_string(),
        }
    }

    pub fn invalid_digit_unit_pair(index: usize, unit: &str) -> Self {
        Error::InvalidDigitUnitPair {
            index,
            unit: unit.to_string(),
        }
    }

    /// Creates a unit-order error (a unit equal to or larger than one already seen).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kansuji::Error;
    ///
    /// let err = Error::unit_order(2, "億");
    /// assert!(err.to_string().contains("out of order"));
    /// ```
    pub fn unit_order(index: usize, unit: &str) -> Self {
        Error::UnitOrder {
            index,
            unit: unit.to_string(),
        }
    }

    pub fn missing_value(index: usize, unit: &str) -> Self {
        Error::MissingValueBeforeBigUnit {
            index,
            unit: unit.to_string(),
        }
    }

    /// Creates a precision error for a value that cannot be represented exactly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kansuji::Error;
    ///
    /// let err = Error::precision(9007199254740992u64);
    /// assert!(err.to_string().contains("9007199254740992"));
    /// ```
    pub fn precision<T: fmt::Display>(value: T) -> Self {
        Error::Precision {
            value: value.to_string(),
        }
    }

    pub fn invalid_type(msg: &str) -> Self {
        Error::InvalidType(msg.to_string())
    }

    /// Character index of the offending glyph, for errors raised while parsing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kansuji::kanji_to_number;
    ///
    /// let err = kanji_to_number("三十百").unwrap_err();
    /// assert_eq!(err.index(), Some(2));
    /// ```
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Error::UnknownGlyph { index, .. }
            | Error::IncompleteCompound { index, .. }
            | Error::ConsecutiveDigits { index }
            | Error::InvalidDigitUnitPair { index, .. }
            | Error::UnitOrder { index, .. }
            | Error::MissingValueBeforeBigUnit { index, .. } => Some(*index),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
