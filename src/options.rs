//! Configuration options for kanji conversion.
//!
//! This module provides the knobs for both directions:
//!
//! - [`FormatOptions`]: register, rendering style, zero glyph and overflow policy
//!   for [`number_to_kanji_with_options`](crate::number_to_kanji_with_options)
//! - [`ParseOptions`]: the result type for
//!   [`kanji_to_number_with_options`](crate::kanji_to_number_with_options)
//!
//! Every option enum implements `Serialize`/`Deserialize` with kebab-case
//! names, so a formatting configuration can live in any serde format.
//!
//! ## Examples
//!
//! ```rust
//! use kansuji::{number_to_kanji_with_options, FormatOptions, Register, ZeroGlyph};
//!
//! let options = FormatOptions::new().with_register(Register::Financial);
//! let kanji = number_to_kanji_with_options(20, &options).unwrap();
//! assert_eq!(kanji, "弐拾");
//!
//! let options = FormatOptions::new().with_zero_glyph(ZeroGlyph::Circle);
//! assert_eq!(number_to_kanji_with_options(0, &options).unwrap(), "〇");
//! ```

use crate::tables;
use serde::{Deserialize, Serialize};

/// Numeral register: which glyph set the formatter writes.
///
/// The parser accepts every register at once, so this only affects output.
///
/// | Register | 1 2 3 4 | 10 100 1000 | 10^4 |
/// |----------|---------|-------------|------|
/// | `Standard` | 一 二 三 四 | 十 百 千 | 万 |
/// | `Financial` | 壱 弐 参 四 | 拾 百 千 | 万 |
/// | `Archaic` | 壱 弐 参 肆 | 拾 佰 阡 | 萬 |
///
/// # Examples
///
/// ```rust
/// use kansuji::Register;
///
/// assert_eq!(Register::Financial.digit_glyphs()[2], "弐");
/// assert_eq!(Register::Archaic.small_unit_glyphs()[3], "阡");
/// assert_eq!(Register::Archaic.big_unit_glyph(1), "萬");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Register {
    #[default]
    Standard,
    /// Daiji for the forgeable glyphs (1, 2, 3, 10), as on modern legal documents.
    Financial,
    /// The complete historical daiji set.
    Archaic,
}

impl Register {
    /// Returns the digit table (index 0 is empty).
    #[must_use]
    pub const fn digit_glyphs(self) -> &'static [&'static str; 10] {
        match self {
            Register::Standard => &tables::STANDARD_DIGITS,
            Register::Financial => &tables::FINANCIAL_DIGITS,
            Register::Archaic => &tables::ARCHAIC_DIGITS,
        }
    }

    /// Returns the small-unit table: ×1 (empty), ×10, ×100, ×1000.
    #[must_use]
    pub const fn small_unit_glyphs(self) -> &'static [&'static str; 4] {
        match self {
            Register::Standard => &tables::STANDARD_SMALL_UNITS,
            Register::Financial => &tables::FINANCIAL_SMALL_UNITS,
            Register::Archaic => &tables::ARCHAIC_SMALL_UNITS,
        }
    }

    /// Returns the big-unit glyph for myriad group `group` (0 → empty).
    ///
    /// # Panics
    ///
    /// Panics if `group` is past the end of the big-unit ladder.
    #[must_use]
    pub fn big_unit_glyph(self, group: usize) -> &'static str {
        match (self, group) {
            (Register::Archaic, 1) => tables::ARCHAIC_MYRIAD,
            _ => tables::BIG_UNITS[group],
        }
    }
}

/// Top-level rendering style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    /// Place-value numerals with small and big units: 千二百三十四.
    #[default]
    Grouped,
    /// One glyph per decimal digit, no units: 一二三四. Used for years,
    /// phone numbers and other digit strings read aloud.
    Plain,
}

/// Which glyph stands for zero.
///
/// # Examples
///
/// ```rust
/// use kansuji::ZeroGlyph;
///
/// assert_eq!(ZeroGlyph::Formal.as_str(), "零");
/// assert_eq!(ZeroGlyph::Circle.as_str(), "〇");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZeroGlyph {
    #[default]
    Formal,
    Circle,
}

impl ZeroGlyph {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ZeroGlyph::Formal => tables::ZERO_FORMAL,
            ZeroGlyph::Circle => tables::ZERO_CIRCLE,
        }
    }
}

/// Result type requested from the parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReturnKind {
    /// Always a `u64`; values above `u64::MAX` are a precision error.
    #[default]
    Integer,
    /// Always a `BigUint`.
    BigInt,
    /// `u64` when it fits, `BigUint` otherwise.
    Auto,
}

/// Configuration options for [`number_to_kanji_with_options`](crate::number_to_kanji_with_options).
///
/// # Examples
///
/// ```rust
/// use kansuji::{FormatOptions, Register, Style, ZeroGlyph};
///
/// // Defaults: standard register, grouped style, 零 for zero
/// let options = FormatOptions::new();
/// assert_eq!(options.register, Register::Standard);
///
/// // Custom configuration
/// let options = FormatOptions::new()
///     .with_register(Register::Archaic)
///     .with_style(Style::Plain)
///     .with_zero_glyph(ZeroGlyph::Circle)
///     .with_lossy_overflow(true);
/// assert!(options.allow_lossy_overflow);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FormatOptions {
    pub register: Register,
    pub style: Style,
    pub zero_glyph: ZeroGlyph,
    /// Format floats beyond 2^53 from their nearest representable value
    /// instead of failing. The output may not match the caller's intent.
    pub allow_lossy_overflow: bool,
}

impl FormatOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for the financial (daiji) register.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kansuji::{FormatOptions, Register};
    ///
    /// assert_eq!(FormatOptions::financial().register, Register::Financial);
    /// ```
    #[must_use]
    pub fn financial() -> Self {
        FormatOptions {
            register: Register::Financial,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_register(mut self, register: Register) -> Self {
        self.register = register;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_zero_glyph(mut self, zero_glyph: ZeroGlyph) -> Self {
        self.zero_glyph = zero_glyph;
        self
    }

    /// Allows lossy formatting of floats outside the exact-integer range.
    #[must_use]
    pub fn with_lossy_overflow(mut self, allow: bool) -> Self {
        self.allow_lossy_overflow = allow;
        self
    }
}

/// Configuration options for [`kanji_to_number_with_options`](crate::kanji_to_number_with_options).
///
/// # Examples
///
/// ```rust
/// use kansuji::{ParseOptions, ReturnKind};
///
/// let options = ParseOptions::new().with_return_kind(ReturnKind::Auto);
/// assert_eq!(options.return_kind, ReturnKind::Auto);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ParseOptions {
    pub return_kind: ReturnKind,
}

impl ParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_return_kind(mut self, return_kind: ReturnKind) -> Self {
        self.return_kind = return_kind;
        self
    }
}
