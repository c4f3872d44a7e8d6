//! Numeric values on either side of a conversion.
//!
//! - [`Number`]: anything the formatter accepts. Every primitive integer,
//!   `f32`/`f64`, `BigInt` and `BigUint` convert into it with `From`, so the
//!   crate-root functions take `impl Into<Number>`.
//! - [`KanjiNumber`]: what the parser returns, either a machine integer or an
//!   arbitrary-precision one depending on [`ReturnKind`].
//!
//! ## Examples
//!
//! ```rust
//! use kansuji::{KanjiNumber, Number};
//! use num_bigint::BigUint;
//!
//! let n = Number::from(42u8);
//! assert!(n.is_integer());
//!
//! let parsed: KanjiNumber = "一万".parse().unwrap();
//! assert_eq!(parsed.as_u64(), Some(10_000));
//! assert_eq!(parsed.to_biguint(), BigUint::from(10_000u32));
//! ```

use crate::options::ReturnKind;
use crate::{Error, Result};
use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, ToPrimitive};
use std::fmt;
use std::str::FromStr;

/// Largest integer an `f64` holds exactly along with every integer below it (2^53 − 1).
pub const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_991.0;

/// Largest integer an `f32` holds exactly along with every integer below it (2^24 − 1).
pub const MAX_EXACT_FLOAT32: f32 = 16_777_215.0;

/// A value to be written as kanji.
///
/// Integers are always exact. Floats are truncated toward zero and must lie
/// within the exact range of their own width, ±[`MAX_EXACT_FLOAT`] for `f64`
/// and ±[`MAX_EXACT_FLOAT32`] for `f32`, unless lossy overflow is enabled.
///
/// # Examples
///
/// ```rust
/// use kansuji::Number;
/// use num_bigint::BigInt;
///
/// assert_eq!(Number::from(-7i32), Number::Integer(-7));
/// assert!(Number::from(3.5f64).is_float());
/// assert_eq!(Number::from(3.5f32), Number::Float32(3.5));
/// assert!(Number::from(BigInt::from(10)).is_bigint());
/// assert!(Number::from(u128::MAX).is_bigint());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i128),
    Float(f64),
    Float32(f32),
    BigInt(BigInt),
}

impl Number {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_) | Number::Float32(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bigint(&self) -> bool {
        matches!(self, Number::BigInt(_))
    }

    /// Returns `true` for values below zero. The formatter ignores the sign,
    /// so callers that must not lose it check here first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kansuji::Number;
    ///
    /// assert!(Number::from(-1).is_negative());
    /// assert!(!Number::from(-0.0).is_negative());
    /// assert!(!Number::from(0u8).is_negative());
    /// ```
    #[must_use]
    pub fn is_negative(&self) -> bool {
        match self {
            Number::Integer(i) => *i < 0,
            Number::Float(f) => *f < 0.0,
            Number::Float32(f) => *f < 0.0,
            Number::BigInt(b) => b.is_negative(),
        }
    }

    /// Returns the decimal digits of the truncated absolute value.
    ///
    /// With `allow_lossy` set, floats beyond the exact range of their width
    /// are expanded from their binary value instead of being rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kansuji::Number;
    ///
    /// assert_eq!(Number::from(-100).magnitude_digits(false).unwrap(), "100");
    /// assert_eq!(Number::from(450.51).magnitude_digits(false).unwrap(), "450");
    /// assert!(Number::from(9007199254740992.0).magnitude_digits(false).is_err());
    /// assert_eq!(
    ///     Number::from(9007199254740992.0).magnitude_digits(true).unwrap(),
    ///     "9007199254740992"
    /// );
    ///
    /// // f32 is held to its own 24-bit mantissa
    /// assert!(Number::from(16_777_217f32).magnitude_digits(false).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidType`] for NaN and infinities, and
    /// [`Error::Precision`] for floats outside the exact range when lossy
    /// overflow is not allowed.
    pub fn magnitude_digits(&self, allow_lossy: bool) -> Result<String> {
        match self {
            Number::Integer(i) => Ok(i.unsigned_abs().to_string()),
            Number::BigInt(b) => Ok(b.magnitude().to_string()),
            Number::Float(f) => float_digits(*f, MAX_EXACT_FLOAT, allow_lossy),
            // Widening to f64 is exact, so only the limit differs
            Number::Float32(f) => {
                float_digits(f64::from(*f), f64::from(MAX_EXACT_FLOAT32), allow_lossy)
            }
        }
    }
}

fn float_digits(value: f64, exact_limit: f64, allow_lossy: bool) -> Result<String> {
    if !value.is_finite() {
        return Err(Error::invalid_type(&format!(
            "{} is not a finite number",
            value
        )));
    }
    let int = value.trunc().abs();
    if int > exact_limit && !allow_lossy {
        return Err(Error::precision(format!("{:.0}", int)));
    }
    // `{:.0}` prints the exact decimal expansion, never exponent notation
    Ok(format!("{:.0}", int))
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
            Number::Float32(fl) => write!(f, "{}", fl),
            Number::BigInt(b) => write!(f, "{}", b),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(value as i128)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<u128> for Number {
    fn from(value: u128) -> Self {
        match i128::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::BigInt(BigInt::from(value)),
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float32(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::BigInt(value)
    }
}

impl From<&BigInt> for Number {
    fn from(value: &BigInt) -> Self {
        Number::BigInt(value.clone())
    }
}

impl From<BigUint> for Number {
    fn from(value: BigUint) -> Self {
        Number::BigInt(BigInt::from(value))
    }
}

impl From<&BigUint> for Number {
    fn from(value: &BigUint) -> Self {
        Number::BigInt(BigInt::from(value.clone()))
    }
}

impl From<KanjiNumber> for Number {
    fn from(value: KanjiNumber) -> Self {
        match value {
            KanjiNumber::Integer(u) => Number::from(u),
            KanjiNumber::BigInt(b) => Number::from(b),
        }
    }
}

/// A non-negative value read from kanji.
///
/// The variant follows the requested [`ReturnKind`], not the size of the
/// value: `KanjiNumber::Integer(5)` and `KanjiNumber::BigInt(5)` compare
/// unequal. Compare through [`KanjiNumber::to_biguint`] when the kind does
/// not matter.
///
/// # Examples
///
/// ```rust
/// use kansuji::{kanji_to_number_with_options, KanjiNumber, ParseOptions, ReturnKind};
///
/// let options = ParseOptions::new().with_return_kind(ReturnKind::BigInt);
/// let n = kanji_to_number_with_options("一万", &options).unwrap();
/// assert!(n.is_bigint());
/// assert_eq!(n.as_u64(), Some(10_000));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KanjiNumber {
    Integer(u64),
    BigInt(BigUint),
}

impl KanjiNumber {
    /// Wraps a parsed value in the variant `kind` asks for.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Precision`] when `kind` is [`ReturnKind::Integer`] and
    /// the value does not fit in a `u64`.
    pub fn narrow(value: BigUint, kind: ReturnKind) -> Result<Self> {
        match kind {
            ReturnKind::BigInt => Ok(KanjiNumber::BigInt(value)),
            ReturnKind::Integer => value
                .to_u64()
                .map(KanjiNumber::Integer)
                .ok_or_else(|| Error::precision(&value)),
            ReturnKind::Auto => Ok(match value.to_u64() {
                Some(u) => KanjiNumber::Integer(u),
                None => KanjiNumber::BigInt(value),
            }),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, KanjiNumber::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bigint(&self) -> bool {
        matches!(self, KanjiNumber::BigInt(_))
    }

    /// Returns the value as a `u64` if it fits, whatever the variant.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            KanjiNumber::Integer(u) => Some(*u),
            KanjiNumber::BigInt(b) => b.to_u64(),
        }
    }

    #[must_use]
    pub fn to_biguint(&self) -> BigUint {
        match self {
            KanjiNumber::Integer(u) => BigUint::from(*u),
            KanjiNumber::BigInt(b) => b.clone(),
        }
    }

    #[must_use]
    pub fn into_biguint(self) -> BigUint {
        match self {
            KanjiNumber::Integer(u) => BigUint::from(u),
            KanjiNumber::BigInt(b) => b,
        }
    }
}

impl fmt::Display for KanjiNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KanjiNumber::Integer(u) => write!(f, "{}", u),
            KanjiNumber::BigInt(b) => write!(f, "{}", b),
        }
    }
}

/// Parses kanji text, narrowing to `Integer` when the value fits in a `u64`.
impl FromStr for KanjiNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = crate::parse::parse(s)?;
        KanjiNumber::narrow(value, ReturnKind::Auto)
    }
}

impl From<u64> for KanjiNumber {
    fn from(value: u64) -> Self {
        KanjiNumber::Integer(value)
    }
}

impl From<BigUint> for KanjiNumber {
    fn from(value: BigUint) -> Self {
        KanjiNumber::BigInt(value)
    }
}

impl From<KanjiNumber> for BigUint {
    fn from(value: KanjiNumber) -> Self {
        value.into_biguint()
    }
}

// TryFrom implementations for extracting machine integers from KanjiNumber
macro_rules! impl_try_from_kanji_number {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<KanjiNumber> for $ty {
                type Error = Error;

                fn try_from(value: KanjiNumber) -> Result<Self> {
                    let big = value.into_biguint();
                    <$ty>::try_from(&big).map_err(|_| Error::precision(&big))
                }
            }
        )*
    };
}

impl_try_from_kanji_number!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
