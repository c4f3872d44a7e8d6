//! Store integer fields as kanji text in any serde format.
//!
//! Use with `#[serde(with = "kansuji::serde_kanji")]` on a field of any type
//! that converts into [`Number`] (every primitive integer, `BigUint`, `BigInt`)
//! and back out of [`KanjiNumber`].
//!
//! Serialization writes the grouped, standard-register form. Deserialization
//! accepts anything the parser accepts, in any register, and fails if the
//! value does not fit the field type.
//!
//! ## Examples
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Receipt {
//!     #[serde(with = "kansuji::serde_kanji")]
//!     amount: u64,
//! }
//!
//! let json = serde_json::to_string(&Receipt { amount: 35_000 }).unwrap();
//! assert_eq!(json, r#"{"amount":"三万五千"}"#);
//!
//! let receipt: Receipt = serde_json::from_str(r#"{"amount":"参万五千"}"#).unwrap();
//! assert_eq!(receipt.amount, 35_000);
//! ```

use crate::{number_to_kanji, KanjiNumber, Number};
use serde::de::{self, Visitor};
use serde::{ser, Deserializer, Serializer};
use std::fmt;

/// Serializes an integer as a kanji string.
///
/// # Errors
///
/// Fails for negative values, which kanji numerals cannot carry, and for
/// magnitudes beyond the largest big unit.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Clone + Into<Number>,
    S: Serializer,
{
    let number: Number = value.clone().into();
    if number.is_negative() {
        return Err(ser::Error::custom(format!(
            "cannot write negative number {} as kanji",
            number
        )));
    }
    let kanji = number_to_kanji(number).map_err(ser::Error::custom)?;
    serializer.serialize_str(&kanji)
}

/// Deserializes a kanji string into an integer.
///
/// # Errors
///
/// Fails for non-string input, malformed kanji, and values out of range for `T`.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: TryFrom<KanjiNumber>,
    T::Error: fmt::Display,
    D: Deserializer<'de>,
{
    let number = deserializer.deserialize_str(KanjiVisitor)?;
    T::try_from(number).map_err(de::Error::custom)
}

struct KanjiVisitor;

impl<'de> Visitor<'de> for KanjiVisitor {
    type Value = KanjiNumber;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a kanji numeral string")
    }

    fn visit_str<E>(self, value: &str) -> Result<KanjiNumber, E>
    where
        E: de::Error,
    {
        value.parse().map_err(E::custom)
    }
}
