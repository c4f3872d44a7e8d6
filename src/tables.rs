//! Static numeral tables.
//!
//! This module holds every glyph the crate knows about and the role each one
//! plays. The formatter reads the per-register arrays directly; the parser
//! goes through [`lookup`] and [`is_compound_prefix`], which are backed by
//! maps built once on first use and then shared by all callers.
//!
//! ## Roles
//!
//! | Role | Glyphs | Meaning |
//! |------|--------|---------|
//! | Digit | 一…九, 壱 弐 参 肆 伍 陸 漆 捌 玖 | face value 1–9 |
//! | Small unit | 十 百 千, 拾 佰 阡 仟 | ×10, ×100, ×1000 inside a myriad group |
//! | Big unit | 万 億 兆 … 無量大数 (plus 萬 秭 那由多) | ×10^4k |
//! | Zero | 零 〇 | the value zero, only as the whole input |
//!
//! Big units from 恒河沙 (10^52) upward are written with several characters.
//! None of their characters is a glyph on its own, so the parser can tell
//! that it is inside a compound from the first character.

use self::Symbol::{BigUnit, Digit, SmallUnit};
use num_bigint::BigUint;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Formal zero glyph, used by default.
pub const ZERO_FORMAL: &str = "零";

/// Circle zero glyph, common in plain digit-by-digit writing.
pub const ZERO_CIRCLE: &str = "〇";

/// Glyphs that denote zero when they make up the whole input.
pub const ZERO_GLYPHS: [&str; 2] = [ZERO_FORMAL, ZERO_CIRCLE];

pub const STANDARD_DIGITS: [&str; 10] = ["", "一", "二", "三", "四", "五", "六", "七", "八", "九"];
pub const FINANCIAL_DIGITS: [&str; 10] = ["", "壱", "弐", "参", "四", "五", "六", "七", "八", "九"];
pub const ARCHAIC_DIGITS: [&str; 10] = ["", "壱", "弐", "参", "肆", "伍", "陸", "漆", "捌", "玖"];

pub const STANDARD_SMALL_UNITS: [&str; 4] = ["", "十", "百", "千"];
pub const FINANCIAL_SMALL_UNITS: [&str; 4] = ["", "拾", "百", "千"];
pub const ARCHAIC_SMALL_UNITS: [&str; 4] = ["", "拾", "佰", "阡"];

/// Big-unit ladder indexed by myriad group: index `k` stands for 10^(4k).
pub const BIG_UNITS: [&str; 18] = [
    "",
    "万",
    "億",
    "兆",
    "京",
    "垓",
    "𥝱",
    "穣",
    "溝",
    "澗",
    "正",
    "載",
    "極",
    "恒河沙",
    "阿僧祇",
    "那由他",
    "不可思議",
    "無量大数",
];

/// Myriad glyph of the archaic daiji register.
pub const ARCHAIC_MYRIAD: &str = "萬";

/// Largest decimal exponent the tables can express (無量大数).
pub const MAX_EXPONENT: u32 = 68;

/// Most decimal digits a grouped rendering can carry: one full group per ladder rung.
pub const MAX_DIGITS: usize = BIG_UNITS.len() * 4;

/// Semantic role of a recognized glyph.
///
/// Units carry their decimal exponent rather than their value, so ordering
/// checks stay cheap; [`power_of_ten`] resolves the exponent to a big integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    /// Face value 1–9.
    Digit(u8),
    /// ×10^1 through ×10^3.
    SmallUnit(u32),
    /// ×10^4 through ×10^68, always a multiple of 4.
    BigUnit(u32),
}

const SYMBOL_ENTRIES: &[(&str, Symbol)] = &[
    ("一", Digit(1)),
    ("二", Digit(2)),
    ("三", Digit(3)),
    ("四", Digit(4)),
    ("五", Digit(5)),
    ("六", Digit(6)),
    ("七", Digit(7)),
    ("八", Digit(8)),
    ("九", Digit(9)),
    ("壱", Digit(1)),
    ("弐", Digit(2)),
    ("参", Digit(3)),
    ("肆", Digit(4)),
    ("伍", Digit(5)),
    ("陸", Digit(6)),
    ("漆", Digit(7)),
    ("捌", Digit(8)),
    ("玖", Digit(9)),
    ("十", SmallUnit(1)),
    ("百", SmallUnit(2)),
    ("千", SmallUnit(3)),
    ("拾", SmallUnit(1)),
    ("佰", SmallUnit(2)),
    ("阡", SmallUnit(3)),
    ("仟", SmallUnit(3)),
    ("万", BigUnit(4)),
    ("萬", BigUnit(4)),
    ("億", BigUnit(8)),
    ("兆", BigUnit(12)),
    ("京", BigUnit(16)),
    ("垓", BigUnit(20)),
    ("𥝱", BigUnit(24)),
    ("秭", BigUnit(24)),
    ("穣", BigUnit(28)),
    ("溝", BigUnit(32)),
    ("澗", BigUnit(36)),
    ("正", BigUnit(40)),
    ("載", BigUnit(44)),
    ("極", BigUnit(48)),
    ("恒河沙", BigUnit(52)),
    ("阿僧祇", BigUnit(56)),
    ("那由他", BigUnit(60)),
    ("那由多", BigUnit(60)),
    ("不可思議", BigUnit(64)),
    ("無量大数", BigUnit(68)),
];

static SYMBOLS: LazyLock<HashMap<&'static str, Symbol>> =
    LazyLock::new(|| SYMBOL_ENTRIES.iter().copied().collect());

// Proper prefixes of every multi-character glyph: 恒, 恒河, 那, 那由, ...
static COMPOUND_PREFIXES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut prefixes = HashSet::new();
    for &(glyph, _) in SYMBOL_ENTRIES {
        for (end, _) in glyph.char_indices().skip(1) {
            prefixes.insert(&glyph[..end]);
        }
    }
    prefixes
});

static POWERS_OF_TEN: LazyLock<Vec<BigUint>> = LazyLock::new(|| {
    let ten = BigUint::from(10u32);
    let mut powers = Vec::with_capacity(MAX_EXPONENT as usize + 1);
    let mut current = BigUint::from(1u32);
    for _ in 0..=MAX_EXPONENT {
        powers.push(current.clone());
        current *= &ten;
    }
    powers
});

/// Looks up a complete glyph (single character or compound).
///
/// # Examples
///
/// ```rust
/// use kansuji::tables::{lookup, Symbol};
///
/// assert_eq!(lookup("拾"), Some(Symbol::SmallUnit(1)));
/// assert_eq!(lookup("那由多"), Some(Symbol::BigUnit(60)));
/// assert_eq!(lookup("那由"), None);
/// ```
#[inline]
#[must_use]
pub fn lookup(glyph: &str) -> Option<Symbol> {
    SYMBOLS.get(glyph).copied()
}

/// Returns `true` if `partial` is the beginning of a multi-character big unit.
#[inline]
#[must_use]
pub fn is_compound_prefix(partial: &str) -> bool {
    COMPOUND_PREFIXES.contains(partial)
}

/// Returns `true` if `glyph` is one of the zero glyphs.
#[inline]
#[must_use]
pub fn is_zero_glyph(glyph: &str) -> bool {
    ZERO_GLYPHS.contains(&glyph)
}

/// Returns 10^`exp` from the shared ladder.
///
/// # Panics
///
/// Panics if `exp` is greater than [`MAX_EXPONENT`]; every exponent stored in
/// the symbol table is within range.
#[inline]
#[must_use]
pub fn power_of_ten(exp: u32) -> &'static BigUint {
    &POWERS_OF_TEN[exp as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_ladder_rung_is_a_big_unit() {
        for (index, glyph) in BIG_UNITS.iter().enumerate().skip(1) {
            assert_eq!(lookup(glyph), Some(BigUnit(index as u32 * 4)), "{}", glyph);
        }
    }

    #[test]
    fn test_register_tables_resolve_to_their_position() {
        for table in [STANDARD_DIGITS, FINANCIAL_DIGITS, ARCHAIC_DIGITS] {
            for (value, glyph) in table.iter().enumerate().skip(1) {
                assert_eq!(lookup(glyph), Some(Digit(value as u8)));
            }
        }
        for table in [STANDARD_SMALL_UNITS, FINANCIAL_SMALL_UNITS, ARCHAIC_SMALL_UNITS] {
            for (exp, glyph) in table.iter().enumerate().skip(1) {
                assert_eq!(lookup(glyph), Some(SmallUnit(exp as u32)));
            }
        }
    }

    #[test]
    fn test_compound_prefixes() {
        assert!(is_compound_prefix("恒"));
        assert!(is_compound_prefix("恒河"));
        assert!(is_compound_prefix("那由"));
        assert!(is_compound_prefix("無量大"));
        assert!(!is_compound_prefix("恒河沙"));
        assert!(!is_compound_prefix("河"));
        assert!(!is_compound_prefix("万"));
    }

    #[test]
    fn test_compound_characters_are_not_glyphs() {
        for prefix in COMPOUND_PREFIXES.iter() {
            assert_eq!(lookup(prefix), None, "{}", prefix);
        }
    }

    #[test]
    fn test_zero_glyphs_are_not_symbols() {
        for zero in ZERO_GLYPHS {
            assert!(is_zero_glyph(zero));
            assert_eq!(lookup(zero), None);
        }
    }

    #[test]
    fn test_powers_of_ten() {
        assert_eq!(power_of_ten(0), &BigUint::from(1u32));
        assert_eq!(power_of_ten(4), &BigUint::from(10_000u32));
        assert_eq!(power_of_ten(MAX_EXPONENT).to_string().len(), 69);
    }

    #[test]
    fn test_max_digits() {
        assert_eq!(MAX_DIGITS, 72);
    }
}
