//! Locale-aware name ordering.
//!
//! Approximates root-locale collation (what `localeCompare` does with default
//! options) without pulling in ICU data. Strings are compared level by level:
//!
//! 1. primary: character class, then base character (case and accents folded).
//!    Classes order as whitespace, punctuation, symbols, currency, digits, letters.
//! 2. secondary: accents and non-ASCII digit forms, plain ASCII first.
//! 3. tertiary: case, lowercase first.
//!
//! Remaining ties fall back to code point order so the result is a total order.
//! Digits are compared one character at a time: `10.svg` sorts before `9.svg`.
//! Decimal digits of other scripts (`٣`, `३`) share a primary weight with
//! their ASCII digit.
//!
//! Known gaps against full CLDR tables: only the punctuation and symbols listed
//! below sit at their standard positions. Other non-ASCII symbols sort after
//! the listed ones by code point, other punctuation after the listed
//! punctuation. Non-decimal numerics such as `½` or `²` sort after every digit.
//! Accent folding covers common Latin letters only.

use std::cmp::Ordering;

/// Punctuation in root collation order.
const PUNCTUATION_ORDER: &str = "_-‐‑‒–—―,;:!¡?¿.…·'‘’‚\"“”„«»()[]{}§¶@*/\\&#%‰†‡•";

/// General symbols in root collation order.
const SYMBOL_ORDER: &str = "`´^¨¯°©®+±÷×<=>¬|¦~";

/// Currency signs in root collation order; the rest of the currency block follows.
const CURRENCY_ORDER: &str = "¤¢$£¥";

/// Code points of `0` in the decimal digit runs of other scripts.
const DIGIT_ZEROS: [u32; 19] = [
    0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66, 0x0CE6,
    0x0D66, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x17E0, 0x1810, 0xFF10,
];

const WHITESPACE: u8 = 0;
const PUNCTUATION: u8 = 1;
const SYMBOL: u8 = 2;
const CURRENCY: u8 = 3;
const DIGIT: u8 = 4;
const LETTER: u8 = 5;

/// Offset placing unlisted characters of a class after the listed ones.
const UNLISTED: u32 = 0x1_0000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Weight {
    primary: (u8, u32),
    secondary: u32,
    tertiary: u8,
}

fn position(order: &str, c: char) -> Option<u32> {
    order.chars().position(|o| o == c).and_then(|pos| u32::try_from(pos).ok())
}

/// Value of a decimal digit from any supported script.
fn decimal_digit(c: char) -> Option<u32> {
    if let Some(digit) = c.to_digit(10) {
        return Some(digit);
    }
    let cp = u32::from(c);
    DIGIT_ZEROS.iter().find(|&&zero| (zero..zero + 10).contains(&cp)).map(|&zero| cp - zero)
}

fn weight(c: char) -> Weight {
    let plain = |class: u8, value: u32| Weight {
        primary: (class, value),
        secondary: 0,
        tertiary: 0,
    };
    let cp = u32::from(c);

    if c.is_whitespace() || c.is_control() {
        return plain(WHITESPACE, cp);
    }
    if let Some(pos) = position(PUNCTUATION_ORDER, c) {
        return plain(PUNCTUATION, pos);
    }
    if (0x2010..=0x205E).contains(&cp) {
        return plain(PUNCTUATION, UNLISTED + cp);
    }
    if let Some(pos) = position(CURRENCY_ORDER, c) {
        return plain(CURRENCY, pos);
    }
    if (0x20A0..=0x20CF).contains(&cp) {
        return plain(CURRENCY, UNLISTED + cp);
    }
    if let Some(pos) = position(SYMBOL_ORDER, c) {
        return plain(SYMBOL, pos);
    }
    if let Some(digit) = decimal_digit(c) {
        return Weight {
            primary: (DIGIT, digit),
            secondary: if c.is_ascii_digit() { 0 } else { cp },
            tertiary: 0,
        };
    }
    if c.is_alphabetic() {
        let lower = c.to_lowercase().next().unwrap_or(c);
        let base = fold_accent(lower);
        return Weight {
            primary: (LETTER, u32::from(base)),
            secondary: if base == lower { 0 } else { u32::from(lower) },
            tertiary: u8::from(c.is_uppercase()),
        };
    }
    if c.is_numeric() {
        return plain(DIGIT, UNLISTED + cp);
    }
    plain(SYMBOL, UNLISTED + cp)
}

/// Maps common accented Latin lowercase letters to their base letter.
fn fold_accent(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' => 'd',
        'è'..='ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì'..='ï' | 'ī' | 'į' => 'i',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' => 't',
        'ù'..='ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => c,
    }
}

/// Compares two names the way a locale-aware sort would.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let wa: Vec<Weight> = a.chars().map(weight).collect();
    let wb: Vec<Weight> = b.chars().map(weight).collect();

    wa.iter()
        .map(|w| w.primary)
        .cmp(wb.iter().map(|w| w.primary))
        .then_with(|| wa.iter().map(|w| w.secondary).cmp(wb.iter().map(|w| w.secondary)))
        .then_with(|| wa.iter().map(|w| w.tertiary).cmp(wb.iter().map(|w| w.tertiary)))
        .then_with(|| a.cmp(b))
}

/// Sorts names in place with [`locale_cmp`].
pub fn sort_names(names: &mut [String]) {
    names.sort_by(|a, b| locale_cmp(a, b));
}
