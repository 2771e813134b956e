//! Operand entry accumulation.
//!
//! While the user types, an operand is kept as text so in-progress forms
//! like `"12."` survive. It becomes a number only at the compute boundary.

use super::format::{format_exponential, format_plain, parse_display, ERROR};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single keypad entry key: a decimal digit or the decimal point.
///
/// Prefer [`DigitKey::digit`] or [`DigitKey::from_char`], which reject
/// values above 9. A `Digit` built directly with a larger value is entered
/// as `9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigitKey {
    Digit(u8),
    Point,
}

impl DigitKey {
    /// Create a digit key, rejecting anything above 9.
    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self::Digit(value))
    }

    /// Decode `'0'..='9'` and `'.'`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Point),
            _ => c.to_digit(10).map(|d| Self::Digit(d as u8)),
        }
    }

    /// Display character for the key. Out-of-range digits clamp to `'9'`.
    pub fn as_char(self) -> char {
        match self {
            Self::Digit(d) => char::from(b'0' + d.min(9)),
            Self::Point => '.',
        }
    }
}

/// Operand text as shown on the display.
///
/// Never empty; defaults to `"0"`. Entry keeps at most one decimal point.
///
/// # Example
///
/// ```rust
/// use deskcalc::core::{DigitKey, Operand};
///
/// let mut operand = Operand::zero();
/// operand.push(DigitKey::Digit(1), 18);
/// operand.push(DigitKey::Point, 18);
/// operand.push(DigitKey::Point, 18);
/// operand.push(DigitKey::Digit(5), 18);
///
/// assert_eq!(operand.as_str(), "1.5");
/// assert_eq!(operand.value(), 1.5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operand(String);

impl Default for Operand {
    fn default() -> Self {
        Self::zero()
    }
}

impl Operand {
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// The error sentinel as an operand.
    pub fn error() -> Self {
        Self(ERROR.to_string())
    }

    /// Start a new operand from the first key of a fresh entry.
    pub fn fresh(key: DigitKey) -> Self {
        match key {
            DigitKey::Point => Self("0.".to_string()),
            DigitKey::Digit(_) => Self(key.as_char().to_string()),
        }
    }

    /// Operand holding the direct string conversion of `value`.
    pub fn from_value(value: f64) -> Self {
        Self(format_plain(value))
    }

    /// Wrap already formatted display text. Empty text becomes `"0"`.
    pub fn from_display(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Self::zero()
        } else {
            Self(text)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value; NaN when the text is not a number.
    pub fn value(&self) -> f64 {
        parse_display(&self.0)
    }

    pub fn is_zero_literal(&self) -> bool {
        self.0 == "0"
    }

    pub fn is_error(&self) -> bool {
        self.0 == ERROR
    }

    /// Append a key to an operand that is being extended.
    ///
    /// A second decimal point is ignored and a lone `"0"` is replaced by the
    /// next digit. Text longer than `max_len` is rewritten in exponential
    /// notation. Returns `false` when the key was ignored.
    pub fn push(&mut self, key: DigitKey, max_len: usize) -> bool {
        if key == DigitKey::Point && self.0.contains('.') {
            return false;
        }

        if self.is_zero_literal() && key != DigitKey::Point {
            self.0 = key.as_char().to_string();
        } else {
            self.0.push(key.as_char());
        }

        if self.0.chars().count() > max_len {
            self.0 = format_exponential(self.value());
        }
        true
    }

    /// Drop the last character, falling back to `"0"` when only a digit
    /// (optionally signed) would remain.
    pub fn backspace(&mut self) {
        let len = self.0.chars().count();
        if len == 1 || (len == 2 && self.0.starts_with('-')) {
            *self = Self::zero();
        } else {
            self.0.pop();
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = 18;

    fn typed(keys: &str) -> Operand {
        let mut operand = Operand::zero();
        for c in keys.chars() {
            operand.push(DigitKey::from_char(c).unwrap(), MAX);
        }
        operand
    }

    #[test]
    fn digit_key_decodes_chars() {
        assert_eq!(DigitKey::from_char('7'), Some(DigitKey::Digit(7)));
        assert_eq!(DigitKey::from_char('.'), Some(DigitKey::Point));
        assert_eq!(DigitKey::from_char('a'), None);
        assert_eq!(DigitKey::digit(10), None);
        assert_eq!(DigitKey::Digit(3).as_char(), '3');
    }

    #[test]
    fn out_of_range_digit_enters_as_nine() {
        assert_eq!(DigitKey::Digit(12).as_char(), '9');
        assert_eq!(Operand::fresh(DigitKey::Digit(200)).as_str(), "9");

        let mut operand = Operand::from_display("1");
        operand.push(DigitKey::Digit(10), MAX);
        assert_eq!(operand.as_str(), "19");
    }

    #[test]
    fn leading_zero_is_replaced() {
        assert_eq!(typed("0").as_str(), "0");
        assert_eq!(typed("007").as_str(), "7");
        assert_eq!(typed("0.").as_str(), "0.");
        assert_eq!(typed(".05").as_str(), "0.05");
    }

    #[test]
    fn second_decimal_point_is_ignored() {
        let mut operand = typed("3.1");
        assert!(!operand.push(DigitKey::Point, MAX));
        assert_eq!(operand.as_str(), "3.1");
    }

    #[test]
    fn fresh_entry_starts_from_key() {
        assert_eq!(Operand::fresh(DigitKey::Point).as_str(), "0.");
        assert_eq!(Operand::fresh(DigitKey::Digit(4)).as_str(), "4");
    }

    #[test]
    fn overlong_entry_switches_to_exponential() {
        let operand = typed("1234567890123456789");
        assert_eq!(operand.as_str(), "1.234567890e+18");

        let operand = typed("1234567890500000000");
        assert_eq!(operand.as_str(), "1.234567891e+18");

        let operand = typed("123456789012345678");
        assert_eq!(operand.as_str(), "123456789012345678");
    }

    #[test]
    fn backspace_trims_or_resets() {
        let mut operand = Operand::from_display("12");
        operand.backspace();
        assert_eq!(operand.as_str(), "1");
        operand.backspace();
        assert_eq!(operand.as_str(), "0");

        let mut negative = Operand::from_display("-5");
        negative.backspace();
        assert_eq!(negative.as_str(), "0");

        let mut decimal = Operand::from_display("2.");
        decimal.backspace();
        assert_eq!(decimal.as_str(), "2");
    }

    #[test]
    fn error_operand_has_no_value() {
        let operand = Operand::error();
        assert!(operand.is_error());
        assert!(operand.value().is_nan());
    }

    #[test]
    fn empty_display_text_defaults_to_zero() {
        assert_eq!(Operand::from_display("").as_str(), "0");
        assert_eq!(Operand::from_value(-0.0).as_str(), "0");
    }
}
