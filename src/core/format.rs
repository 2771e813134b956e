//! Display formatting for computed values.
//!
//! Every value that reaches the screen passes through one of three pure,
//! total conversions:
//!
//! - [`format_result`]: canonical display text for a computed result
//! - [`format_plain`]: direct number-to-string conversion, no rounding
//! - [`format_exponential`]: fixed 9-digit mantissa scientific notation
//!
//! None of them panic, and all map non-finite input to [`ERROR`].

/// Display sentinel for any invalid arithmetic result.
pub const ERROR: &str = "Error";

/// Fractional mantissa digits used by exponential notation.
pub const EXPONENT_DIGITS: usize = 9;

/// Decimal places a non-integer result is rounded to.
pub const FIXED_DIGITS: usize = 9;

/// Results with a larger magnitude are shown in exponential notation.
pub const UPPER_PLAIN_LIMIT: f64 = 1e12;

/// Non-zero results with a smaller magnitude are shown in exponential notation.
pub const LOWER_PLAIN_LIMIT: f64 = 1e-9;

/// Enough digits to print any finite `f64` exactly.
const EXACT_DIGITS: usize = 1100;

/// Convert a computed result into its canonical display string.
///
/// # Example
///
/// ```rust
/// use deskcalc::core::format_result;
///
/// assert_eq!(format_result(20.0), "20");
/// assert_eq!(format_result(1.0 / 3.0), "0.333333333");
/// assert_eq!(format_result(0.1 + 0.2), "0.3");
/// assert_eq!(format_result(2e13), "2.000000000e+13");
/// assert_eq!(format_result(f64::NAN), "Error");
/// ```
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return ERROR.to_string();
    }

    let magnitude = value.abs();
    if magnitude > UPPER_PLAIN_LIMIT || (magnitude != 0.0 && magnitude < LOWER_PLAIN_LIMIT) {
        return format_exponential(value);
    }

    if value.fract() == 0.0 {
        return format_plain(value);
    }

    let rounded = to_fixed(value, FIXED_DIGITS)
        .parse::<f64>()
        .unwrap_or(value);
    format_plain(rounded)
}

/// `value` with `places` decimals, exact ties rounded away from zero.
fn to_fixed(value: f64, places: usize) -> String {
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let digits = format!("{int_part}{frac_part}");

    let (rounded, _) = round_digits(&digits, int_part.len() + places);
    let (int_part, frac_part) = rounded.split_at(rounded.len() - places);
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if places == 0 {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}.{frac_part}")
    }
}

/// Keep the first `keep` digits of an exact digit string, rounding half
/// away from zero. The flag reports a carry out of the leading digit, in
/// which case the result is one digit longer.
fn round_digits(digits: &str, keep: usize) -> (String, bool) {
    let mut kept: Vec<u8> = digits.bytes().take(keep).collect();
    kept.resize(keep, b'0');

    // The expansion is exact, so anything from '5' on is at least half.
    let round_up = digits.as_bytes().get(keep).is_some_and(|d| *d >= b'5');
    let mut carried = false;
    if round_up {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, b'1');
                carried = true;
                break;
            }
            i -= 1;
            if kept[i] == b'9' {
                kept[i] = b'0';
            } else {
                kept[i] += 1;
                break;
            }
        }
    }
    (kept.into_iter().map(char::from).collect(), carried)
}

/// Render `value` as `d.ddddddddde±x`.
///
/// ```rust
/// use deskcalc::core::format_exponential;
///
/// assert_eq!(format_exponential(1234567890123.0), "1.234567890e+12");
/// assert_eq!(format_exponential(-0.00000000025), "-2.500000000e-10");
/// ```
pub fn format_exponential(value: f64) -> String {
    if !value.is_finite() {
        return ERROR.to_string();
    }

    let exact = format!("{:.*e}", EXACT_DIGITS, value.abs());
    let (mantissa, exponent) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let (mut rounded, carried) = round_digits(&digits, EXPONENT_DIGITS + 1);
    if carried {
        // 9.999999999|5 became 10.000000000
        rounded.truncate(EXPONENT_DIGITS + 1);
        exponent += 1;
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    let (lead, rest) = rounded.split_at(1);
    format!("{sign}{lead}.{rest}e{exponent_sign}{}", exponent.abs())
}

/// Direct number-to-string conversion.
///
/// Uses the shortest digit sequence that round-trips, laid out plainly for
/// magnitudes in `[1e-6, 1e21)` and as `d.ddde±x` outside it. Both zeros
/// print as `0`.
///
/// ```rust
/// use deskcalc::core::format_plain;
///
/// assert_eq!(format_plain(-5.0), "-5");
/// assert_eq!(format_plain(0.05), "0.05");
/// assert_eq!(format_plain(-0.0), "0");
/// assert_eq!(format_plain(1.5e-7), "1.5e-7");
/// ```
pub fn format_plain(value: f64) -> String {
    if !value.is_finite() {
        return ERROR.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3".
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let body = layout_digits(&digits, exponent);
    if value.is_sign_negative() {
        format!("-{body}")
    } else {
        body
    }
}

/// Place the decimal point for `digits × 10^exponent` (one leading digit).
fn layout_digits(digits: &str, exponent: i32) -> String {
    let len = digits.len() as i32;
    // Position of the decimal point relative to the start of `digits`.
    let point = exponent + 1;

    if len <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{sign}{}", exponent.abs())
        } else {
            format!("{lead}.{rest}e{sign}{}", exponent.abs())
        }
    }
}

/// Parse a display string as a number.
///
/// Anything that is not a well-formed decimal (the error sentinel, a lone
/// sign) yields NaN, which formats back to [`ERROR`].
pub fn parse_display(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_values_format_as_error() {
        assert_eq!(format_result(f64::NAN), ERROR);
        assert_eq!(format_result(f64::INFINITY), ERROR);
        assert_eq!(format_result(f64::NEG_INFINITY), ERROR);
        assert_eq!(format_plain(f64::NAN), ERROR);
        assert_eq!(format_exponential(f64::INFINITY), ERROR);
    }

    #[test]
    fn integers_have_no_fractional_part() {
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(20.0), "20");
        assert_eq!(format_result(-42.0), "-42");
        assert_eq!(format_result(123456789012.0), "123456789012");
        assert_eq!(format_result(1e12), "1000000000000");
    }

    #[test]
    fn fractions_round_to_nine_places() {
        assert_eq!(format_result(1.0 / 3.0), "0.333333333");
        assert_eq!(format_result(2.0 / 3.0), "0.666666667");
        assert_eq!(format_result(-7.5), "-7.5");
        assert_eq!(format_result(0.1 + 0.2), "0.3");
        assert_eq!(format_result(1.1 * 1.1), "1.21");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(format_result(1.0 / 1024.0), "0.000976563");
        assert_eq!(format_result(-1.0 / 1024.0), "-0.000976563");
        assert_eq!(format_result(3.0 / 1024.0), "0.002929688");
        assert_eq!(format_result(1234567890500.0), "1.234567891e+12");
        assert_eq!(format_result(-1234567890500.0), "-1.234567891e+12");
    }

    #[test]
    fn exponential_carry_bumps_the_exponent() {
        assert_eq!(format_exponential(9999999999.5), "1.000000000e+10");
        assert_eq!(format_exponential(99999999995.0), "1.000000000e+11");
        assert_eq!(format_exponential(0.0), "0.000000000e+0");
    }

    #[test]
    fn round_digits_carries_through_nines() {
        assert_eq!(round_digits("1995", 3), ("200".to_string(), false));
        assert_eq!(round_digits("9996", 3), ("1000".to_string(), true));
        assert_eq!(round_digits("1234", 3), ("123".to_string(), false));
        assert_eq!(round_digits("12", 4), ("1200".to_string(), false));
    }

    #[test]
    fn large_and_tiny_values_use_exponential_notation() {
        assert_eq!(format_result(1e13), "1.000000000e+13");
        assert_eq!(format_result(-2.5e15), "-2.500000000e+15");
        assert_eq!(format_result(1e-10), "1.000000000e-10");
        assert_eq!(format_result(3.2e-12), "3.200000000e-12");
    }

    #[test]
    fn rounded_small_fractions_fall_back_to_plain_layout() {
        assert_eq!(format_result(1.23e-7), "1.23e-7");
        assert_eq!(format_result(0.000001), "0.000001");
        assert_eq!(format_result(0.0000012345678), "0.000001235");
    }

    #[test]
    fn plain_layout_matches_number_magnitude() {
        assert_eq!(format_plain(5.0), "5");
        assert_eq!(format_plain(-5.0), "-5");
        assert_eq!(format_plain(1234.5), "1234.5");
        assert_eq!(format_plain(0.05), "0.05");
        assert_eq!(format_plain(0.000001), "0.000001");
        assert_eq!(format_plain(1e-7), "1e-7");
        assert_eq!(format_plain(1e21), "1e+21");
        assert_eq!(format_plain(1.5e22), "1.5e+22");
        assert_eq!(format_plain(1e20), "100000000000000000000");
        assert_eq!(format_plain(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn exponential_always_signs_the_exponent() {
        assert_eq!(format_exponential(1.0), "1.000000000e+0");
        assert_eq!(format_exponential(123456789.0), "1.234567890e+8");
        assert_eq!(format_exponential(0.5), "5.000000000e-1");
    }

    #[test]
    fn parse_display_is_lenient_only_for_numbers() {
        assert_eq!(parse_display("12"), 12.0);
        assert_eq!(parse_display("0."), 0.0);
        assert_eq!(parse_display("-3.5"), -3.5);
        assert_eq!(parse_display("1.234567890e+12"), 1234567890000.0);
        assert!(parse_display(ERROR).is_nan());
        assert!(parse_display("-").is_nan());
    }

    #[test]
    fn formatting_is_deterministic() {
        let value = 22.0 / 7.0;
        assert_eq!(format_result(value), format_result(value));
        assert_eq!(format_result(value), "3.142857143");
    }
}
