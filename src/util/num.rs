/// Significant digits used when rendering numbers.
pub const PRECISION: i32 = 6;

/// Formats a number like C's `%g`.
///
/// Uses [`PRECISION`] significant digits and strips trailing zeros. Switches
/// to scientific notation when the decimal exponent is below `-4` or at least
/// [`PRECISION`].
///
/// ## Parameters
/// - `value`: The number to format.
///
/// ## Returns
/// The shortest `%g` rendering of `value`.
///
/// ## Example
/// ```
/// use lioliosh::util::num::format_general;
///
/// assert_eq!(format_general(6.0), "6");
/// assert_eq!(format_general(0.1 + 0.2), "0.3");
/// assert_eq!(format_general(1234567.0), "1.23457e+06");
/// assert_eq!(format_general(0.00001), "1e-05");
/// ```
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round to the target precision first; the rounded exponent decides the
    // notation.
    let scientific = format!("{:.*e}", (PRECISION - 1).unsigned_abs() as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(PRECISION - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Removes trailing zeros after a decimal point, and the point itself when
/// nothing remains after it.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Converts number literal text to an `f64`, rejecting out-of-range values.
///
/// Overflow to infinity and underflow of a nonzero literal (to zero or to a
/// subnormal) are both treated as range errors, like `strtod` reporting
/// `ERANGE`.
///
/// ## Returns
/// - `Some(f64)`: The converted value.
/// - `None`: If the text is not a number or is out of range.
///
/// ## Example
/// ```
/// use lioliosh::util::num::parse_number;
///
/// assert_eq!(parse_number("-2.5"), Some(-2.5));
/// assert_eq!(parse_number("7."), Some(7.0));
/// assert_eq!(parse_number(&"9".repeat(400)), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    let value: f64 = text.parse().ok()?;
    if value.is_infinite() {
        return None;
    }
    let has_nonzero_digit = text.bytes().any(|b| matches!(b, b'1'..=b'9'));
    if has_nonzero_digit && value.abs() < f64::MIN_POSITIVE {
        return None;
    }
    Some(value)
}
