/// Decimal separator used when none is supplied.
pub const DEFAULT_DECIMAL_SEP: &str = ",";

/// Thousands separator used when none is supplied.
pub const DEFAULT_THOUSANDS_SEP: &str = ".";

// An f64 carries at most 17 significant decimal digits; beyond that the
// rounding scale stops being representable.
const MAX_DECIMALS: u32 = 17;

/// Format `value` with the default separators (decimal `,`, thousands `.`).
pub fn format_number(value: f64, decimals: i32) -> String {
    format_number_with(value, decimals, DEFAULT_DECIMAL_SEP, DEFAULT_THOUSANDS_SEP)
}

/// Format `value` to a fixed number of decimal places, grouping integer
/// digits in threes.
///
/// Rounds half-up on the decimal magnitude. Non-finite values render as
/// zero and a negative `decimals` counts as its absolute value; the
/// function never fails.
pub fn format_number_with(
    value: f64,
    decimals: i32,
    decimal_sep: &str,
    thousands_sep: &str,
) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let decimals = decimals.unsigned_abs().min(MAX_DECIMALS);
    let negative = value < 0.0;

    let scale = 10f64.powi(decimals as i32);
    let mut magnitude = (value.abs() * scale).round() / scale;
    if !magnitude.is_finite() {
        magnitude = value.abs();
    }

    let fixed = format!("{:.*}", decimals as usize, magnitude);
    let (int_digits, frac_digits) = match fixed.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (fixed.as_str(), ""),
    };

    let mut out = String::with_capacity(fixed.len() + int_digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, c) in int_digits.chars().enumerate() {
        if i > 0 && (int_digits.len() - i) % 3 == 0 {
            out.push_str(thousands_sep);
        }
        out.push(c);
    }
    if decimals > 0 {
        out.push_str(decimal_sep);
        out.push_str(frac_digits);
    }
    out
}
