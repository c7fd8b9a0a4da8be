//! Rounding and formatting shared by the funnel calculation and its reports.

/// Magnitude from which an `f64` no longer carries fractional cents.
const NO_CENTS_MAGNITUDE: f64 = 1e15;

/// Rounds a value to two decimal places.
///
/// The value is scaled to cents and rounded half away from zero on the
/// scaled binary value. A value stored just below a decimal midpoint can
/// therefore round up (`0.015` gives `0.02`).
///
/// Infinite and NaN values come back unchanged, as do magnitudes of `1e15`
/// and above, which have no cents to round and would overflow when scaled.
///
/// # Examples
///
/// ```
/// use funnel_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(22.222222), 22.22);
/// assert_eq!(round_half_up(0.125), 0.13);
/// assert_eq!(round_half_up(-0.125), -0.13); // Away from zero
/// assert!(round_half_up(f64::INFINITY).is_infinite());
/// ```
pub fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= NO_CENTS_MAGNITUDE {
        return value;
    }
    (value * 100.0).round() / 100.0
}

/// Formats an amount with two decimals and `,` thousands grouping.
///
/// Non-finite values are spelled out as `Infinity`, `-Infinity` or `NaN`
/// so a degenerate funnel is shown as-is.
///
/// # Examples
///
/// ```
/// use funnel_core::calculations::common::format_amount;
///
/// assert_eq!(format_amount(2_500_000.0), "2,500,000.00");
/// assert_eq!(format_amount(22.2222), "22.22");
/// assert_eq!(format_amount(f64::INFINITY), "Infinity");
/// ```
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let rounded = round_half_up(value);
    // Avoid printing "-0.00".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}
