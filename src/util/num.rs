/// Largest magnitude below which every integral `f64` is printed as a plain
/// integer (`2^53`).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Renders an evaluation result for display.
///
/// Integral values within [`MAX_SAFE_INTEGER`] are printed without a
/// fractional part; negative zero prints as `0`. Other finite values use the
/// shortest representation that round-trips, with `.` replaced by
/// `decimal_separator`. Infinities and NaN use Rust's spelling.
///
/// ## Parameters
/// - `value`: The number to render.
/// - `decimal_separator`: The character placed between the integer and
///   fractional parts.
///
/// ## Example
/// ```
/// use calcula::util::num::format_number;
///
/// assert_eq!(format_number(4.0, '.'), "4");
/// assert_eq!(format_number(-0.0, '.'), "0");
/// assert_eq!(format_number(2.5, ','), "2,5");
/// assert_eq!(format_number(f64::INFINITY, ','), "inf");
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_number(value: f64, decimal_separator: char) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        return format!("{value:.0}");
    }
    let text = value.to_string();
    if decimal_separator == '.' {
        text
    } else {
        text.replace('.', &decimal_separator.to_string())
    }
}
