//! Result rendering.

/// Fractional digits printed before trimming.
const FRACTION_DIGITS: usize = 10;

/// Whole values print without a point. Everything else prints with ten
/// fractional digits, then loses trailing zeros and a bare trailing point.
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        // also catches -0.0
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }

    let fixed = format!("{value:.prec$}", prec = FRACTION_DIGITS);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}
