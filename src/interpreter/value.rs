/// Absolute tolerance for comparisons and truth tests.
pub const EPSILON: f64 = 0.001;

pub fn truth(condition: bool) -> f64 {
    if condition {
        1.0
    } else {
        0.0
    }
}

/// The loop guard of `WHILE`: exact equality with `1.0`, no tolerance.
#[allow(clippy::float_cmp)]
pub fn is_exactly_true(value: f64) -> bool {
    value == 1.0
}

/// Formats `value` like C's `%g`: six significant digits, trailing zeros
/// dropped, exponent form outside `1e-4 ..< 1e6`.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }

    // Rounding to six digits first settles which notation applies.
    let scientific = format!("{:.5e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if (-4..6).contains(&exponent) {
        let decimals = (5 - exponent) as usize;
        strip_trailing_zeros(format!("{:.*}", decimals, value))
    } else {
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa.to_string()),
            if exponent < 0 { '-' } else { '+' },
            exponent.abs()
        )
    }
}

fn strip_trailing_zeros(number: String) -> String {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        number
    }
}
