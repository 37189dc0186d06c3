/// Quantizes to `decimals` fractional digits, rounding halves away from zero.
#[must_use]
pub(super) fn quantize_half_away(value: f64, decimals: usize) -> f64 {
    let factor = 10.0_f64.powi(decimals as i32);
    let quantized = (value * factor).round() / factor;
    if quantized == 0.0 { 0.0 } else { quantized }
}

/// Formats a metric value for an axis or hover label.
///
/// `decimals == 0` renders a plain integer with no trailing separator.
/// When the value is currency-typed, `show_unit` gates the `"$"` prefix;
/// otherwise it gates the `unit` suffix (e.g. `"%"`) after the numeral.
#[must_use]
pub fn format_metric(
    value: f64,
    decimals: usize,
    is_currency: bool,
    show_unit: bool,
    unit: &str,
) -> String {
    let quantized = quantize_half_away(value, decimals);
    let body = format!("{quantized:.decimals$}");

    let mut text = String::with_capacity(body.len() + unit.len() + 1);
    if is_currency && show_unit {
        text.push('$');
    }
    text.push_str(&body);
    if show_unit && !is_currency && !unit.is_empty() {
        text.push_str(unit);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::format_metric;

    #[test]
    fn zero_decimals_renders_a_plain_integer() {
        assert_eq!(format_metric(14.0, 0, false, false, ""), "14");
        assert_eq!(format_metric(14.6, 0, false, false, ""), "15");
    }

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(format_metric(0.125, 2, false, false, ""), "0.13");
        assert_eq!(format_metric(-0.125, 2, false, false, ""), "-0.13");
        assert_eq!(format_metric(2.5, 0, false, false, ""), "3");
    }

    #[test]
    fn currency_prefix_is_gated_by_show_unit() {
        assert_eq!(format_metric(1.5, 2, true, true, ""), "$1.50");
        assert_eq!(format_metric(1.5, 2, true, false, ""), "1.50");
    }

    #[test]
    fn unit_suffix_follows_the_numeral() {
        assert_eq!(format_metric(14.9, 1, false, true, "%"), "14.9%");
        assert_eq!(format_metric(14.9, 1, false, false, "%"), "14.9");
    }

    #[test]
    fn negative_zero_is_normalized() {
        assert_eq!(format_metric(-0.0001, 2, false, false, ""), "0.00");
    }
}
