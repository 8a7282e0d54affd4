/// Display formatting helpers for the rendered net-worth summary.

/// Format a USD amount as a currency string: leading symbol, grouped
/// thousands, exactly two fraction digits.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${}", amount);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(&format!("{:.2}", amount.abs())))
}

/// Format a plain numeric field with at most two fraction digits.
pub fn format_decimal(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Insert thousands separators into an unsigned fixed-point string.
fn group_thousands(fixed: &str) -> String {
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{}.{}", grouped, fraction),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(3000.0), "$3,000.00");
        assert_eq!(format_currency(0.5), "$0.50");
        assert_eq!(format_currency(-1234.5), "-$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(1.5), "1.5");
        assert_eq!(format_decimal(2000.0), "2000");
        assert_eq!(format_decimal(10.0 / 3.0), "3.33");
        assert_eq!(format_decimal(0.0), "0");
        assert_eq!(format_decimal(-2.75), "-2.75");
    }

    #[test]
    fn test_non_finite_values_pass_through() {
        assert_eq!(format_decimal(f64::NAN), "NaN");
        assert_eq!(format_currency(f64::NAN), "$NaN");
    }
}
