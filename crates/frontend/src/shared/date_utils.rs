/// Utilities for date and time formatting
///
/// Server timestamps are shown as local `DD-MM-YYYY HH:MM:SS`.
use contracts::shared::date_format::format_display;

/// Format an optional server timestamp; missing values show as a dash.
pub fn format_datetime(raw: Option<&str>) -> String {
    match raw {
        Some(s) if !s.trim().is_empty() => format_display(s),
        _ => "-".to_string(),
    }
}

/// Two decimals, no thousands separator.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Whole quantities print without a fraction.
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_datetime() {
        assert_eq!(format_datetime(None), "-");
        assert_eq!(format_datetime(Some("  ")), "-");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime(Some("invalid")), "invalid");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(format_amount(1234.5), "1234.50");
        assert_eq!(format_quantity(12.0), "12");
        assert_eq!(format_quantity(2.5), "2.50");
    }
}
