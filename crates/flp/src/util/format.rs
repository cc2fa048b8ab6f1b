//! Table formatting helpers. All monetary values in this crate are in
//! currency-millions, so the formatters scale accordingly.

/// Format a currency-millions value (e.g., $250.0M, $1.2B)
pub fn format_millions(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000.0 {
        format!("{}${:.2}B", sign, abs_value / 1_000.0)
    } else {
        format!("{}${:.1}M", sign, abs_value)
    }
}

/// Format a percent value that is already in percent units (5.0 -> "5.0%")
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Format a duration in weeks
pub fn format_weeks(value: f64) -> String {
    format!("{value:.1} wk")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_millions() {
        assert_eq!(format_millions(250.0), "$250.0M");
        assert_eq!(format_millions(1_250.0), "$1.25B");
        assert_eq!(format_millions(-42.5), "-$42.5M");
    }

    #[test]
    fn test_format_percent_and_weeks() {
        assert_eq!(format_percent(12.34), "12.3%");
        assert_eq!(format_weeks(6.0), "6.0 wk");
    }
}
