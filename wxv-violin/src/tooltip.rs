//! Hover tooltip text.

use wxv_weather::Series;

/// Pointer offset of the tooltip box, in pixels.
pub const OFFSET_X: f64 = 20.0;
pub const OFFSET_Y: f64 = -28.0;

/// Median with two decimals, or `N/A` when there is none.
pub fn format_median(median: Option<f64>) -> String {
    match median {
        Some(value) if value.is_finite() => format!("{:.2}", value),
        _ => "N/A".to_string(),
    }
}

/// Bold heading of the tooltip, e.g. "Maximum Temperature Median".
pub fn heading(series: Series) -> String {
    format!("{} Temperature Median", series.label())
}

/// Value part of the tooltip, e.g. "80.00°F".
pub fn value_text(median: Option<f64>) -> String {
    format!("{}°F", format_median(median))
}

/// Full tooltip text as one line.
pub fn tooltip_text(series: Series, median: Option<f64>) -> String {
    format!("{}: {}", heading(series), value_text(median))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wxv_utils::stats::median;

    #[test]
    fn test_median_of_three() {
        let text = tooltip_text(Series::Max, median([70.0, 80.0, 90.0]));
        assert!(text.contains("80.00"));
        assert_eq!(text, "Maximum Temperature Median: 80.00°F");
    }

    #[test]
    fn test_empty_group_is_not_available() {
        let text = tooltip_text(Series::Min, median(Vec::new()));
        assert!(text.contains("N/A"));
        assert_eq!(text, "Minimum Temperature Median: N/A°F");
    }

    #[test]
    fn test_zero_median_is_a_value() {
        assert_eq!(format_median(Some(0.0)), "0.00");
        assert_eq!(format_median(Some(-3.456)), "-3.46");
    }
}
