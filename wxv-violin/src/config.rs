//! Visual parameters of the chart.

use serde::{Deserialize, Serialize};
use wxv_weather::Series;

/// Space reserved around the plot area for axes and titles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 80.0,
            right: 60.0,
            bottom: 60.0,
            left: 100.0,
        }
    }
}

/// Chart configuration.
///
/// Every field has a default, so a partial JSON document is enough to
/// override a few values:
///
/// ```rust
/// use wxv_violin::ChartConfig;
///
/// let config: ChartConfig = serde_json::from_str(r#"{"bin_target": 10}"#).unwrap();
/// assert_eq!(config.bin_target, 10);
/// assert_eq!(config.width, 800.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Outer SVG width in pixels
    pub width: f64,
    /// Outer SVG height in pixels
    pub height: f64,
    pub margins: Margins,
    /// Approximate number of histogram bins across the temperature domain
    pub bin_target: usize,
    /// Approximate number of temperature axis ticks
    pub y_ticks: usize,
    /// Inner and outer padding of the season bands, as a fraction of a step
    pub band_padding: f64,
    pub max_color: String,
    pub min_color: String,
    /// Resting opacity of a violin shape
    pub shape_opacity: f64,
    /// Enter fade-in, path morph and axis transitions (ms)
    pub transition_ms: u32,
    /// Exit fade-out (ms)
    pub exit_ms: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margins: Margins::default(),
            bin_target: 20,
            y_ticks: 10,
            band_padding: 0.05,
            max_color: "red".to_string(),
            min_color: "blue".to_string(),
            shape_opacity: 0.6,
            transition_ms: 750,
            exit_ms: 500,
        }
    }
}

impl ChartConfig {
    /// Width of the plot area inside the margins.
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margins.left - self.margins.right).max(0.0)
    }

    /// Height of the plot area inside the margins.
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margins.top - self.margins.bottom).max(0.0)
    }

    /// Fill colour for a temperature series.
    pub fn color(&self, series: Series) -> &str {
        match series {
            Series::Max => &self.max_color,
            Series::Min => &self.min_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plot_area() {
        let config = ChartConfig::default();
        assert_eq!(config.inner_width(), 640.0);
        assert_eq!(config.inner_height(), 460.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ChartConfig =
            serde_json::from_str(r##"{"max_color": "#d62728", "margins": {"top": 10, "right": 10, "bottom": 10, "left": 10}}"##)
                .unwrap();
        assert_eq!(config.color(Series::Max), "#d62728");
        assert_eq!(config.color(Series::Min), "blue");
        assert_eq!(config.inner_width(), 780.0);
        assert_eq!(config.exit_ms, 500);
    }
}
