//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use wxv_violin::ChartConfig;
use wxv_weather::{Dataset, LoadError, SeasonFilter};

/// Why the chart could not be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadProblem {
    /// Name of the bundled data file
    pub source: String,
    /// 1-based data row of the failure, if the failure is tied to one
    pub row: Option<usize>,
    pub message: String,
}

impl LoadProblem {
    pub fn new(source: &str, message: impl Into<String>) -> Self {
        Self {
            source: source.to_string(),
            row: None,
            message: message.into(),
        }
    }

    pub fn from_load_error(source: &str, err: &LoadError) -> Self {
        Self {
            source: source.to_string(),
            row: err.row(),
            message: err.to_string(),
        }
    }

    /// Line of the file to look at; the header occupies line 1.
    pub fn line(&self) -> Option<usize> {
        self.row.map(|row| row + 1)
    }
}

/// Shared application state for the seasonal violin chart.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Full dataset (None until loaded); never replaced after load
    pub dataset: Signal<Option<Dataset>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Set when the bundled data cannot be plotted
    pub load_error: Signal<Option<LoadProblem>>,
    /// Season filter chosen in the dropdown
    pub filter: Signal<SeasonFilter>,
    /// Visual parameters of the chart
    pub config: Signal<ChartConfig>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            load_error: Signal::new(None),
            filter: Signal::new(SeasonFilter::All),
            config: Signal::new(ChartConfig::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wxv_weather::load_csv;

    #[test]
    fn test_problem_points_at_file_line() {
        let err = load_csv("date,TMAX,TMIN\n20230115,40,20\n2023-01-16,41,21\n").unwrap_err();
        let problem = LoadProblem::from_load_error("weather.csv", &err);
        assert_eq!(problem.row, Some(2));
        assert_eq!(problem.line(), Some(3));
        assert!(problem.message.contains("2023-01-16"));
    }

    #[test]
    fn test_problem_without_row() {
        let problem = LoadProblem::new("weather.csv", "No weather records to plot");
        assert_eq!(problem.line(), None);
        assert_eq!(problem.source, "weather.csv");
    }
}
