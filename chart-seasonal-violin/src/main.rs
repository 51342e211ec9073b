//! Seasonal Daily Temperature Violin Chart
//!
//! Draws one mirrored histogram ("violin") of daily maximum temperature and
//! one of daily minimum temperature per season. A dropdown narrows the
//! chart to a single season; shapes fade in and out and morph between
//! filters, and hovering a shape shows the season's median for that series.
//!
//! Data flow:
//! 1. `build.rs` copies `weather.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is parsed once into an immutable `Dataset`.
//! 4. `ViolinChart` rebuilds its frame whenever the season filter changes.

use dioxus::prelude::*;
use wxv_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, SeasonSelector, SeriesLegend,
    ViolinChart,
};
use wxv_chart_ui::state::{AppState, LoadProblem};
use wxv_weather::load_csv;

/// Daily weather observations (date, TMAX, TMIN, ...).
const WEATHER_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/weather.csv"));

/// Name of the bundled file, shown in load errors.
const WEATHER_SOURCE: &str = "weather.csv";

/// Chart container DOM element ID.
const CHART_ID: &str = "vis";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("seasonal-violin-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the dataset once on mount
    use_effect(move || {
        if WEATHER_CSV.trim().is_empty() {
            state.load_error.set(Some(LoadProblem::new(
                WEATHER_SOURCE,
                "No weather data was bundled with this build.",
            )));
            state.loading.set(false);
            return;
        }

        match load_csv(WEATHER_CSV) {
            Ok(dataset) if dataset.is_empty() => {
                state
                    .load_error
                    .set(Some(LoadProblem::new(WEATHER_SOURCE, "No weather records to plot")));
            }
            Ok(dataset) => {
                log::info!("Loaded {} weather records", dataset.len());
                state.dataset.set(Some(dataset));
            }
            Err(e) => {
                log::error!("Failed to load {}: {}", WEATHER_SOURCE, e);
                state
                    .load_error
                    .set(Some(LoadProblem::from_load_error(WEATHER_SOURCE, &e)));
            }
        }
        state.loading.set(false);
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Daily Temperature Extremes by Season".to_string(),
            }

            if let Some(problem) = (state.load_error)() {
                ErrorDisplay { problem }
            } else if (state.loading)() {
                LoadingSpinner { source: WEATHER_SOURCE.to_string() }
            } else {
                SeasonSelector {}

                ChartContainer {
                    id: CHART_ID.to_string(),
                    ViolinChart {}
                }

                SeriesLegend {}
            }
        }
    }
}
