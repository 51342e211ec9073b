//! Reusable Dioxus RSX components for the seasonal violin chart.

mod axes;
mod chart_container;
mod chart_header;
mod error_display;
mod legend;
mod loading_spinner;
mod season_selector;
mod tooltip;
mod violin_chart;

pub use axes::{XAxis, YAxis};
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use legend::SeriesLegend;
pub use loading_spinner::LoadingSpinner;
pub use season_selector::SeasonSelector;
pub use tooltip::{Tooltip, TooltipState};
pub use violin_chart::ViolinChart;
