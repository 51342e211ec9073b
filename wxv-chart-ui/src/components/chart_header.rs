//! Title block with a caption describing the records on screen.

use crate::state::AppState;
use dioxus::prelude::*;
use wxv_utils::dates;
use wxv_weather::{Dataset, SeasonFilter};

/// Caption such as "184 of 730 daily records (2022-01-01 to 2023-12-31), Summer".
pub fn caption(dataset: &Dataset, filter: SeasonFilter) -> Option<String> {
    let (first, last) = dataset.date_span()?;
    let shown = dataset.records().iter().filter(|r| filter.matches(r)).count();
    Some(format!(
        "{} of {} daily records ({} to {}), {}",
        shown,
        dataset.len(),
        dates::format_date(&first),
        dates::format_date(&last),
        filter.label()
    ))
}

#[component]
pub fn ChartHeader(title: String) -> Element {
    let state = use_context::<AppState>();
    let filter = (state.filter)();
    let text = state
        .dataset
        .read()
        .as_ref()
        .and_then(|dataset| caption(dataset, filter));

    rsx! {
        header {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{title}"
            }
            if let Some(text) = text {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{text}"
                }
            }
        }
    }
}
