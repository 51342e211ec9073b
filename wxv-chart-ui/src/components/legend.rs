//! Legend naming the fill colour of each temperature series.

use crate::state::AppState;
use dioxus::prelude::*;
use wxv_weather::Series;

#[component]
pub fn SeriesLegend() -> Element {
    let state = use_context::<AppState>();
    let config = state.config.read().clone();
    let entries: Vec<(String, String, String)> = Series::ALL
        .into_iter()
        .map(|series| {
            (
                series.to_string(),
                config.color(series).to_string(),
                format!("{} temperature ({})", series.label(), series),
            )
        })
        .collect();
    let opacity = config.shape_opacity;

    rsx! {
        div {
            style: "margin-top: 12px; padding: 8px 12px; background: #FAFAFA; border-radius: 4px; border: 1px solid #E0E0E0; font-size: 12px; display: flex; gap: 16px; flex-wrap: wrap;",
            for (key, color, label) in entries {
                div {
                    key: "{key}",
                    style: "display: flex; align-items: center; gap: 4px;",
                    span {
                        style: "display: inline-block; width: 16px; height: 10px; background: {color}; opacity: {opacity};",
                    }
                    "{label}"
                }
            }
        }
    }
}
