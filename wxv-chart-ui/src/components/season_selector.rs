//! Dropdown selector for the season filter.

use crate::state::AppState;
use dioxus::prelude::*;
use wxv_weather::SeasonFilter;

/// Season dropdown selector.
///
/// Writes the chosen filter into AppState; the chart re-renders on every
/// change.
#[component]
pub fn SeasonSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.filter)();
    let options: Vec<(String, &'static str, bool)> = SeasonFilter::options()
        .into_iter()
        .map(|f| (f.to_string(), f.label(), f == selected))
        .collect();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<SeasonFilter>() {
        Ok(filter) => {
            log::info!("season-select: {}", filter);
            state.filter.set(filter);
        }
        Err(e) => log::warn!("season-select: {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "season-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Season: "
            }
            select {
                id: "season-select",
                onchange: on_change,
                for (value, label, is_selected) in options {
                    option {
                        value: "{value}",
                        selected: is_selected,
                        "{label}"
                    }
                }
            }
        }
    }
}
