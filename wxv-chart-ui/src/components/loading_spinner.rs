//! Placeholder shown while the bundled CSV is parsed.

use crate::state::AppState;
use dioxus::prelude::*;

/// Reserves the chart's footprint so the page does not jump once the
/// violins appear.
#[component]
pub fn LoadingSpinner(source: String) -> Element {
    let state = use_context::<AppState>();
    let (width, height) = {
        let config = state.config.read();
        (config.width, config.height)
    };

    rsx! {
        div {
            style: "box-sizing: border-box; width: {width}px; height: {height}px; border: 1px dashed #BDBDBD; display: flex; align-items: center; justify-content: center; color: #757575; font-size: 13px;",
            "Parsing {source}..."
        }
    }
}
