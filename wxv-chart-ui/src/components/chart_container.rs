//! Fixed-size frame around the violin chart.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id of the chart's wrapper
    pub id: String,
    pub children: Element,
}

/// Sized from the chart configuration.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let state = use_context::<AppState>();
    let (width, height) = {
        let config = state.config.read();
        (config.width, config.height)
    };

    rsx! {
        div {
            id: "{props.id}",
            style: "position: relative; width: {width}px; min-height: {height}px; overflow: visible;",
            {props.children}
        }
    }
}
