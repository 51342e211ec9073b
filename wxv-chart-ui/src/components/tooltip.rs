//! Hover tooltip showing a series median.

use dioxus::prelude::*;
use wxv_violin::tooltip;
use wxv_weather::Series;

/// What the tooltip shows and where, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipState {
    pub series: Series,
    pub median: Option<f64>,
    pub x: f64,
    pub y: f64,
}

#[derive(Props, Clone, PartialEq)]
pub struct TooltipProps {
    /// Hidden when None
    pub state: Option<TooltipState>,
}

/// Floating tooltip next to the pointer.
#[component]
pub fn Tooltip(props: TooltipProps) -> Element {
    let Some(tip) = props.state else {
        return rsx! {
            div { id: "tooltip", style: "display: none;" }
        };
    };
    let left = tip.x + tooltip::OFFSET_X;
    let top = tip.y + tooltip::OFFSET_Y;
    let heading = tooltip::heading(tip.series);
    let value = tooltip::value_text(tip.median);

    rsx! {
        div {
            id: "tooltip",
            style: "position: fixed; left: {left}px; top: {top}px; display: block; background: white; padding: 5px; border: 1px solid #ccc; border-radius: 5px; pointer-events: none; font-size: 12px;",
            strong { "{heading}" }
            ": {value}"
        }
    }
}
