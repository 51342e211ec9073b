//! Temperature and season axes.
//!
//! Ticks are keyed by value, so when the domain changes existing ticks
//! slide to their new position and only new values are added.

use dioxus::prelude::*;
use wxv_violin::frame::{AxisTick, BandTick};

/// Outer tick length, in pixels.
const TICK_SIZE: f64 = 6.0;

#[derive(Props, Clone, PartialEq)]
pub struct YAxisProps {
    pub ticks: Vec<AxisTick>,
    pub height: f64,
    pub transition_ms: u32,
}

/// Vertical temperature axis on the left of the plot.
#[component]
pub fn YAxis(props: YAxisProps) -> Element {
    let domain_path = format!("M{},{}H0V0H{}", -TICK_SIZE, props.height, -TICK_SIZE);
    let ms = props.transition_ms;
    let tick_x2 = -TICK_SIZE;
    let label_x = -(TICK_SIZE + 3.0);

    rsx! {
        g {
            class: "y-axis",
            fill: "none",
            "font-size": "10",
            "font-family": "sans-serif",
            "text-anchor": "end",
            path { class: "domain", stroke: "currentColor", d: "{domain_path}" }
            for tick in props.ticks {
                g {
                    key: "{tick.value}",
                    class: "tick",
                    style: "transform: translate(0px, {tick.offset}px); transition: transform {ms}ms ease-in-out;",
                    line { stroke: "currentColor", x2: "{tick_x2}" }
                    text {
                        fill: "currentColor",
                        x: "{label_x}",
                        dy: "0.32em",
                        "{tick.label}"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct XAxisProps {
    pub ticks: Vec<BandTick>,
    pub width: f64,
    pub height: f64,
}

/// Horizontal season axis along the bottom of the plot.
#[component]
pub fn XAxis(props: XAxisProps) -> Element {
    let domain_path = format!("M0,{}V0H{}V{}", TICK_SIZE, props.width, TICK_SIZE);
    let label_y = TICK_SIZE + 3.0;

    rsx! {
        g {
            class: "x-axis",
            transform: "translate(0, {props.height})",
            fill: "none",
            "font-size": "10",
            "font-family": "sans-serif",
            "text-anchor": "middle",
            path { class: "domain", stroke: "currentColor", d: "{domain_path}" }
            for tick in props.ticks {
                g {
                    key: "{tick.season}",
                    class: "tick",
                    transform: "translate({tick.offset}, 0)",
                    line { stroke: "currentColor", y2: "{TICK_SIZE}" }
                    text {
                        fill: "currentColor",
                        y: "{label_y}",
                        dy: "0.71em",
                        "{tick.season}"
                    }
                }
            }
        }
    }
}
