//! Interactive seasonal violin chart.
//!
//! Every change of the season filter rebuilds the whole `ChartFrame` and
//! reconciles its shapes against the ones on screen through a
//! `ShapeLayer`. Opacity fades and path morphs are CSS transitions; Rust
//! only flips each shape's phase at the right time.

use dioxus::prelude::*;
use wxv_violin::frame::{ChartFrame, ShapeKey, ViolinShape};
use wxv_violin::lifecycle::{Followups, Phase, ShapeLayer};
use wxv_violin::svg::{X_AXIS_TITLE, Y_AXIS_TITLE};
use wxv_violin::{build_frame, ChartConfig};

use super::axes::{XAxis, YAxis};
use super::tooltip::{Tooltip, TooltipState};
use crate::js_bridge;
use crate::state::AppState;

/// Pointer entered a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverEvent {
    pub key: ShapeKey,
    pub median: Option<f64>,
    pub x: f64,
    pub y: f64,
}

/// Fade entering shapes in once painted, and drop exited shapes after
/// their fade-out.
fn schedule_followups(followups: Followups, mut layer: Signal<ShapeLayer>, exit_ms: u32) {
    if !followups.fade_in.is_empty() {
        let keys = followups.fade_in;
        spawn(async move {
            js_bridge::next_paint().await;
            let mut layer = layer.write();
            for key in keys {
                layer.fade_in(key);
            }
        });
    }

    for (key, ticket) in followups.remove {
        spawn(async move {
            js_bridge::sleep_ms(exit_ms).await;
            if layer.write().remove_exited(key, ticket) {
                log::debug!("violin-chart: removed {}", key);
            }
        });
    }
}

/// The violin chart for the current season filter.
#[component]
pub fn ViolinChart() -> Element {
    let state = use_context::<AppState>();
    let mut layer = use_signal(ShapeLayer::default);
    let mut frame = use_signal(|| None::<ChartFrame>);
    let mut hovered = use_signal(|| None::<ShapeKey>);
    let mut tooltip = use_signal(|| None::<TooltipState>);

    // Re-render whenever the dataset, filter or configuration changes
    use_effect(move || {
        let filter = (state.filter)();
        let config = state.config.read().clone();
        let Some(dataset) = state.dataset.read().clone() else {
            return;
        };

        let next = match build_frame(&dataset, filter, &config) {
            Ok(next) => next,
            Err(e) => {
                log::warn!("violin-chart: {}", e);
                return;
            }
        };

        let (plan, followups) = layer.write().reconcile(next.shapes.clone());
        if plan.is_noop() {
            log::debug!("violin-chart: filter={} morph {} shapes", filter, plan.update.len());
        } else {
            log::info!(
                "violin-chart: filter={} enter={} update={} exit={}",
                filter,
                plan.enter.len(),
                plan.update.len(),
                plan.exit.len()
            );
        }

        // A shape on its way out cannot keep a highlight or tooltip
        let current_hover = *hovered.peek();
        if let Some(key) = current_hover {
            if plan.exit.contains(&key) {
                hovered.set(None);
                tooltip.set(None);
            }
        }

        frame.set(Some(next));
        schedule_followups(followups, layer, config.exit_ms);
    });

    let Some(current) = frame.read().clone() else {
        return rsx! {};
    };
    let config = state.config.read().clone();
    let entries = layer.read().entries().to_vec();
    let highlighted = hovered();

    let on_hover = move |event: HoverEvent| {
        hovered.set(Some(event.key));
        tooltip.set(Some(TooltipState {
            series: event.key.series,
            median: event.median,
            x: event.x,
            y: event.y,
        }));
    };
    let on_leave = move |key: ShapeKey| {
        if hovered() == Some(key) {
            hovered.set(None);
        }
        tooltip.set(None);
    };

    let margins = config.margins;
    let y_title_x = -current.plot_height / 2.0;
    let y_title_y = -margins.left / 2.0;
    let x_title_x = current.plot_width / 2.0;
    let x_title_y = current.plot_height + margins.bottom * 0.75;

    rsx! {
        div {
            style: "position: relative;",
            svg {
                width: "{config.width}",
                height: "{config.height}",
                g {
                    transform: "translate({margins.left}, {margins.top})",
                    YAxis {
                        ticks: current.y_ticks.clone(),
                        height: current.plot_height,
                        transition_ms: config.transition_ms,
                    }
                    XAxis {
                        ticks: current.x_ticks.clone(),
                        width: current.plot_width,
                        height: current.plot_height,
                    }
                    text {
                        transform: "rotate(-90)",
                        x: "{y_title_x}",
                        y: "{y_title_y}",
                        "text-anchor": "middle",
                        "font-size": "12",
                        "{Y_AXIS_TITLE}"
                    }
                    text {
                        x: "{x_title_x}",
                        y: "{x_title_y}",
                        "text-anchor": "middle",
                        "font-size": "12",
                        "{X_AXIS_TITLE}"
                    }
                    for entry in entries {
                        ViolinPath {
                            key: "{entry.shape.key}",
                            shape: entry.shape.clone(),
                            phase: entry.phase,
                            highlighted: highlighted == Some(entry.shape.key),
                            config: config.clone(),
                            on_hover: on_hover,
                            on_leave: on_leave,
                        }
                    }
                }
            }
            Tooltip { state: tooltip() }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ViolinPathProps {
    shape: ViolinShape,
    phase: Phase,
    highlighted: bool,
    config: ChartConfig,
    on_hover: EventHandler<HoverEvent>,
    on_leave: EventHandler<ShapeKey>,
}

/// One mirrored density shape inside its season band.
#[component]
fn ViolinPath(props: ViolinPathProps) -> Element {
    let shape = &props.shape;
    let key = shape.key;
    let median = shape.median;
    let class = format!("violin{}", key.series);
    let opacity = props.phase.opacity(&props.config);
    let transition = props.phase.transition(&props.config);
    let stroke_width = if props.highlighted { 2 } else { 0 };
    let path = shape.path.clone();
    let on_hover = props.on_hover;
    let on_leave = props.on_leave;

    rsx! {
        g {
            class: "{class}",
            transform: "translate({shape.x}, 0)",
            path {
                d: "{path}",
                fill: "{shape.fill}",
                style: "d: path('{path}'); opacity: {opacity}; transition: {transition}; stroke: black; stroke-width: {stroke_width}px;",
                onmouseover: move |evt: MouseEvent| {
                    let point = evt.client_coordinates();
                    on_hover.call(HoverEvent { key, median, x: point.x, y: point.y });
                },
                onmouseout: move |_| on_leave.call(key),
            }
        }
    }
}
