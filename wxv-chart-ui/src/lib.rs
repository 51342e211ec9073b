//! Shared Dioxus components for the seasonal violin chart.
//!
//! This crate provides:
//! - `js_bridge`: browser timer helpers used to sequence transitions
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX components (violin chart, axes, tooltip, selector, ...)

pub mod components;
pub mod js_bridge;
pub mod state;
