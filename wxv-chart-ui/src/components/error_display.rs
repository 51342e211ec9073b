//! Load failure panel shown in place of the chart.

use crate::state::LoadProblem;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub problem: LoadProblem,
}

/// Explains why nothing is plotted, pointing at the offending CSV line
/// when the loader reported one.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let problem = &props.problem;
    let source = problem.source.clone();
    let message = problem.message.clone();
    let line = problem.line();

    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFF3E0; color: #BF360C; border-left: 4px solid #E64A19; font-size: 13px;",
            strong { "Cannot plot {source}" }
            p {
                style: "margin: 4px 0 0 0;",
                "{message}"
            }
            if let Some(line) = line {
                p {
                    style: "margin: 4px 0 0 0; color: #6D4C41; font-size: 12px;",
                    "See line {line} of {source} (the header is line 1)."
                }
            }
        }
    }
}
