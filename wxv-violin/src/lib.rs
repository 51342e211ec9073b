//! Violin plot geometry for seasonal daily temperature extremes.
//!
//! This crate holds everything about the chart that does not need a
//! browser, so the Dioxus app and the native CLI draw the same picture:
//!
//! - `ticks`: "nice" tick generation shared by bin thresholds and axes
//! - `histogram`: fixed-threshold binning of a value sequence
//! - `summary`: per-season histograms of TMAX and TMIN on shared thresholds
//! - `scale`: linear and band scales, bundled as `ViolinScales`
//! - `curve`: centripetal Catmull-Rom area paths
//! - `frame`: the complete geometry of one render call (`ChartFrame`)
//! - `join` / `lifecycle`: keyed enter/update/exit reconciliation of shapes
//! - `tooltip`: hover text with the series median
//! - `svg`: standalone SVG output of a frame
//!
//! # Usage
//!
//! ```rust
//! use wxv_violin::{build_frame, ChartConfig};
//! use wxv_weather::{load_csv, SeasonFilter};
//!
//! let dataset = load_csv("date,TMAX,TMIN\n20230115,40,20\n20230716,95,70\n").unwrap();
//! let frame = build_frame(&dataset, SeasonFilter::All, &ChartConfig::default()).unwrap();
//! assert_eq!(frame.y_domain, (20.0, 95.0));
//! assert_eq!(frame.shapes.len(), 4);
//! ```

pub mod config;
pub mod curve;
pub mod error;
pub mod frame;
pub mod histogram;
pub mod join;
pub mod lifecycle;
pub mod scale;
pub mod summary;
pub mod svg;
pub mod ticks;
pub mod tooltip;

pub use config::ChartConfig;
pub use error::BinError;
pub use frame::{build_frame, ChartFrame, ShapeKey, ViolinShape};
pub use histogram::HistogramBin;
pub use summary::{summarize, summarize_within, SeasonSummary};
