//! Core types for daily weather observations.
//!
//! - `season`: the four meteorological seasons and the month mapping
//! - `series`: which temperature column (TMAX / TMIN) a value comes from
//! - `filter`: the season filter driven by the chart's dropdown
//! - `record`: a single parsed `WeatherRecord`
//! - `dataset`: an immutable, cheaply cloneable snapshot of all records
//! - `loader`: CSV parsing into a `Dataset`
//!
//! # Usage
//!
//! ```rust
//! use wxv_weather::{load_csv, Season};
//!
//! let dataset = load_csv("date,TMAX,TMIN\n20230115,40,20\n20230716,95,70\n").unwrap();
//! assert_eq!(dataset.len(), 2);
//! assert_eq!(dataset.records()[0].season, Season::Winter);
//! assert_eq!(dataset.temperature_domain(), Some((20.0, 95.0)));
//! ```

pub mod dataset;
pub mod error;
pub mod filter;
pub mod loader;
pub mod record;
pub mod season;
pub mod series;

pub use dataset::Dataset;
pub use error::{FilterParseError, LoadError};
pub use filter::SeasonFilter;
pub use loader::load_csv;
pub use record::WeatherRecord;
pub use season::Season;
pub use series::Series;
