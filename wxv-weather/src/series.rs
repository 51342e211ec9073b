use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::WeatherRecord;

/// One of the two temperature columns drawn per season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Series {
    /// Daily maximum temperature (TMAX)
    Max,
    /// Daily minimum temperature (TMIN)
    Min,
}

impl Series {
    pub const ALL: [Series; 2] = [Series::Max, Series::Min];

    /// Column name in the source CSV.
    pub fn column(&self) -> &'static str {
        match self {
            Series::Max => "TMAX",
            Series::Min => "TMIN",
        }
    }

    /// Human label used in tooltips and legends.
    pub fn label(&self) -> &'static str {
        match self {
            Series::Max => "Maximum",
            Series::Min => "Minimum",
        }
    }

    /// Read this series' value from a record.
    pub fn value(&self, record: &WeatherRecord) -> f64 {
        match self {
            Series::Max => record.tmax,
            Series::Min => record.tmin,
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
