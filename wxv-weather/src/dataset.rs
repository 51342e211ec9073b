//! Immutable snapshot of every loaded weather record.

use std::rc::Rc;

use chrono::NaiveDate;

use wxv_utils::stats;

use crate::filter::SeasonFilter;
use crate::record::WeatherRecord;
use crate::season::Season;
use crate::series::Series;

/// The full dataset, loaded once and shared read-only afterwards.
///
/// Cheaply cloneable (via `Rc`) so it can sit in a Dioxus signal and be
/// handed to every render call in a single-threaded WASM environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Rc<[WeatherRecord]>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Dataset {
    pub fn new(records: Vec<WeatherRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Records in load order.
    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records passing the filter, in load order.
    pub fn filter(&self, filter: SeasonFilter) -> Vec<WeatherRecord> {
        self.records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect()
    }

    /// `[min TMIN, max TMAX]` over every record, `None` when empty.
    pub fn temperature_domain(&self) -> Option<(f64, f64)> {
        temperature_domain(&self.records)
    }

    /// Earliest and latest observation dates, `None` when empty.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.date).min()?;
        let last = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }

    /// Median of one temperature series within a season.
    pub fn median(&self, season: Season, series: Series) -> Option<f64> {
        stats::median(
            self.records
                .iter()
                .filter(|r| r.season == season)
                .map(|r| series.value(r)),
        )
    }
}

/// `[min TMIN, max TMAX]` over a slice of records, `None` when empty.
pub fn temperature_domain(records: &[WeatherRecord]) -> Option<(f64, f64)> {
    let (lo, _) = stats::extent(records.iter().map(|r| r.tmin))?;
    let (_, hi) = stats::extent(records.iter().map(|r| r.tmax))?;
    Some((lo, hi))
}
