//! Per-season histograms of daily maximum and minimum temperature.

use serde::Serialize;
use wxv_weather::dataset::temperature_domain;
use wxv_weather::{Season, Series, WeatherRecord};

use crate::error::{BinError, Result};
use crate::histogram::{self, HistogramBin};

/// Histograms of one season's TMAX and TMIN values.
///
/// Within one call every summary shares the same bin edges, for both
/// series, so violin areas can be compared directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonSummary {
    pub season: Season,
    pub bins_tmax: Vec<HistogramBin>,
    pub bins_tmin: Vec<HistogramBin>,
}

impl SeasonSummary {
    pub fn bins(&self, series: Series) -> &[HistogramBin] {
        match series {
            Series::Max => &self.bins_tmax,
            Series::Min => &self.bins_tmin,
        }
    }

    /// Largest bin count over both series.
    pub fn max_count(&self) -> usize {
        self.bins_tmax
            .iter()
            .chain(&self.bins_tmin)
            .map(HistogramBin::count)
            .max()
            .unwrap_or(0)
    }
}

/// Bin `records` per season over their own temperature domain.
///
/// Returns the domain together with the summaries. Fails on empty input,
/// where no domain exists.
pub fn summarize(records: &[WeatherRecord], bin_target: usize) -> Result<((f64, f64), Vec<SeasonSummary>)> {
    let domain = temperature_domain(records).ok_or(BinError::EmptyInput)?;
    Ok((domain, summarize_within(records, domain, bin_target)))
}

/// Bin `records` per season over a caller-provided domain.
///
/// Only seasons present in `records` get a summary. With all four present
/// they come in canonical season order, otherwise in order of first
/// appearance. Empty input gives an empty list.
pub fn summarize_within(
    records: &[WeatherRecord],
    domain: (f64, f64),
    bin_target: usize,
) -> Vec<SeasonSummary> {
    let thresholds = histogram::thresholds(domain, bin_target);

    let mut groups: Vec<(Season, Vec<&WeatherRecord>)> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|(season, _)| *season == record.season) {
            Some((_, group)) => group.push(record),
            None => groups.push((record.season, vec![record])),
        }
    }
    if groups.len() == Season::ALL.len() {
        groups.sort_by_key(|(season, _)| season.index());
    }

    groups
        .into_iter()
        .map(|(season, group)| SeasonSummary {
            season,
            bins_tmax: histogram::bin_values(group.iter().map(|r| r.tmax), domain, &thresholds),
            bins_tmin: histogram::bin_values(group.iter().map(|r| r.tmin), domain, &thresholds),
        })
        .collect()
}

/// Largest bin count across every bin of every summary.
pub fn max_occupancy(summaries: &[SeasonSummary]) -> usize {
    summaries
        .iter()
        .map(SeasonSummary::max_count)
        .max()
        .unwrap_or(0)
}
