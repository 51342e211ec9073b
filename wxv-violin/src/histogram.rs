//! Fixed-threshold histograms.

use serde::Serialize;

use crate::ticks;

/// One histogram bin covering `[lower, upper)`; the last bin of a
/// histogram is closed on both ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub values: Vec<f64>,
}

impl HistogramBin {
    /// Number of values that fell into this bin.
    pub fn count(&self) -> usize {
        self.values.len()
    }
}

/// Interior bin edges for `domain`, targeting roughly `target` bins.
///
/// Edges come from [`ticks::ticks`] and keep only values strictly above
/// the domain minimum and not above its maximum, so the first bin always
/// starts at the minimum.
pub fn thresholds(domain: (f64, f64), target: usize) -> Vec<f64> {
    let (lo, hi) = domain;
    ticks::ticks(lo, hi, target)
        .into_iter()
        .filter(|t| *t > lo && *t <= hi)
        .collect()
}

/// Partition `values` into bins delimited by `domain` and `thresholds`.
///
/// `thresholds` must be ascending and inside the domain (see
/// [`thresholds`]). Values outside the domain or NaN are dropped. The
/// result always has `thresholds.len() + 1` bins, in order, even when
/// `values` is empty.
pub fn bin_values(
    values: impl IntoIterator<Item = f64>,
    domain: (f64, f64),
    thresholds: &[f64],
) -> Vec<HistogramBin> {
    let (lo, hi) = domain;
    let m = thresholds.len();
    let mut bins: Vec<HistogramBin> = (0..=m)
        .map(|i| HistogramBin {
            lower: if i > 0 { thresholds[i - 1] } else { lo },
            upper: if i < m { thresholds[i] } else { hi },
            values: Vec::new(),
        })
        .collect();

    for value in values {
        if !(lo <= value && value <= hi) {
            continue;
        }
        // Number of thresholds <= value
        let index = thresholds.partition_point(|t| *t <= value);
        bins[index].values.push(value);
    }
    bins
}
