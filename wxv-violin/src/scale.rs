//! Scale functions mapping data values to pixel positions.

use wxv_weather::Season;

use crate::config::ChartConfig;
use crate::summary::{max_occupancy, SeasonSummary};
use crate::ticks;

/// Linear scale for continuous-to-continuous mapping.
///
/// A zero-width domain maps every value to the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }

    /// Nice tick values within the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks::ticks(self.domain.0, self.domain.1, count)
    }

    /// Tick labels with just enough decimals for the tick spacing.
    pub fn tick_labels(&self, count: usize) -> Vec<(f64, String)> {
        let step = ticks::tick_step(self.domain.0, self.domain.1, count);
        let precision = ticks::precision_for_step(step);
        self.ticks(count)
            .into_iter()
            .map(|v| (v, ticks::format_tick(v, precision)))
            .collect()
    }
}

/// Band scale over the four seasons: one equal-width slot per season.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Bands across `range` with equal inner and outer `padding`, centred.
    pub fn new(range: (f64, f64), padding: f64) -> Self {
        let n = Season::ALL.len() as f64;
        let padding = padding.clamp(0.0, 1.0);
        let (r0, r1) = range;
        let step = (r1 - r0) / (n - padding + padding * 2.0).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        Self {
            start,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    /// Left edge of a season's band.
    pub fn position(&self, season: Season) -> f64 {
        self.start + self.step * season.index() as f64
    }

    /// Horizontal centre of a season's band.
    pub fn center(&self, season: Season) -> f64 {
        self.position(season) + self.bandwidth / 2.0
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}

/// The three mappings used by one render call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViolinScales {
    /// Temperature to vertical pixel (larger is higher)
    pub y: LinearScale,
    /// Season to band
    pub x: BandScale,
    /// Signed bin count to horizontal offset within a band
    pub count: LinearScale,
    /// Largest bin count seen, the half-width of `count`'s domain
    pub max_count: usize,
}

impl ViolinScales {
    pub fn build(domain: (f64, f64), summaries: &[SeasonSummary], config: &ChartConfig) -> Self {
        let y = LinearScale::new(domain, (config.inner_height(), 0.0));
        let x = BandScale::new((0.0, config.inner_width()), config.band_padding);
        let max_count = max_occupancy(summaries);
        let m = max_count as f64;
        let count = LinearScale::new((-m, m), (0.0, x.bandwidth()));
        Self { y, x, count, max_count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_linear_inverted_range() {
        let y = LinearScale::new((20.0, 95.0), (460.0, 0.0));
        assert_eq!(y.scale(20.0), 460.0);
        assert_eq!(y.scale(95.0), 0.0);
        assert!(y.scale(60.0) < y.scale(40.0));
    }

    #[test]
    fn test_linear_degenerate_domain() {
        let s = LinearScale::new((0.0, 0.0), (0.0, 100.0));
        assert_eq!(s.scale(0.0), 50.0);
        assert_eq!(s.scale(7.0), 50.0);
    }

    #[test]
    fn test_tick_labels() {
        let y = LinearScale::new((20.0, 95.0), (460.0, 0.0));
        let labels = y.tick_labels(10);
        assert_eq!(labels.first(), Some(&(20.0, "20".to_string())));
        assert_eq!(labels.last(), Some(&(90.0, "90".to_string())));
    }

    #[test]
    fn test_band_layout() {
        let band = BandScale::new((0.0, 640.0), 0.05);
        let step = 640.0 / 4.05;
        assert!(approx(band.position(Season::Spring) - band.position(Season::Winter), step));
        assert!(approx(band.bandwidth(), step * 0.95));
        assert!(approx(band.position(Season::Winter), step * 0.05));
        // symmetric outer padding
        let right_gap = 640.0 - (band.position(Season::Fall) + band.bandwidth());
        assert!(approx(right_gap, band.position(Season::Winter)));
    }

    #[test]
    fn test_count_scale_is_mirrored_around_band_center() {
        let config = ChartConfig::default();
        for m in [0usize, 1, 7, 250] {
            let x = BandScale::new((0.0, config.inner_width()), config.band_padding);
            let count = LinearScale::new((-(m as f64), m as f64), (0.0, x.bandwidth()));
            let center = x.bandwidth() / 2.0;
            for k in 0..=m {
                let k = k as f64;
                assert!(approx(center - count.scale(-k), count.scale(k) - center), "m={m} k={k}");
            }
            assert!(approx(count.scale(0.0), center));
        }
    }
}
