//! Complete geometry of one render call.
//!
//! A `ChartFrame` is recomputed from scratch for every filter change. The
//! temperature domain, and with it the bin edges and the vertical axis,
//! always come from the full dataset, so switching filters never rescales
//! the chart.

use std::fmt;

use serde::Serialize;
use wxv_weather::{Dataset, Season, SeasonFilter, Series};

use crate::config::ChartConfig;
use crate::curve::{area_path, AreaPoint};
use crate::error::{BinError, Result};
use crate::scale::ViolinScales;
use crate::summary::{summarize_within, SeasonSummary};

/// Identity of a violin shape across renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ShapeKey {
    pub series: Series,
    pub season: Season,
}

impl fmt::Display for ShapeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.series, self.season)
    }
}

/// One mirrored density shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViolinShape {
    pub key: ShapeKey,
    /// Left edge of the season band, in plot coordinates
    pub x: f64,
    /// Path data relative to the band's left edge
    pub path: String,
    pub fill: String,
    /// Median of this series over the season's records
    pub median: Option<f64>,
    /// Number of records behind the shape
    pub count: usize,
}

/// A labelled tick on the temperature axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub value: f64,
    /// Vertical position in plot coordinates
    pub offset: f64,
    pub label: String,
}

/// A season label on the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandTick {
    pub season: Season,
    /// Horizontal centre of the band in plot coordinates
    pub offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFrame {
    pub filter: String,
    /// Temperature domain of the full dataset
    pub y_domain: (f64, f64),
    pub plot_width: f64,
    pub plot_height: f64,
    pub bandwidth: f64,
    pub max_count: usize,
    pub y_ticks: Vec<AxisTick>,
    pub x_ticks: Vec<BandTick>,
    /// All TMAX shapes in summary order, then all TMIN shapes
    pub shapes: Vec<ViolinShape>,
    pub summaries: Vec<SeasonSummary>,
}

impl ChartFrame {
    pub fn visible_seasons(&self) -> Vec<Season> {
        self.summaries.iter().map(|s| s.season).collect()
    }
}

/// Build the frame for `filter` over `dataset`.
///
/// Fails only when the dataset itself is empty. A filter that matches no
/// records produces axes and no shapes.
pub fn build_frame(dataset: &Dataset, filter: SeasonFilter, config: &ChartConfig) -> Result<ChartFrame> {
    let domain = dataset.temperature_domain().ok_or(BinError::EmptyInput)?;
    let visible = dataset.filter(filter);
    let summaries = summarize_within(&visible, domain, config.bin_target);
    let scales = ViolinScales::build(domain, &summaries, config);

    log::debug!(
        "frame: filter={} records={} seasons={} max_count={}",
        filter,
        visible.len(),
        summaries.len(),
        scales.max_count
    );

    let y_ticks = scales
        .y
        .tick_labels(config.y_ticks)
        .into_iter()
        .map(|(value, label)| AxisTick {
            value,
            offset: scales.y.scale(value),
            label,
        })
        .collect();

    let x_ticks = Season::ALL
        .into_iter()
        .map(|season| BandTick {
            season,
            offset: scales.x.center(season),
        })
        .collect();

    let mut shapes = Vec::with_capacity(summaries.len() * Series::ALL.len());
    for series in Series::ALL {
        for summary in &summaries {
            let season_records = visible.iter().filter(|r| r.season == summary.season);
            let count = season_records.clone().count();
            shapes.push(ViolinShape {
                key: ShapeKey {
                    series,
                    season: summary.season,
                },
                x: scales.x.position(summary.season),
                path: violin_path(summary, series, &scales),
                fill: config.color(series).to_string(),
                median: wxv_utils::stats::median(season_records.map(|r| series.value(r))),
                count,
            });
        }
    }

    Ok(ChartFrame {
        filter: filter.to_string(),
        y_domain: domain,
        plot_width: config.inner_width(),
        plot_height: config.inner_height(),
        bandwidth: scales.x.bandwidth(),
        max_count: scales.max_count,
        y_ticks,
        x_ticks,
        shapes,
        summaries,
    })
}

/// Mirrored area through each bin's lower edge, width proportional to count.
fn violin_path(summary: &SeasonSummary, series: Series, scales: &ViolinScales) -> String {
    let points: Vec<AreaPoint> = summary
        .bins(series)
        .iter()
        .map(|bin| {
            let n = bin.count() as f64;
            AreaPoint {
                x0: scales.count.scale(-n),
                x1: scales.count.scale(n),
                y: scales.y.scale(bin.lower),
            }
        })
        .collect();
    area_path(&points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wxv_weather::load_csv;

    const SAMPLE: &str = "date,TMAX,TMIN
20230105,35,12
20230210,41,25
20230320,55,33
20230520,70,48
20230704,92,71
20230705,88,69
20230910,78,55
20231115,50,31
";

    #[test]
    fn test_all_seasons_frame() {
        let data = load_csv(SAMPLE).unwrap();
        let frame = build_frame(&data, SeasonFilter::All, &ChartConfig::default()).unwrap();
        assert_eq!(frame.y_domain, (12.0, 92.0));
        assert_eq!(frame.visible_seasons(), Season::ALL.to_vec());
        assert_eq!(frame.shapes.len(), 8);
        assert_eq!(frame.shapes[0].key, ShapeKey { series: Series::Max, season: Season::Winter });
        assert_eq!(frame.shapes[4].key, ShapeKey { series: Series::Min, season: Season::Winter });
        assert!(frame.shapes.iter().all(|s| s.path.starts_with('M') && s.path.ends_with('Z')));
        assert_eq!(frame.shapes[0].fill, "red");
        assert_eq!(frame.shapes[4].fill, "blue");
        assert_eq!(frame.x_ticks.len(), 4);
    }

    #[test]
    fn test_filter_keeps_vertical_domain() {
        let data = load_csv(SAMPLE).unwrap();
        let config = ChartConfig::default();
        let all = build_frame(&data, SeasonFilter::All, &config).unwrap();
        let summer = build_frame(&data, SeasonFilter::Only(Season::Summer), &config).unwrap();
        let back = build_frame(&data, SeasonFilter::All, &config).unwrap();

        assert_eq!(summer.y_domain, all.y_domain);
        assert_eq!(summer.y_ticks, all.y_ticks);
        assert_eq!(back.y_domain, all.y_domain);
        assert_eq!(back.shapes, all.shapes);
        assert_eq!(summer.visible_seasons(), vec![Season::Summer]);
        assert_eq!(summer.shapes.len(), 2);
    }

    #[test]
    fn test_shape_medians_and_counts() {
        let data = load_csv(SAMPLE).unwrap();
        let frame = build_frame(&data, SeasonFilter::Only(Season::Summer), &ChartConfig::default()).unwrap();
        let tmax = &frame.shapes[0];
        assert_eq!(tmax.key.series, Series::Max);
        assert_eq!(tmax.median, Some(90.0));
        assert_eq!(tmax.count, 2);
        assert_eq!(frame.shapes[1].median, Some(70.0));
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        let data = load_csv("date,TMAX,TMIN\n").unwrap();
        let err = build_frame(&data, SeasonFilter::All, &ChartConfig::default()).unwrap_err();
        assert_eq!(err, BinError::EmptyInput);
    }

    #[test]
    fn test_filter_with_no_records_has_axes_only() {
        let data = load_csv("date,TMAX,TMIN\n20230704,92,71\n").unwrap();
        let frame = build_frame(&data, SeasonFilter::Only(Season::Winter), &ChartConfig::default()).unwrap();
        assert!(frame.shapes.is_empty());
        assert!(!frame.y_ticks.is_empty());
        assert_eq!(frame.max_count, 0);
    }

    #[test]
    fn test_shapes_stay_inside_band() {
        let data = load_csv(SAMPLE).unwrap();
        let config = ChartConfig::default();
        let frame = build_frame(&data, SeasonFilter::All, &config).unwrap();
        let scales = ViolinScales::build(frame.y_domain, &frame.summaries, &config);
        for summary in &frame.summaries {
            for series in Series::ALL {
                for bin in summary.bins(series) {
                    let n = bin.count() as f64;
                    let left = scales.count.scale(-n);
                    let right = scales.count.scale(n);
                    assert!(left >= -1e-9 && right <= frame.bandwidth + 1e-9);
                    assert!(((left + right) / 2.0 - frame.bandwidth / 2.0).abs() < 1e-9);
                }
            }
        }
    }
}
