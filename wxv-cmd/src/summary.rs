//! Text summary of the per-season histograms.

use anyhow::Context;
use log::info;
use wxv_utils::dates;
use wxv_violin::{summarize_within, tooltip, BinError};
use wxv_weather::{load_csv, Dataset, SeasonFilter, Series};

/// Load `csv_path` and print one block per visible season.
pub fn run_summary(csv_path: &str, filter: SeasonFilter, bin_target: usize) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(csv_path)
        .with_context(|| format!("Failed to read {}", csv_path))?;
    let dataset = load_csv(&text).with_context(|| format!("Failed to load {}", csv_path))?;
    info!("Summarizing {} records from {} ({})", dataset.len(), csv_path, filter);
    print!("{}", format_summary(&dataset, filter, bin_target)?);
    Ok(())
}

/// Summary text for `filter`; bins are computed over the full dataset's domain.
pub fn format_summary(dataset: &Dataset, filter: SeasonFilter, bin_target: usize) -> anyhow::Result<String> {
    let domain = dataset.temperature_domain().ok_or(BinError::EmptyInput)?;
    let visible = dataset.filter(filter);
    let summaries = summarize_within(&visible, domain, bin_target);

    let mut out = format!(
        "Temperature domain: [{}, {}]°F, {} of {} records shown\n",
        domain.0,
        domain.1,
        visible.len(),
        dataset.len()
    );
    if let Some((first, last)) = dataset.date_span() {
        out.push_str(&format!(
            "Observed {} to {}\n",
            dates::format_date(&first),
            dates::format_date(&last)
        ));
    }
    for summary in &summaries {
        let count = visible.iter().filter(|r| r.season == summary.season).count();
        out.push_str(&format!("\n{} ({} records)\n", summary.season, count));
        for series in Series::ALL {
            out.push_str(&format!(
                "  {}: {}\n",
                tooltip::heading(series),
                tooltip::value_text(dataset.median(summary.season, series))
            ));
        }
        for (max_bin, min_bin) in summary.bins_tmax.iter().zip(&summary.bins_tmin) {
            if max_bin.count() == 0 && min_bin.count() == 0 {
                continue;
            }
            out.push_str(&format!(
                "  [{:>6}, {:>6})  TMAX {:>4}  TMIN {:>4}\n",
                max_bin.lower,
                max_bin.upper,
                max_bin.count(),
                min_bin.count()
            ));
        }
    }
    if summaries.is_empty() {
        out.push_str("\nNo records match this filter\n");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wxv_weather::Season;

    const TWO_ROWS: &str = "date,TMAX,TMIN\n20230115,40,20\n20230716,95,70\n";

    #[test]
    fn test_summary_lists_present_seasons() {
        let data = load_csv(TWO_ROWS).unwrap();
        let text = format_summary(&data, SeasonFilter::All, 20).unwrap();
        assert!(text.starts_with("Temperature domain: [20, 95]°F, 2 of 2 records shown"));
        assert!(text.contains("Observed 2023-01-15 to 2023-07-16"));
        assert!(text.contains("Winter (1 records)"));
        assert!(text.contains("Summer (1 records)"));
        assert!(!text.contains("Spring"));
        assert!(text.contains("Maximum Temperature Median: 40.00°F"));
    }

    #[test]
    fn test_summary_for_missing_season() {
        let data = load_csv(TWO_ROWS).unwrap();
        let text = format_summary(&data, SeasonFilter::Only(Season::Fall), 20).unwrap();
        assert!(text.contains("0 of 2 records shown"));
        assert!(text.contains("No records match this filter"));
    }

    #[test]
    fn test_summary_of_empty_dataset_fails() {
        let data = load_csv("date,TMAX,TMIN\n").unwrap();
        assert!(format_summary(&data, SeasonFilter::All, 20).is_err());
    }
}
