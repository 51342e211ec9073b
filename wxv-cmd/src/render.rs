//! Static SVG rendering of the violin chart.

use anyhow::Context;
use log::info;
use wxv_violin::{build_frame, svg, ChartConfig};
use wxv_weather::{load_csv, SeasonFilter};

/// Load the chart configuration, falling back to defaults without a path.
pub fn load_config(path: Option<&str>) -> anyhow::Result<ChartConfig> {
    match path {
        None => Ok(ChartConfig::default()),
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path))?;
            serde_json::from_str(&text).with_context(|| format!("Invalid config {}", path))
        }
    }
}

/// Render the chart for `filter` and write it to `out_path`.
pub fn run_render(
    csv_path: &str,
    out_path: &str,
    filter: SeasonFilter,
    config_path: Option<&str>,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let text = std::fs::read_to_string(csv_path)
        .with_context(|| format!("Failed to read {}", csv_path))?;
    let dataset = load_csv(&text).with_context(|| format!("Failed to load {}", csv_path))?;

    let frame = build_frame(&dataset, filter, &config)?;
    info!(
        "Rendering {} shapes over [{}, {}] for filter {}",
        frame.shapes.len(),
        frame.y_domain.0,
        frame.y_domain.1,
        filter
    );

    std::fs::write(out_path, svg::render_svg(&frame, &config))
        .with_context(|| format!("Failed to write {}", out_path))?;
    info!("Render complete. Output: {}", out_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_without_path() {
        assert_eq!(load_config(None).unwrap(), ChartConfig::default());
    }

    #[test]
    fn test_missing_config_file() {
        assert!(load_config(Some("/nonexistent/chart-config.json")).is_err());
    }
}
