//! Command implementations for the seasonal violin CLI.
//!
//! Provides subcommands to inspect the per-season histograms of a weather
//! CSV and to render the chart as a static SVG.

use clap::Subcommand;
use wxv_weather::SeasonFilter;

pub mod render;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Print per-season record counts, medians and histogram bins
    Summary {
        /// Path to the weather CSV (columns: date, TMAX, TMIN)
        #[arg(short = 'c', long)]
        csv: String,

        /// Season filter: all, Winter, Spring, Summer or Fall
        #[arg(short = 's', long, default_value = "all")]
        season: SeasonFilter,

        /// Approximate number of histogram bins
        #[arg(long, default_value_t = 20)]
        bins: usize,
    },

    /// Render the violin chart to a static SVG file
    Render {
        /// Path to the weather CSV (columns: date, TMAX, TMIN)
        #[arg(short = 'c', long)]
        csv: String,

        /// Output path for the SVG document
        #[arg(short = 'o', long)]
        out: String,

        /// Season filter: all, Winter, Spring, Summer or Fall
        #[arg(short = 's', long, default_value = "all")]
        season: SeasonFilter,

        /// Optional JSON chart configuration (missing keys use defaults)
        #[arg(long)]
        config: Option<String>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { csv, season, bins } => summary::run_summary(&csv, season, bins),
        Command::Render {
            csv,
            out,
            season,
            config,
        } => render::run_render(&csv, &out, season, config.as_deref()),
    }
}
