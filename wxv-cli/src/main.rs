//! WXV CLI - Command line tool for seasonal temperature violin charts.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wxv-cli",
    version,
    about = "Seasonal daily temperature violin chart toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: wxv_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wxv_cmd::run(cli.command)
}
