use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod run;

#[derive(Debug, Parser)]
#[command(name = "leadscout")]
#[command(about = "Discover businesses, score their web presence, and export qualified leads")]
struct Cli {
    /// Search query, e.g. "dental offices" or "plumbers"
    query: String,

    /// Location to search around, e.g. "Austin, TX"
    #[arg(long)]
    location: String,

    /// Search radius in meters (upstream maximum is 50000)
    #[arg(long, default_value_t = 50_000)]
    radius: u32,

    /// Maximum number of results (upstream maximum is 60)
    #[arg(long, default_value_t = 60)]
    max_results: usize,

    /// Output CSV file path
    #[arg(long, short, default_value = "results.csv")]
    output: PathBuf,

    /// Spreadsheet ID; when set, results export to a remote sheet instead of CSV
    #[arg(long)]
    sheet_id: Option<String>,

    /// Worksheet tab name for spreadsheet export
    #[arg(long, default_value = "Sheet1")]
    worksheet: String,

    /// Skip the per-place details lookup (phone, website)
    #[arg(long)]
    no_details: bool,

    /// Skip website fetching, scoring, and ownership classification
    #[arg(long)]
    no_qualify: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = leadscout_core::load_app_config_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    run::run(cli, config).await
}
