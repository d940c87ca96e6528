use anyhow::Result;
use clap::Parser;

use mixo_dash::api::DEFAULT_API_URL;

#[derive(Parser)]
#[command(name = "mixo-dash")]
#[command(about = "Mixo Ads - read-only campaign dashboard")]
#[command(version)]
struct Cli {
    /// Base URL of the campaign API
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    mixo_dash::gui::run_gui(cli.api_url)
}
