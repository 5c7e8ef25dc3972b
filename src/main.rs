use calnotify::startup::{self, Mode};
use clap::Parser;
use tracing::info;

/// Posts Notion calendar digests to a Slack channel
#[derive(Parser)]
#[command(name = "calnotify", version, about)]
struct Cli {
    /// Notification mode, defaults to daily
    #[arg(value_enum)]
    mode: Option<Mode>,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    let cli = Cli::parse();
    let mode = cli.mode.unwrap_or(Mode::Daily);
    info!("Starting calendar notification run ({:?} mode)", mode);

    // Load configuration
    let config = startup::load_config()?;

    // Run a single fetch-and-post pass
    startup::run(config, mode).await
}
