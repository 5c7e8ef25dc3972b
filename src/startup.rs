use crate::components::notion::NotionClient;
use crate::components::slack::SlackNotifier;
use crate::config::Config;
use crate::digest;
use crate::error::Error;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Notification mode selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Post today's events, staying silent when there are none
    Daily,
    /// Post next week's events grouped by day
    Weekly,
}

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Config(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and validate the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Run one fetch-and-post pass in the given mode
///
/// Errors from the event source or the notifier propagate to the caller;
/// the external scheduler is responsible for retrying on its next run.
pub async fn run(config: Config, mode: Mode) -> miette::Result<()> {
    let source = NotionClient::new(&config);
    let notifier = SlackNotifier::new(&config);

    match mode {
        Mode::Daily => {
            let events = source.fetch_today().await?;
            info!("Fetched {} event(s) for today", events.len());

            match digest::build_daily(&events, Some(&config.calendar_db_url)) {
                Some(message) => {
                    notifier.post(&message).await?;
                    info!("Posted daily digest");
                }
                // An empty day posts nothing at all
                None => info!("No events today, skipping notification"),
            }
        }
        Mode::Weekly => {
            let events = source.fetch_next_week().await?;
            info!("Fetched {} event(s) for next week", events.len());

            // Weekly mode always posts, including the empty placeholder
            let message = digest::build_weekly(&events, Some(&config.calendar_db_url));
            notifier.post(&message).await?;
            info!("Posted weekly digest");
        }
    }

    Ok(())
}
