mod shutdown;
mod startup;

use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting calendar");

    // Load configuration
    let config = startup::load_config()?;

    // Run until interrupted
    startup::start_calendar(config).await
}
