use calendar_core::components::calendar::{LogSink, ReminderScheduler};
use calendar_core::components::CalendarHandle;
use calendar_core::config::Config;
use calendar_core::error::Error;
use calendar_core::render::{render_day, render_grid};
use calendar_core::utils::time::{Clock, SystemClock};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::shutdown;

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => {
            info!(
                "Loaded configuration: locale {}, reminders every {}s",
                config.locale, config.reminder_interval_secs
            );
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Start the calendar, print the current month and run reminders until a
/// termination signal arrives
pub async fn start_calendar(config: Config) -> miette::Result<()> {
    rust_i18n::set_locale(&config.locale);

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let today = clock.today();

    let calendar = CalendarHandle::new(today);
    if config.seed_demo_events {
        calendar.seed_demo_events(today).await?;
    }

    let grid = calendar.build_grid(today).await?;
    print!("{}", render_grid(&grid, &config.locale));

    if let Some(selected) = calendar.view().await?.selected_date {
        let events = calendar.ordered_events_for_date(selected).await?;
        println!();
        print!("{}", render_day(selected, &events, &config.locale));
    }

    let scheduler = ReminderScheduler::start(calendar.clone(), Arc::new(LogSink), clock, &config);

    let signal_result = shutdown::wait_for_signal().await;

    if let Err(e) = scheduler.stop().await {
        error!("Error stopping reminder scheduler: {:?}", e);
    }
    calendar.shutdown().await?;
    info!("Calendar shut down");

    signal_result.map_err(Into::into)
}
