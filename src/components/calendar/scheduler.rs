//! Polling reminder loop.
//!
//! Every tick compares the wall clock's hour and minute against the start
//! time of each of today's events. Matching is by polling only: a start
//! minute that passes without a tick landing inside it (for example while
//! the process is suspended, or with an interval longer than a minute) is
//! missed and never fired late.
//!
//! A tick that outlives one interval is abandoned; its events stay
//! notified, the same as a failed delivery.

use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, timeout, Duration, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use super::handle::CalendarHandle;
use super::notifications::{Notification, NotificationSink};
use crate::config::Config;
use crate::error::{CalResult, Error};
use crate::utils::time::Clock;

/// Running reminder loop
pub struct ReminderScheduler {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl ReminderScheduler {
    /// Spawn the reminder loop. The first tick happens one interval from now.
    pub fn start(
        handle: CalendarHandle,
        sink: Arc<dyn NotificationSink>,
        clock: Arc<dyn Clock>,
        config: &Config,
    ) -> Self {
        let period = Duration::from_secs(config.reminder_interval_secs.max(1));
        let locale = config.locale.clone();
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        info!("Starting reminder scheduler, checking every {:?}", period);

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            // A late tick must not be followed by a burst of catch-up ticks
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {}
                }

                // A tick may take at most one period and is abandoned on stop
                let tick = timeout(period, run_tick(&handle, sink.as_ref(), clock.as_ref(), &locale));
                let result = tokio::select! {
                    _ = token.cancelled() => break,
                    result = tick => result,
                };

                match result {
                    Ok(Ok(_)) => {}
                    Ok(Err(Error::Actor(e))) => {
                        warn!("Calendar is no longer available, stopping reminders: {}", e);
                        break;
                    }
                    Ok(Err(e)) => error!("Reminder tick failed: {}", e),
                    Err(_) => warn!("Reminder tick took longer than {:?}, abandoned", period),
                }
            }

            info!("Reminder scheduler stopped");
        });

        Self { cancel, task }
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stop the loop and wait for it to finish
    pub async fn stop(self) -> CalResult<()> {
        self.cancel.cancel();
        self.task
            .await
            .map_err(|e| Error::Other(format!("Reminder task error: {}", e)))
    }
}

/// Run one tick: fire a notification for every unnotified event of today
/// whose start minute equals the current minute.
///
/// Returns the number of notifications delivered. A failed delivery is
/// logged and not retried; the event stays notified.
pub async fn run_tick(
    handle: &CalendarHandle,
    sink: &dyn NotificationSink,
    clock: &dyn Clock,
    locale: &str,
) -> CalResult<usize> {
    let now = clock.now();
    let due = handle.collect_due(now.date(), now.time()).await?;

    let mut delivered = 0;
    for event in &due {
        let notification = Notification::reminder(event, locale);
        match sink.deliver(notification).await {
            Ok(()) => {
                info!("Sent reminder for {:?} ({})", event.title, event.time);
                delivered += 1;
            }
            Err(e) => error!("Failed to deliver reminder for event {}: {}", event.event_id, e),
        }
    }

    Ok(delivered)
}
