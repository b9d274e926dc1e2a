use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

use super::actor::{CalendarActor, CalendarActorHandle, Navigation};
use super::notifications::DueEvent;
use crate::calendar::{CalendarView, Event, EventId, MonthGrid};
use crate::error::{validation_error, CalResult};

/// Time stored for events submitted without one
pub const ALL_DAY: &str = "All Day";

/// Handle for interacting with the calendar actor.
///
/// Cloned into every consumer that needs the calendar; all clones talk to the
/// same store.
#[derive(Clone)]
pub struct CalendarHandle {
    actor_handle: CalendarActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl CalendarHandle {
    /// Create a new CalendarHandle and spawn the actor
    pub fn new(today: NaiveDate) -> Self {
        // Create the actor and get its handle
        let (mut actor, handle) = CalendarActor::new(today);

        // Spawn a task to run the actor
        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Append an event to `date` exactly as given
    pub async fn add_event(
        &self,
        date: NaiveDate,
        title: impl Into<String>,
        time: impl Into<String>,
    ) -> CalResult<EventId> {
        self.actor_handle
            .add_event(date, title.into(), time.into())
            .await
    }

    /// Add an event from the add-event form.
    ///
    /// Rejects a blank title; a blank time is stored as [`ALL_DAY`].
    pub async fn submit_event(&self, date: NaiveDate, title: &str, time: &str) -> CalResult<EventId> {
        if title.trim().is_empty() {
            return Err(validation_error("title is empty"));
        }

        let time = if time.is_empty() { ALL_DAY } else { time };
        self.add_event(date, title, time).await
    }

    /// Remove the event `id` from `date`; returns whether anything was removed
    pub async fn remove_event(&self, date: NaiveDate, id: EventId) -> CalResult<bool> {
        self.actor_handle.remove_event(date, id).await
    }

    /// Snapshot of the events on `date` in insertion order
    pub async fn events_for_date(&self, date: NaiveDate) -> CalResult<Vec<Event>> {
        self.actor_handle.events_for_date(date).await
    }

    /// Snapshot of the events on `date` in display order
    pub async fn ordered_events_for_date(&self, date: NaiveDate) -> CalResult<Vec<Event>> {
        self.actor_handle.ordered_events_for_date(date).await
    }

    pub async fn count_for_date(&self, date: NaiveDate) -> CalResult<usize> {
        self.actor_handle.count_for_date(date).await
    }

    /// Grid of the visible month
    pub async fn build_grid(&self, today: NaiveDate) -> CalResult<MonthGrid> {
        self.actor_handle.build_grid(today).await
    }

    pub async fn view(&self) -> CalResult<CalendarView> {
        self.actor_handle.view().await
    }

    pub async fn next_month(&self) -> CalResult<CalendarView> {
        self.actor_handle.navigate(Navigation::NextMonth).await
    }

    pub async fn previous_month(&self) -> CalResult<CalendarView> {
        self.actor_handle.navigate(Navigation::PreviousMonth).await
    }

    /// Show the month containing `date`
    pub async fn jump_to(&self, date: NaiveDate) -> CalResult<CalendarView> {
        self.actor_handle.navigate(Navigation::JumpTo(date)).await
    }

    /// Select `date`, as a click on its cell does
    pub async fn select_date(&self, date: NaiveDate) -> CalResult<CalendarView> {
        self.actor_handle.navigate(Navigation::Select(date)).await
    }

    /// Detect and mark the events starting at `now` on `today`
    pub async fn collect_due(&self, today: NaiveDate, now: NaiveTime) -> CalResult<Vec<DueEvent>> {
        self.actor_handle.collect_due(today, now).await
    }

    /// Add the demo events shown on first launch
    pub async fn seed_demo_events(&self, today: NaiveDate) -> CalResult<()> {
        if let Some(example_date) = NaiveDate::from_ymd_opt(2025, 11, 7) {
            self.add_event(example_date, "Lecture", "08:00-09:00").await?;
            self.add_event(example_date, "Math Deadline", "13:00-14:00").await?;
            self.add_event(example_date, "Futsal", "20:00-22:00").await?;
        }

        self.add_event(today, "Team Meeting", "10:00-11:00").await?;
        self.add_event(today, "Lunch", "12:00-13:00").await?;

        info!("Seeded demo events");
        Ok(())
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> CalResult<()> {
        self.actor_handle.shutdown().await
    }
}
