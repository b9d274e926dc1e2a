use chrono::{NaiveDate, NaiveTime};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use super::notifications::{collect_due, DueEvent};
use crate::calendar::{CalendarView, Event, EventId, EventStore, MonthGrid};
use crate::error::{actor_error, CalResult};

/// Navigation actions of the calendar screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    NextMonth,
    PreviousMonth,
    JumpTo(NaiveDate),
    Select(NaiveDate),
}

/// Commands that can be sent to the calendar actor
pub enum CalendarCommand {
    AddEvent {
        date: NaiveDate,
        title: String,
        time: String,
        respond: oneshot::Sender<EventId>,
    },
    RemoveEvent {
        date: NaiveDate,
        id: EventId,
        respond: oneshot::Sender<bool>,
    },
    EventsForDate(NaiveDate, oneshot::Sender<Vec<Event>>),
    OrderedEventsForDate(NaiveDate, oneshot::Sender<Vec<Event>>),
    CountForDate(NaiveDate, oneshot::Sender<usize>),
    BuildGrid(NaiveDate, oneshot::Sender<MonthGrid>),
    View(oneshot::Sender<CalendarView>),
    Navigate(Navigation, oneshot::Sender<CalendarView>),
    CollectDue {
        today: NaiveDate,
        now: NaiveTime,
        respond: oneshot::Sender<Vec<DueEvent>>,
    },
    Shutdown,
}

/// The calendar actor: sole owner of the event store and view state.
///
/// Commands are processed one at a time, so a reminder tick never observes
/// a half-applied mutation.
pub struct CalendarActor {
    store: EventStore,
    view: CalendarView,
    command_rx: mpsc::Receiver<CalendarCommand>,
}

/// Handle for communicating with the calendar actor
#[derive(Clone)]
pub struct CalendarActorHandle {
    command_tx: mpsc::Sender<CalendarCommand>,
}

impl CalendarActorHandle {
    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> CalendarCommand,
    ) -> CalResult<T> {
        let (response_tx, response_rx) = oneshot::channel();
        self.command_tx
            .send(build(response_tx))
            .await
            .map_err(|e| actor_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .await
            .map_err(|_| actor_error("Response channel closed"))
    }

    pub async fn add_event(&self, date: NaiveDate, title: String, time: String) -> CalResult<EventId> {
        self.request(|respond| CalendarCommand::AddEvent {
            date,
            title,
            time,
            respond,
        })
        .await
    }

    pub async fn remove_event(&self, date: NaiveDate, id: EventId) -> CalResult<bool> {
        self.request(|respond| CalendarCommand::RemoveEvent { date, id, respond })
            .await
    }

    pub async fn events_for_date(&self, date: NaiveDate) -> CalResult<Vec<Event>> {
        self.request(|respond| CalendarCommand::EventsForDate(date, respond))
            .await
    }

    pub async fn ordered_events_for_date(&self, date: NaiveDate) -> CalResult<Vec<Event>> {
        self.request(|respond| CalendarCommand::OrderedEventsForDate(date, respond))
            .await
    }

    pub async fn count_for_date(&self, date: NaiveDate) -> CalResult<usize> {
        self.request(|respond| CalendarCommand::CountForDate(date, respond))
            .await
    }

    pub async fn build_grid(&self, today: NaiveDate) -> CalResult<MonthGrid> {
        self.request(|respond| CalendarCommand::BuildGrid(today, respond))
            .await
    }

    pub async fn view(&self) -> CalResult<CalendarView> {
        self.request(CalendarCommand::View).await
    }

    pub async fn navigate(&self, navigation: Navigation) -> CalResult<CalendarView> {
        self.request(|respond| CalendarCommand::Navigate(navigation, respond))
            .await
    }

    pub async fn collect_due(&self, today: NaiveDate, now: NaiveTime) -> CalResult<Vec<DueEvent>> {
        self.request(|respond| CalendarCommand::CollectDue {
            today,
            now,
            respond,
        })
        .await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> CalResult<()> {
        let _ = self.command_tx.send(CalendarCommand::Shutdown).await;
        Ok(())
    }
}

impl CalendarActor {
    /// Create a new actor showing the month of `today` and return its handle
    pub fn new(today: NaiveDate) -> (Self, CalendarActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);

        let actor = Self {
            store: EventStore::new(),
            view: CalendarView::starting_at(today),
            command_rx,
        };

        let handle = CalendarActorHandle { command_tx };

        (actor, handle)
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Calendar actor started");

        // Process commands
        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                CalendarCommand::AddEvent {
                    date,
                    title,
                    time,
                    respond,
                } => {
                    let id = self.store.add_event(date, title, time);
                    let _ = respond.send(id);
                }
                CalendarCommand::RemoveEvent { date, id, respond } => {
                    let removed = self.store.remove_event(date, id);
                    if !removed {
                        debug!("No event {} on {} to remove", id, date);
                    }
                    let _ = respond.send(removed);
                }
                CalendarCommand::EventsForDate(date, respond) => {
                    let _ = respond.send(self.store.events_for_date(date).to_vec());
                }
                CalendarCommand::OrderedEventsForDate(date, respond) => {
                    let ordered = self
                        .store
                        .ordered_events_for_date(date)
                        .into_iter()
                        .cloned()
                        .collect();
                    let _ = respond.send(ordered);
                }
                CalendarCommand::CountForDate(date, respond) => {
                    let _ = respond.send(self.store.count_for_date(date));
                }
                CalendarCommand::BuildGrid(today, respond) => {
                    let _ = respond.send(self.view.grid(today, &self.store));
                }
                CalendarCommand::View(respond) => {
                    let _ = respond.send(self.view);
                }
                CalendarCommand::Navigate(navigation, respond) => {
                    self.apply(navigation);
                    let _ = respond.send(self.view);
                }
                CalendarCommand::CollectDue {
                    today,
                    now,
                    respond,
                } => {
                    let _ = respond.send(collect_due(&mut self.store, today, now));
                }
                CalendarCommand::Shutdown => {
                    info!("Calendar actor shutting down");
                    break;
                }
            }
        }

        info!("Calendar actor shut down");
    }

    fn apply(&mut self, navigation: Navigation) {
        match navigation {
            Navigation::NextMonth => self.view.next_month(),
            Navigation::PreviousMonth => self.view.previous_month(),
            Navigation::JumpTo(date) => self.view.jump_to(date),
            Navigation::Select(date) => self.view.select(date),
        }
        debug!("Calendar view now at {}", self.view.current_month);
    }
}
