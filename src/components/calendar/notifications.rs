use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use rust_i18n::t;
use std::io::Write;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, info, warn};

use crate::calendar::{EventId, EventStore};
use crate::error::{other_error, CalResult};

/// An event whose start minute has been reached during a tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueEvent {
    pub event_id: EventId,
    pub date: NaiveDate,
    pub title: String,
    pub time: String,
}

/// A reminder ready for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub event_id: EventId,
    pub date: NaiveDate,
    pub title: String,
    pub message: String,
}

impl Notification {
    /// Localised "Event Reminder" notification for `due`
    pub fn reminder(due: &DueEvent, locale: &str) -> Self {
        Self {
            event_id: due.event_id,
            date: due.date,
            title: t!("event_reminder_title", locale = locale).to_string(),
            message: t!("event_reminder_message", locale = locale, title = due.title.as_str()).to_string(),
        }
    }
}

/// Find the not-yet-notified events on `today` that start at the same hour
/// and minute as `now`, and mark them notified.
///
/// Events whose time string has no parseable start never match. An event is
/// returned at most once over its lifetime.
pub fn collect_due(store: &mut EventStore, today: NaiveDate, now: NaiveTime) -> Vec<DueEvent> {
    let Some(events) = store.events_for_date_mut(today) else {
        return Vec::new();
    };

    let mut due = Vec::new();
    for event in events.iter_mut() {
        if event.is_notified() {
            continue;
        }

        let start = event.start_time();
        if start.is_unparsed() {
            continue;
        }

        if start.matches_minute(now) {
            event.mark_notified();
            debug!("Event {} is due at {}", event.id(), now.format("%H:%M"));
            due.push(DueEvent {
                event_id: event.id(),
                date: today,
                title: event.title.clone(),
                time: event.time.clone(),
            });
        }
    }

    due
}

/// Consumer of reminder notifications
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn deliver(&self, notification: Notification) -> CalResult<()>;
}

/// Forwards notifications into a bounded channel without waiting
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::Sender<Notification>,
}

impl ChannelSink {
    /// Create a sink and the receiver the presentation layer reads from
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<Notification>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

#[async_trait]
impl NotificationSink for ChannelSink {
    async fn deliver(&self, notification: Notification) -> CalResult<()> {
        // Never wait on a slow reader; a full buffer drops the reminder
        self.tx.try_send(notification).map_err(|e| match e {
            TrySendError::Full(n) => {
                warn!("Notification buffer full, dropping reminder for {}", n.event_id);
                other_error("Notification buffer full")
            }
            TrySendError::Closed(_) => other_error("Notification receiver dropped"),
        })
    }
}

/// Logs notifications and rings the terminal bell
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[async_trait]
impl NotificationSink for LogSink {
    async fn deliver(&self, notification: Notification) -> CalResult<()> {
        info!("{}: {}", notification.title, notification.message);
        ring(&notification)?;
        Ok(())
    }
}

fn ring(notification: &Notification) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "\x07[{}] {}", notification.title, notification.message)?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 7).unwrap()
    }

    fn at(hour: u32, minute: u32, second: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, second).unwrap()
    }

    #[test]
    fn test_due_event_fires_once() {
        let mut store = EventStore::new();
        let id = store.add_event(today(), "Review", "14:05-15:00");

        let due = collect_due(&mut store, today(), at(14, 5, 12));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].event_id, id);
        assert!(store.get(today(), id).unwrap().is_notified());

        assert!(collect_due(&mut store, today(), at(14, 5, 42)).is_empty());
        assert!(collect_due(&mut store, today(), at(14, 6, 0)).is_empty());
    }

    #[test]
    fn test_unparseable_never_fires() {
        let mut store = EventStore::new();
        store.add_event(today(), "Lunch", "lunch");

        for hour in 0..24 {
            for minute in 0..60 {
                assert!(collect_due(&mut store, today(), at(hour, minute, 0)).is_empty());
            }
        }
    }

    #[test]
    fn test_only_today_is_checked() {
        let mut store = EventStore::new();
        let tomorrow = today().succ_opt().unwrap();
        store.add_event(tomorrow, "Dentist", "09:00");

        assert!(collect_due(&mut store, today(), at(9, 0, 0)).is_empty());
        assert_eq!(collect_due(&mut store, tomorrow, at(9, 0, 0)).len(), 1);
    }

    #[test]
    fn test_value_duplicates_each_fire() {
        let mut store = EventStore::new();
        store.add_event(today(), "Stretch", "10:30");
        store.add_event(today(), "Stretch", "10:30");
        store.add_event(today(), "Other", "10:31");

        let due = collect_due(&mut store, today(), at(10, 30, 0));
        assert_eq!(due.len(), 2);
        assert_ne!(due[0].event_id, due[1].event_id);
    }

    #[test]
    fn test_reminder_text() {
        let due = DueEvent {
            event_id: EventId::new(),
            date: today(),
            title: "Team Meeting".to_string(),
            time: "10:00-11:00".to_string(),
        };

        let notification = Notification::reminder(&due, "en");
        assert_eq!(notification.title, "Event Reminder");
        assert_eq!(notification.message, "It's time for: Team Meeting");
    }

    #[tokio::test]
    async fn test_channel_sink_forwards() {
        let (sink, mut rx) = ChannelSink::new(4);
        let due = DueEvent {
            event_id: EventId::new(),
            date: today(),
            title: "Futsal".to_string(),
            time: "20:00-22:00".to_string(),
        };

        sink.deliver(Notification::reminder(&due, "en")).await.unwrap();
        let received = rx.recv().await.unwrap();
        assert_eq!(received.event_id, due.event_id);

        drop(rx);
        assert!(sink.deliver(Notification::reminder(&due, "en")).await.is_err());
    }
}
