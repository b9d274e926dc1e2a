use std::fmt;
use uuid::Uuid;

use super::time::{parse_start_time, StartTime};

/// Identity of one stored event.
///
/// Two events with the same title and time are still distinct if they were
/// added separately; removal and reminder tracking go through this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(Uuid);

impl EventId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reminder lifecycle of an event. `Notified` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationState {
    #[default]
    Unnotified,
    Notified,
}

/// A titled, time-described activity on a single calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: EventId,
    /// Display title; may be empty at this layer
    pub title: String,
    /// Free-form time description such as `"10:00-11:00"` or `"All Day"`
    pub time: String,
    notification: NotificationState,
}

impl Event {
    /// Create a new event with a fresh identity
    pub fn new(title: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            id: EventId::new(),
            title: title.into(),
            time: time.into(),
            notification: NotificationState::Unnotified,
        }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn notification(&self) -> NotificationState {
        self.notification
    }

    pub fn is_notified(&self) -> bool {
        self.notification == NotificationState::Notified
    }

    /// Parsed start time used for ordering and reminders
    pub fn start_time(&self) -> StartTime {
        parse_start_time(&self.time)
    }

    pub(crate) fn mark_notified(&mut self) {
        self.notification = NotificationState::Notified;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_events_have_distinct_ids() {
        let first = Event::new("Lunch", "12:00-13:00");
        let second = Event::new("Lunch", "12:00-13:00");
        assert_ne!(first.id(), second.id());
        assert_ne!(first, second);
    }

    #[test]
    fn test_notification_state_is_terminal() {
        let mut event = Event::new("Standup", "09:15");
        assert_eq!(event.notification(), NotificationState::Unnotified);
        event.mark_notified();
        event.mark_notified();
        assert!(event.is_notified());
    }
}
