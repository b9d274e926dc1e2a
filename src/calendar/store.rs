//! Date-indexed event storage and the display order of a day's events.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

use super::models::{Event, EventId};

/// Mapping from calendar date to that date's events, in insertion order.
///
/// Empty buckets are pruned on removal, so "no entry" and "no events" are
/// indistinguishable to callers.
#[derive(Debug, Default, Clone)]
pub struct EventStore {
    events: BTreeMap<NaiveDate, Vec<Event>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new event to `date` and return its identity.
    /// Title and time are stored as given.
    pub fn add_event(
        &mut self,
        date: NaiveDate,
        title: impl Into<String>,
        time: impl Into<String>,
    ) -> EventId {
        let event = Event::new(title, time);
        let id = event.id();
        debug!("Adding event {} on {}", id, date);
        self.events.entry(date).or_default().push(event);
        id
    }

    /// Remove the event with identity `id` from `date`.
    ///
    /// Returns whether an event was removed; a missing date or id is a no-op.
    pub fn remove_event(&mut self, date: NaiveDate, id: EventId) -> bool {
        let Some(bucket) = self.events.get_mut(&date) else {
            return false;
        };

        let Some(index) = bucket.iter().position(|event| event.id() == id) else {
            return false;
        };

        bucket.remove(index);
        if bucket.is_empty() {
            self.events.remove(&date);
        }
        debug!("Removed event {} from {}", id, date);
        true
    }

    /// Events on `date` in insertion order, borrowed from live state
    pub fn events_for_date(&self, date: NaiveDate) -> &[Event] {
        self.events.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count_for_date(&self, date: NaiveDate) -> usize {
        self.events.get(&date).map_or(0, Vec::len)
    }

    /// Events on `date` sorted by parsed start time.
    ///
    /// The sort is stable: equal start times, including several unparseable
    /// ones, keep their insertion order.
    pub fn ordered_events_for_date(&self, date: NaiveDate) -> Vec<&Event> {
        ordered_events(self.events_for_date(date))
    }

    /// Look up a single event on `date`
    pub fn get(&self, date: NaiveDate, id: EventId) -> Option<&Event> {
        self.events_for_date(date).iter().find(|event| event.id() == id)
    }

    pub(crate) fn events_for_date_mut(&mut self, date: NaiveDate) -> Option<&mut Vec<Event>> {
        self.events.get_mut(&date)
    }
}

/// Stable sort of `events` by their parsed start time
pub fn ordered_events(events: &[Event]) -> Vec<&Event> {
    let mut ordered: Vec<&Event> = events.iter().collect();
    ordered.sort_by_key(|event| event.start_time());
    ordered
}
