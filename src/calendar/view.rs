use chrono::NaiveDate;

use super::grid::{build_grid, MonthGrid};
use super::month::YearMonth;
use super::store::EventStore;

/// Visible month and selected date of the calendar screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    pub current_month: YearMonth,
    pub selected_date: Option<NaiveDate>,
}

impl CalendarView {
    /// Startup state: the month of `today` with `today` selected
    pub fn starting_at(today: NaiveDate) -> Self {
        Self {
            current_month: YearMonth::from_date(today),
            selected_date: Some(today),
        }
    }

    pub fn next_month(&mut self) {
        self.current_month = self.current_month.next();
    }

    pub fn previous_month(&mut self) {
        self.current_month = self.current_month.previous();
    }

    /// Show the month containing `date`. The selection is left alone.
    pub fn jump_to(&mut self, date: NaiveDate) {
        self.current_month = YearMonth::from_date(date);
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
    }

    pub fn clear_selection(&mut self) {
        self.selected_date = None;
    }

    /// Grid for the visible month
    pub fn grid(&self, today: NaiveDate, store: &EventStore) -> MonthGrid {
        build_grid(self.current_month, today, self.selected_date, store)
    }
}
