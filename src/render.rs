//! Plain-text rendering of the month grid and a day's event list.
//!
//! Grid cells are five characters wide: the selected day is wrapped in
//! `[..]`, today in `(..)`, and a trailing digit shows the event count
//! (`+` above nine).

use chrono::{Datelike, NaiveDate};
use rust_i18n::t;
use std::fmt::Write;

use crate::calendar::labels::{detail_date, detail_weekday, month_header, weekday_headers};
use crate::calendar::{CellDescriptor, DayCell, Event, MonthGrid};

const CELL_WIDTH: usize = 5;

fn render_cell(cell: &CellDescriptor) -> String {
    let Some(day) = cell.day() else {
        return " ".repeat(CELL_WIDTH);
    };

    let (open, close) = markers(day);
    let count = match day.event_count {
        0 => ' ',
        n @ 1..=9 => char::from_digit(n as u32, 10).unwrap_or('+'),
        _ => '+',
    };

    format!("{}{:>2}{}{}", open, day.date.day(), close, count)
}

fn markers(day: &DayCell) -> (char, char) {
    if day.is_selected {
        ('[', ']')
    } else if day.is_today {
        ('(', ')')
    } else {
        (' ', ' ')
    }
}

/// Render the month header, weekday headers and one line per week
pub fn render_grid(grid: &MonthGrid, locale: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", month_header(grid.month, locale));

    let headers: Vec<String> = weekday_headers(locale)
        .iter()
        .map(|name| format!(" {:>2}  ", name))
        .collect();
    let _ = writeln!(out, "{}", headers.concat().trim_end());

    for row in grid.rows() {
        let line: String = row.iter().map(render_cell).collect();
        let _ = writeln!(out, "{}", line.trim_end());
    }

    out
}

/// Render the detail pane of `date` with `events` already in display order
pub fn render_day(date: NaiveDate, events: &[Event], locale: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", detail_weekday(date, locale));
    let _ = writeln!(out, "{}", detail_date(date, locale));

    if events.is_empty() {
        let _ = writeln!(out, "  {}", t!("no_events", locale = locale));
    }

    let width = events.iter().map(|e| e.time.chars().count()).max().unwrap_or(0);
    for event in events {
        let _ = writeln!(out, "  {:<width$}  {}", event.time, event.title, width = width);
    }

    out
}
