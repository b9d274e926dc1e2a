//! Month grid layout.
//!
//! Cells are emitted in row-major reading order for a 7-column grid whose
//! first column is Monday. Leading blanks pad the first week; trailing
//! padding after the last day is left to the renderer.

use chrono::{Datelike, NaiveDate};

use super::month::YearMonth;
use super::store::EventStore;

/// Number of columns in the grid (Monday..Sunday)
pub const WEEK_LENGTH: usize = 7;

/// One day position in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_selected: bool,
    pub event_count: usize,
}

impl DayCell {
    pub fn has_events(&self) -> bool {
        self.event_count > 0
    }
}

/// The data describing one position in the rendered month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellDescriptor {
    /// Padding before day 1
    Blank,
    Day(DayCell),
}

impl CellDescriptor {
    pub fn day(&self) -> Option<&DayCell> {
        match self {
            CellDescriptor::Day(cell) => Some(cell),
            CellDescriptor::Blank => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, CellDescriptor::Blank)
    }
}

/// Layout of one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub cells: Vec<CellDescriptor>,
}

impl MonthGrid {
    /// Grid position of the cell at `index` as `(row, column)`
    pub fn position(index: usize) -> (usize, usize) {
        (index / WEEK_LENGTH, index % WEEK_LENGTH)
    }

    /// Cells grouped into weeks; the last row may be short
    pub fn rows(&self) -> impl Iterator<Item = &[CellDescriptor]> {
        self.cells.chunks(WEEK_LENGTH)
    }

    pub fn row_count(&self) -> usize {
        self.cells.len().div_ceil(WEEK_LENGTH)
    }

    /// Number of leading blank cells
    pub fn offset(&self) -> usize {
        self.cells.iter().take_while(|cell| cell.is_blank()).count()
    }

    pub fn day_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(CellDescriptor::day)
    }

    /// Index of the cell holding `date`, if it is in this month
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.day().is_some_and(|day| day.date == date))
    }
}

/// Lay out `month`, flagging `today` and `selected` and attaching each
/// date's event count from `store`.
pub fn build_grid(
    month: YearMonth,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    store: &EventStore,
) -> MonthGrid {
    let offset = month.first_day().weekday().num_days_from_monday() as usize;
    let mut cells = Vec::with_capacity(offset + month.length() as usize);

    cells.extend(std::iter::repeat(CellDescriptor::Blank).take(offset));

    for date in month.days() {
        cells.push(CellDescriptor::Day(DayCell {
            date,
            is_today: date == today,
            is_selected: selected == Some(date),
            event_count: store.count_for_date(date),
        }));
    }

    MonthGrid { month, cells }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_wednesday_start_has_two_blanks() {
        // 1 October 2025 is a Wednesday
        let store = EventStore::new();
        let grid = build_grid(ym(2025, 10), date(2025, 10, 19), None, &store);

        assert_eq!(grid.offset(), 2);
        assert!(grid.cells[0].is_blank());
        assert!(grid.cells[1].is_blank());
        assert_eq!(grid.cells[2].day().unwrap().date, date(2025, 10, 1));
        assert_eq!(grid.day_cells().count(), 31);
        assert_eq!(grid.cells.len(), 33);
    }

    #[test]
    fn test_monday_and_sunday_starts() {
        let store = EventStore::new();

        // September 2025 starts on a Monday
        let grid = build_grid(ym(2025, 9), date(2025, 9, 1), None, &store);
        assert_eq!(grid.offset(), 0);

        // June 2025 starts on a Sunday
        let grid = build_grid(ym(2025, 6), date(2025, 9, 1), None, &store);
        assert_eq!(grid.offset(), 6);
        assert_eq!(MonthGrid::position(6), (0, 6));
        assert_eq!(MonthGrid::position(7), (1, 0));
        assert_eq!(grid.row_count(), 6);
    }

    #[test]
    fn test_day_cells_match_month_length() {
        let store = EventStore::new();
        for month in 1..=12 {
            let month = ym(2024, month);
            let grid = build_grid(month, date(2024, 1, 1), None, &store);
            assert_eq!(grid.day_cells().count() as u32, month.length());

            // Every day lands in the column of its weekday
            for (index, cell) in grid.cells.iter().enumerate() {
                if let Some(day) = cell.day() {
                    let (_, column) = MonthGrid::position(index);
                    assert_eq!(column as u32, day.date.weekday().num_days_from_monday());
                }
            }
        }
    }

    #[test]
    fn test_today_flag() {
        let store = EventStore::new();
        let today = date(2025, 11, 7);

        let grid = build_grid(ym(2025, 11), today, None, &store);
        let flagged: Vec<_> = grid.day_cells().filter(|cell| cell.is_today).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].date, today);

        let grid = build_grid(ym(2025, 12), today, None, &store);
        assert_eq!(grid.day_cells().filter(|cell| cell.is_today).count(), 0);
    }

    #[test]
    fn test_selection_and_event_counts() {
        let mut store = EventStore::new();
        let busy = date(2025, 11, 7);
        store.add_event(busy, "Lecture", "08:00-09:00");
        store.add_event(busy, "Futsal", "20:00-22:00");

        let grid = build_grid(ym(2025, 11), date(2025, 11, 1), Some(busy), &store);
        let index = grid.index_of(busy).unwrap();
        let cell = grid.cells[index].day().unwrap();

        assert!(cell.is_selected);
        assert_eq!(cell.event_count, 2);
        assert!(cell.has_events());
        assert_eq!(grid.day_cells().filter(|cell| cell.is_selected).count(), 1);
        assert_eq!(grid.day_cells().map(|cell| cell.event_count).sum::<usize>(), 2);
    }

    #[test]
    fn test_build_is_idempotent() {
        let mut store = EventStore::new();
        store.add_event(date(2025, 11, 3), "Gym", "18:00");
        let today = date(2025, 11, 3);

        let first = build_grid(ym(2025, 11), today, Some(today), &store);
        let second = build_grid(ym(2025, 11), today, Some(today), &store);
        assert_eq!(first, second);
    }
}
