use chrono::{Datelike, NaiveDate};
use std::fmt;

/// A calendar month without a day component.
///
/// Arithmetic is total over the years chrono can represent; month offsets
/// wrap across year boundaries in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Build a month from a year and a 1-based month number
    pub fn new(year: i32, month: u32) -> Option<Self> {
        // Reject years chrono cannot place a first day in
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Shift by `delta` months, clamping at the ends of chrono's date range
    pub fn plus_months(self, delta: i32) -> Self {
        let total = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(delta);
        let year = total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u32;

        match i32::try_from(year).ok().and_then(|year| Self::new(year, month)) {
            Some(shifted) => shifted,
            None if delta < 0 => YearMonth::from_date(NaiveDate::MIN),
            None => YearMonth::from_date(NaiveDate::MAX),
        }
    }

    pub fn next(self) -> Self {
        self.plus_months(1)
    }

    pub fn previous(self) -> Self {
        self.plus_months(-1)
    }

    pub fn first_day(&self) -> NaiveDate {
        self.at_day(1).unwrap_or(NaiveDate::MIN)
    }

    /// Date for `day` in this month, if the day exists
    pub fn at_day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Number of days in this month
    pub fn length(&self) -> u32 {
        (28..=31)
            .rev()
            .find(|day| self.at_day(*day).is_some())
            .unwrap_or(28)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Every date in the month, in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (1..=self.length()).filter_map(move |day| self.at_day(day))
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        YearMonth::from_date(date)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
