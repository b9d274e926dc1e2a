use chrono::{Datelike, NaiveDate, Weekday};
use rust_i18n::t;

use super::month::YearMonth;

/// Full month name, e.g. "November"
pub fn month_name(month: u32, locale: &str) -> String {
    match month {
        1 => t!("month_january", locale = locale),
        2 => t!("month_february", locale = locale),
        3 => t!("month_march", locale = locale),
        4 => t!("month_april", locale = locale),
        5 => t!("month_may", locale = locale),
        6 => t!("month_june", locale = locale),
        7 => t!("month_july", locale = locale),
        8 => t!("month_august", locale = locale),
        9 => t!("month_september", locale = locale),
        10 => t!("month_october", locale = locale),
        11 => t!("month_november", locale = locale),
        _ => t!("month_december", locale = locale),
    }
    .to_string()
}

/// Abbreviated month name, e.g. "Nov"
pub fn short_month_name(month: u32, locale: &str) -> String {
    match month {
        1 => t!("month_short_january", locale = locale),
        2 => t!("month_short_february", locale = locale),
        3 => t!("month_short_march", locale = locale),
        4 => t!("month_short_april", locale = locale),
        5 => t!("month_short_may", locale = locale),
        6 => t!("month_short_june", locale = locale),
        7 => t!("month_short_july", locale = locale),
        8 => t!("month_short_august", locale = locale),
        9 => t!("month_short_september", locale = locale),
        10 => t!("month_short_october", locale = locale),
        11 => t!("month_short_november", locale = locale),
        _ => t!("month_short_december", locale = locale),
    }
    .to_string()
}

pub fn weekday_name(weekday: Weekday, locale: &str) -> String {
    match weekday {
        Weekday::Mon => t!("day_monday", locale = locale),
        Weekday::Tue => t!("day_tuesday", locale = locale),
        Weekday::Wed => t!("day_wednesday", locale = locale),
        Weekday::Thu => t!("day_thursday", locale = locale),
        Weekday::Fri => t!("day_friday", locale = locale),
        Weekday::Sat => t!("day_saturday", locale = locale),
        Weekday::Sun => t!("day_sunday", locale = locale),
    }
    .to_string()
}

pub fn short_weekday_name(weekday: Weekday, locale: &str) -> String {
    match weekday {
        Weekday::Mon => t!("day_short_monday", locale = locale),
        Weekday::Tue => t!("day_short_tuesday", locale = locale),
        Weekday::Wed => t!("day_short_wednesday", locale = locale),
        Weekday::Thu => t!("day_short_thursday", locale = locale),
        Weekday::Fri => t!("day_short_friday", locale = locale),
        Weekday::Sat => t!("day_short_saturday", locale = locale),
        Weekday::Sun => t!("day_short_sunday", locale = locale),
    }
    .to_string()
}

/// Column headers of the grid, Monday first
pub fn weekday_headers(locale: &str) -> Vec<String> {
    let mut day = Weekday::Mon;
    let mut headers = Vec::with_capacity(7);
    for _ in 0..7 {
        headers.push(short_weekday_name(day, locale));
        day = day.succ();
    }
    headers
}

/// Month header such as "NOVEMBER 2025"
pub fn month_header(month: YearMonth, locale: &str) -> String {
    format!("{} {}", month_name(month.month(), locale).to_uppercase(), month.year())
}

/// Weekday line of the day detail, e.g. "FRIDAY"
pub fn detail_weekday(date: NaiveDate, locale: &str) -> String {
    weekday_name(date.weekday(), locale).to_uppercase()
}

/// Date line of the day detail in `d MMM yy` form, e.g. "7 NOV 25"
pub fn detail_date(date: NaiveDate, locale: &str) -> String {
    format!(
        "{} {} {}",
        date.day(),
        short_month_name(date.month(), locale),
        date.format("%y")
    )
    .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_english_labels() {
        let day = date(2025, 11, 7);
        assert_eq!(month_header(YearMonth::from_date(day), "en"), "NOVEMBER 2025");
        assert_eq!(detail_weekday(day, "en"), "FRIDAY");
        assert_eq!(detail_date(day, "en"), "7 NOV 25");
        assert_eq!(detail_date(date(2009, 3, 21), "en"), "21 MAR 09");
    }

    #[test]
    fn test_finnish_labels() {
        let day = date(2025, 11, 7);
        assert_eq!(month_header(YearMonth::from_date(day), "fi"), "MARRASKUU 2025");
        assert_eq!(detail_weekday(day, "fi"), "PERJANTAI");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        assert_eq!(weekday_name(Weekday::Mon, "xx"), "Monday");
    }

    #[test]
    fn test_weekday_headers_start_on_monday() {
        let headers = weekday_headers("en");
        assert_eq!(headers.len(), 7);
        assert_eq!(headers.first().map(String::as_str), Some("Mo"));
        assert_eq!(headers.last().map(String::as_str), Some("Su"));
    }
}
