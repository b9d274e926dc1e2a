use chrono::{NaiveTime, Timelike};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "H:mm" or "HH:mm" followed by anything on the same line
    static ref LEADING_TIME: Regex =
        Regex::new(r"^([0-9]{1,2}):([0-9]{2})[^\n\r\x{85}\x{2028}\x{2029}]*$")
            .expect("leading time pattern is valid");
}

/// Comparable start time extracted from a free-form time string.
///
/// `Unparsed` is the sentinel for strings without a leading wall-clock time.
/// It orders after every `At` value, so unparseable events sort last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StartTime {
    At(NaiveTime),
    Unparsed,
}

impl StartTime {
    /// The wall-clock time, if one was parsed
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            StartTime::At(time) => Some(*time),
            StartTime::Unparsed => None,
        }
    }

    pub fn is_unparsed(&self) -> bool {
        matches!(self, StartTime::Unparsed)
    }

    /// Whether this start time falls on the same hour and minute as `now`.
    /// Seconds are ignored; the sentinel never matches.
    pub fn matches_minute(&self, now: NaiveTime) -> bool {
        self.time()
            .is_some_and(|time| time.hour() == now.hour() && time.minute() == now.minute())
    }
}

/// Parse the leading `H:mm` / `HH:mm` token of a time string such as
/// `"8:00-9:00"` or `"10:00"`.
///
/// Never fails: anything that does not start with a valid wall-clock time
/// (including `"All Day"`, `"24:00"` and `"9:75"`) yields [`StartTime::Unparsed`].
pub fn parse_start_time(raw: &str) -> StartTime {
    // Strip space and ASCII control characters only
    let trimmed = raw.trim_matches(|c: char| c <= ' ');

    let Some(caps) = LEADING_TIME.captures(trimmed) else {
        return StartTime::Unparsed;
    };

    let hour = caps[1].parse::<u32>().ok();
    let minute = caps[2].parse::<u32>().ok();

    match (hour, minute) {
        (Some(hour), Some(minute)) => NaiveTime::from_hms_opt(hour, minute, 0)
            .map(StartTime::At)
            .unwrap_or(StartTime::Unparsed),
        _ => StartTime::Unparsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> StartTime {
        StartTime::At(NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
    }

    #[test]
    fn test_parse_start_time() {
        // Valid cases
        assert_eq!(parse_start_time("08:00"), at(8, 0));
        assert_eq!(parse_start_time("8:00-9:00"), at(8, 0));
        assert_eq!(parse_start_time("10:00-11:00"), at(10, 0));
        assert_eq!(parse_start_time("  23:59 late"), at(23, 59));
        assert_eq!(parse_start_time("0:05"), at(0, 5));
        assert_eq!(parse_start_time("14:05-15:00"), at(14, 5));

        // Invalid cases
        assert_eq!(parse_start_time("All Day"), StartTime::Unparsed);
        assert_eq!(parse_start_time("lunch"), StartTime::Unparsed);
        assert_eq!(parse_start_time(""), StartTime::Unparsed);
        assert_eq!(parse_start_time("24:00"), StartTime::Unparsed); // Hour out of range
        assert_eq!(parse_start_time("12:60"), StartTime::Unparsed); // Minute out of range
        assert_eq!(parse_start_time("123:45"), StartTime::Unparsed); // Too many hour digits
        assert_eq!(parse_start_time("9:5"), StartTime::Unparsed); // Single minute digit
        assert_eq!(parse_start_time("at 10:00"), StartTime::Unparsed);
        assert_eq!(parse_start_time("10:00\nnext line"), StartTime::Unparsed);
    }

    #[test]
    fn test_sentinel_sorts_after_every_time() {
        let latest = at(23, 59);
        assert!(StartTime::Unparsed > latest);
        assert!(StartTime::Unparsed > at(0, 0));
        assert!(at(9, 0) < at(10, 0));
    }

    #[test]
    fn test_matches_minute_ignores_seconds() {
        let start = parse_start_time("14:05-15:00");
        assert!(start.matches_minute(NaiveTime::from_hms_opt(14, 5, 42).unwrap()));
        assert!(!start.matches_minute(NaiveTime::from_hms_opt(14, 6, 0).unwrap()));
        assert!(!StartTime::Unparsed.matches_minute(NaiveTime::from_hms_opt(0, 0, 0).unwrap()));
    }

    #[test]
    fn test_time_of_sentinel_is_none() {
        assert_eq!(parse_start_time("9:30").time(), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse_start_time("All Day").time(), None);
    }

    #[test]
    fn test_every_valid_time_round_trips() {
        for hour in 0..24 {
            for minute in 0..60 {
                let expected = at(hour, minute);
                assert_eq!(parse_start_time(&format!("{:02}:{:02}", hour, minute)), expected);
                if hour < 10 {
                    assert_eq!(parse_start_time(&format!("{}:{:02}-x", hour, minute)), expected);
                }
            }
        }
    }
}
