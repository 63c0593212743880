//! # Time Utilities
//!
//! Utilities for time formatting and manipulation using chrono, plus the
//! [`Clock`] capability used by anything that needs "now" and wants to be
//! testable.

use chrono::{DateTime, NaiveDate, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Format time as RFC3339 string.
pub fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339()
}

/// Parse RFC3339 string to UTC DateTime.
pub fn parse_utc(moment: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(moment.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::FailToDateParse(moment.to_string()))
}

/// Format a calendar day the way the site prints it, e.g. `Feb 1, 2026`.
pub fn format_day(day: NaiveDate) -> String {
    day.format("%b %-d, %Y").to_string()
}

/// Format an inclusive day range, collapsing the year when both ends share it.
///
/// ```rust
/// use chrono::NaiveDate;
/// use lib_utils::time::format_day_range;
///
/// let start = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
/// assert_eq!(format_day_range(start, end), "Feb 1 – Feb 3, 2026");
/// ```
pub fn format_day_range(start: NaiveDate, end: NaiveDate) -> String {
    if start.format("%Y").to_string() == end.format("%Y").to_string() {
        format!("{} – {}", start.format("%b %-d"), format_day(end))
    } else {
        format!("{} – {}", format_day(start), format_day(end))
    }
}

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by [`Utc::now`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        now_utc()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToDateParse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_utc() {
        let parsed = parse_utc("2026-02-01T00:00:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap());

        let offset = parse_utc("2026-02-01T02:00:00+02:00").unwrap();
        assert_eq!(offset, parsed);
    }

    #[test]
    fn test_parse_utc_invalid() {
        let err = parse_utc("next tuesday").unwrap_err();
        assert!(matches!(err, Error::FailToDateParse(ref s) if s == "next tuesday"));
    }

    #[test]
    fn test_format_day_range() {
        let start = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
        assert_eq!(format_day(start), "Feb 1, 2026");
        assert_eq!(format_day_range(start, end), "Feb 1 – Feb 3, 2026");

        let next_year = NaiveDate::from_ymd_opt(2027, 1, 2).unwrap();
        assert_eq!(
            format_day_range(start, next_year),
            "Feb 1, 2026 – Jan 2, 2027"
        );
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let before = now_utc();
        let clock = SystemClock;
        assert!(clock.now() >= before);
    }
}
