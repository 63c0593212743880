//! Countdown derivation.

use chrono::{DateTime, Utc};
use std::fmt;

/// Shown once the target instant has been reached.
pub const ENDED_LABEL: &str = "Presale ended";

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Positive remaining duration split into calendar-free units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Split a whole number of seconds. Returns `None` unless `total > 0`.
    pub fn from_seconds(total: i64) -> Option<Self> {
        if total <= 0 {
            return None;
        }
        Some(Self {
            days: total / SECS_PER_DAY,
            hours: (total % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (total % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: total % SECS_PER_MINUTE,
        })
    }

    pub fn total_seconds(&self) -> i64 {
        self.days * SECS_PER_DAY
            + self.hours * SECS_PER_HOUR
            + self.minutes * SECS_PER_MINUTE
            + self.seconds
    }

    /// Zero-padded cells for a Days / Hours / Minutes / Seconds grid.
    pub fn units(&self) -> [(String, &'static str); 4] {
        [
            (format!("{:02}", self.days), "Days"),
            (format!("{:02}", self.hours), "Hours"),
            (format!("{:02}", self.minutes), "Minutes"),
            (format!("{:02}", self.seconds), "Seconds"),
        ]
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Countdown value shown by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Running(Remaining),
    Ended,
}

impl Countdown {
    pub fn is_ended(&self) -> bool {
        matches!(self, Countdown::Ended)
    }

    pub fn remaining(&self) -> Option<Remaining> {
        match self {
            Countdown::Running(remaining) => Some(*remaining),
            Countdown::Ended => None,
        }
    }

    /// Grid cells; all zeros once ended.
    pub fn units(&self) -> [(String, &'static str); 4] {
        match self {
            Countdown::Running(remaining) => remaining.units(),
            Countdown::Ended => Remaining {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0,
            }
            .units(),
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Running(remaining) => fmt::Display::fmt(remaining, f),
            Countdown::Ended => f.write_str(ENDED_LABEL),
        }
    }
}

/// Countdown from `now` to `target`, truncated to whole seconds.
pub fn derive(target: DateTime<Utc>, now: DateTime<Utc>) -> Countdown {
    match Remaining::from_seconds((target - now).num_seconds()) {
        Some(remaining) => Countdown::Running(remaining),
        None => Countdown::Ended,
    }
}
