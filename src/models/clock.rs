//! Clock times and showing windows.
//!
//! Showing start times, end times and film durations all travel as loose
//! "H:MM" strings. [`ClockTime`] is the parsed form; [`ShowingWindow`] is a
//! pair of same-day instants used for conflict detection.
//!
//! # Time Model
//! Instants are times of day on one arbitrary calendar day, seconds zeroed.
//! No timezone is involved.
//!
//! # Leniency
//! The accepted grammar is `^(\d?\d):(\d\d)$` with hours > 0 and
//! minutes <= 60. Minute 60 is legal ("1:60"), and hours are unbounded
//! above 23 until a caller applies the midnight check.

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minutes in an hour.
pub const AN_HOUR: u32 = 60;

/// First hour that falls on the next day.
pub const MIDNIGHT_HOURS: u32 = 24;

static CLOCK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]?[0-9]):([0-9][0-9])$").expect("valid clock pattern"));

/// An hours/minutes pair parsed from "H:MM" or "HH:MM".
///
/// Used both as a time of day (start/end) and as a run length (duration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    /// Hours component.
    pub hours: u32,
    /// Minutes component.
    pub minutes: u32,
}

impl ClockTime {
    /// Creates a clock time without validation.
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    /// Parses a clock string.
    ///
    /// Returns `None` unless the text matches the pattern, hours > 0 and
    /// minutes <= 60.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = CLOCK_PATTERN.captures(text)?;
        let hours: u32 = caps[1].parse().ok()?;
        let minutes: u32 = caps[2].parse().ok()?;
        if hours == 0 || minutes > AN_HOUR {
            return None;
        }
        Some(Self { hours, minutes })
    }

    /// End of a run that starts at `self`, lasts `duration`, and is followed
    /// by `buffer_minutes` of cleaning.
    ///
    /// Minutes carry into hours; hours are not wrapped at midnight.
    /// Returns `None` if the sum does not fit in a `u32`.
    pub fn end_of_run(&self, duration: ClockTime, buffer_minutes: u32) -> Option<Self> {
        let mut hours = self.hours.checked_add(duration.hours)?;
        let mut minutes = self
            .minutes
            .checked_add(duration.minutes)?
            .checked_add(buffer_minutes)?;
        if minutes >= AN_HOUR {
            hours = hours.checked_add(minutes / AN_HOUR)?;
            minutes %= AN_HOUR;
        }
        Some(Self { hours, minutes })
    }

    /// Whether this time is at or past midnight.
    #[inline]
    pub fn is_after_midnight(&self) -> bool {
        self.hours >= MIDNIGHT_HOURS
    }

    /// Same-day instant for this clock time.
    ///
    /// Minutes are applied before hours, so a minute value of 60 rolls over
    /// and is then overwritten by the hour: "14:60" lands on 14:00.
    /// Returns `None` for hours past 23.
    pub fn to_instant(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hours, self.minutes % AN_HOUR, 0)
    }
}

impl fmt::Display for ClockTime {
    /// Unpadded "hours:minutes", e.g. "16:20" or "1:5".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hours, self.minutes)
    }
}

/// A showing's occupancy of a screen: start instant to end instant
/// (end includes the cleaning buffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowingWindow {
    /// Start instant.
    pub start: NaiveTime,
    /// End instant.
    pub end: NaiveTime,
}

impl ShowingWindow {
    /// Creates a new window.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Builds a window from two clock times, or `None` if either falls
    /// outside a single day.
    pub fn from_clock(start: ClockTime, end: ClockTime) -> Option<Self> {
        Some(Self::new(start.to_instant()?, end.to_instant()?))
    }

    /// Whether an instant lies strictly between start and end.
    #[inline]
    pub fn strictly_contains(&self, instant: NaiveTime) -> bool {
        instant > self.start && instant < self.end
    }

    /// Whether this (intended) window conflicts with an `existing` one.
    ///
    /// Conflict iff the intended start or end lies strictly inside the
    /// existing window, or the intended window strictly envelops it.
    /// Touching boundaries are not a conflict. Not symmetric in general.
    pub fn conflicts_with(&self, existing: &Self) -> bool {
        existing.strictly_contains(self.start)
            || existing.strictly_contains(self.end)
            || (self.start < existing.start && self.end > existing.end)
    }
}
