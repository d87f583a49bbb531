//! Wall-clock times within a trip day.
//!
//! Times are minutes since the day's midnight. Hours are never wrapped, so a
//! three hour activity starting at `23:00` ends at `26:00`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `H:MM`, `HH:MM` or `HHH:MM`, surrounding whitespace tolerated.
static CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d{1,3}):([0-5]\d)\s*$").unwrap());

/// Two clock times joined by `-`, e.g. `8:00-10:00`.
static SLOT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,3}:[0-5]\d)\s*-\s*(\d{1,3}:[0-5]\d)\s*$").unwrap()
});

/// Error for a string that is not an `HH:MM` clock time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid clock time {value:?}, expected HH:MM")]
pub struct ClockParseError {
    value: String,
}

/// A time of day in whole minutes, allowed to run past `24:00`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u32);

impl ClockTime {
    /// Creates a clock time from hours and minutes.
    #[must_use]
    pub const fn hm(hours: u32, minutes: u32) -> Self {
        Self(hours * 60 + minutes)
    }

    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Minutes since midnight.
    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn add_minutes(self, minutes: u32) -> Self {
        Self(self.0.saturating_add(minutes))
    }

    /// Minutes from `self` until `later`, clamped at zero when `later` is earlier.
    #[must_use]
    pub const fn minutes_until(self, later: Self) -> u32 {
        later.0.saturating_sub(self.0)
    }

    /// Parses a clock time, returning `None` for anything malformed.
    pub fn parse(s: &str) -> Option<Self> {
        let caps = CLOCK_RE.captures(s)?;
        let hours: u32 = caps[1].parse().ok()?;
        let minutes: u32 = caps[2].parse().ok()?;
        Some(Self::hm(hours, minutes))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for ClockTime {
    type Err = ClockParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ClockParseError {
            value: s.to_string(),
        })
    }
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A scheduled window, rendered as `HH:MM-HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeSlot {
    #[must_use]
    pub const fn starting_at(start: ClockTime, minutes: u32) -> Self {
        Self {
            start,
            end: start.add_minutes(minutes),
        }
    }

    /// Parses `HH:MM-HH:MM`, tolerating single-digit hours on either side.
    pub fn parse(s: &str) -> Option<Self> {
        let caps = SLOT_RE.captures(s)?;
        Some(Self {
            start: ClockTime::parse(&caps[1])?,
            end: ClockTime::parse(&caps[2])?,
        })
    }

    /// Length of the window; an end before the start counts as zero.
    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.start.minutes_until(self.end)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
