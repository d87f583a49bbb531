//! Itinerary documents: activities grouped into days.
//!
//! The shapes mirror the JSON exchanged with the trip storage API. Fields this
//! crate does not interpret are carried in `extra` so a document survives a
//! round trip unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clock::{ClockTime, TimeSlot};

/// Reserved id of the lunch anchor.
pub const LUNCH_ID: &str = "LUNCH";

/// Reserved id of the transit anchor.
pub const TRAVEL_ID: &str = "TRAVEL";

const LUNCH_CATEGORY: &str = "Ăn uống";
const TRAVEL_CATEGORY: &str = "Di chuyển";

/// The fixed role an activity plays in a day.
///
/// Anchors (lunch and transit) are not user-movable or deletable and get
/// their durations from policy rather than from the activity itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Lunch,
    Travel,
    Regular,
}

impl Role {
    /// Derives the role from the reserved ids and category names.
    pub fn classify(id: Option<&str>, category: Option<&str>) -> Self {
        if id == Some(TRAVEL_ID) || matches!(category, Some(TRAVEL_CATEGORY | TRAVEL_ID)) {
            Self::Travel
        } else if id == Some(LUNCH_ID) || category.is_some_and(is_lunch_category) {
            Self::Lunch
        } else {
            Self::Regular
        }
    }

    #[must_use]
    pub const fn is_anchor(self) -> bool {
        matches!(self, Self::Lunch | Self::Travel)
    }
}

fn is_lunch_category(category: &str) -> bool {
    category == LUNCH_CATEGORY || category.eq_ignore_ascii_case("lunch")
}

/// The time fields of an activity, handed between endpoints by drag reordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeFields {
    pub time_slot: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl TimeFields {
    pub const fn is_empty(&self) -> bool {
        self.time_slot.is_none() && self.start_time.is_none() && self.end_time.is_none()
    }

    /// Hands these fields to `activity`, field by field.
    ///
    /// A `time_slot` brings its own start and end, so the receiver's are
    /// replaced with whatever accompanies it. Otherwise a handed-over start or
    /// end replaces the receiver's, the receiver's `time_slot` is dropped, and
    /// a kept bound that would now invert the window is dropped too.
    pub fn hand_to(self, activity: &mut Activity) {
        if self.time_slot.is_some() {
            activity.time_slot = self.time_slot;
            activity.start_time = self.start_time;
            activity.end_time = self.end_time;
            return;
        }

        let gives_start = self.start_time.is_some();
        let gives_end = self.end_time.is_some();
        if !gives_start && !gives_end {
            return;
        }
        if gives_start {
            activity.start_time = self.start_time;
        }
        if gives_end {
            activity.end_time = self.end_time;
        }
        activity.time_slot = None;

        let start = activity.explicit_start_time();
        let end = activity.end_time.as_deref().and_then(ClockTime::parse);
        if let (Some(start), Some(end)) = (start, end) {
            if end < start && !gives_end {
                activity.end_time = None;
            } else if end < start && !gives_start {
                activity.start_time = None;
            }
        }
    }
}

/// One scheduled unit inside a day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// String or numeric identifier; `"LUNCH"` and `"TRAVEL"` are reserved.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub id: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Day number the activity belongs to, rewritten on cross-day moves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,

    /// Duration in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<Value>,

    /// Duration in hours, possibly fractional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Activity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Value::String(id.into()),
            ..Self::default()
        }
    }

    /// The id as a string, when it is one.
    pub fn id_str(&self) -> Option<&str> {
        self.id.as_str()
    }

    /// A printable form of the id for messages.
    pub fn id_label(&self) -> String {
        match &self.id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    pub fn role(&self) -> Role {
        Role::classify(self.id_str(), self.category.as_deref())
    }

    pub fn time_fields(&self) -> TimeFields {
        TimeFields {
            time_slot: self.time_slot.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        }
    }

    /// The explicit window: a well-formed `time_slot`, else a well-formed
    /// `start_time` and `end_time` pair.
    pub fn explicit_slot(&self) -> Option<TimeSlot> {
        if let Some(slot) = self.time_slot.as_deref().and_then(TimeSlot::parse) {
            return Some(slot);
        }
        let start = ClockTime::parse(self.start_time.as_deref()?)?;
        let end = ClockTime::parse(self.end_time.as_deref()?)?;
        Some(TimeSlot { start, end })
    }

    /// The explicit `start_time` alone, if well-formed.
    pub fn explicit_start_time(&self) -> Option<ClockTime> {
        self.start_time.as_deref().and_then(ClockTime::parse)
    }

    /// The existing start, from the explicit window or a bare `start_time`.
    pub fn start(&self) -> Option<ClockTime> {
        self.explicit_slot()
            .map(|slot| slot.start)
            .or_else(|| self.explicit_start_time())
    }

    /// Overwrites all three time fields with the canonical form of `slot`.
    pub fn schedule(&mut self, slot: TimeSlot) {
        self.start_time = Some(slot.start.to_string());
        self.end_time = Some(slot.end.to_string());
        self.time_slot = Some(slot.to_string());
    }

    /// Fills absent time fields from `slot` without touching present ones.
    ///
    /// A missing or malformed `time_slot` becomes the verbatim join of the
    /// existing start and end.
    pub fn fill_missing_times(&mut self, slot: TimeSlot) {
        if self.time_slot.as_deref().and_then(TimeSlot::parse).is_none() {
            self.time_slot = match (&self.start_time, &self.end_time) {
                (Some(start), Some(end)) => Some(format!("{start}-{end}")),
                _ => Some(slot.to_string()),
            };
        }
        if self.start_time.is_none() {
            self.start_time = Some(slot.start.to_string());
        }
        if self.end_time.is_none() {
            self.end_time = Some(slot.end.to_string());
        }
    }

    /// Drops the end of the window so the next pass recomputes it from the
    /// duration, keeping any start.
    pub fn clear_end(&mut self) {
        if self.start_time.is_none() {
            self.start_time = self
                .time_slot
                .as_deref()
                .and_then(TimeSlot::parse)
                .map(|slot| slot.start.to_string());
        }
        self.end_time = None;
        self.time_slot = None;
    }

    /// Makes `minutes` the only duration field.
    pub fn set_duration_minutes(&mut self, minutes: u32) {
        self.duration = Some(Value::from(minutes));
        self.duration_min = None;
        self.duration_hours = None;
    }
}

/// One trip day: its number and its activities in schedule order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub day: u32,

    #[serde(default)]
    pub places: Vec<Activity>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Day {
    pub fn new(day: u32, places: Vec<Activity>) -> Self {
        Self {
            day,
            places,
            extra: Map::new(),
        }
    }

    /// Copies the day with a replacement activity list.
    #[must_use]
    pub fn with_places(&self, places: Vec<Activity>) -> Self {
        Self {
            day: self.day,
            places,
            extra: self.extra.clone(),
        }
    }
}

/// A whole trip, one entry per day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Itinerary {
    pub days: Vec<Day>,
}

impl Itinerary {
    pub const fn new(days: Vec<Day>) -> Self {
        Self { days }
    }

    pub fn day(&self, day: u32) -> Option<&Day> {
        self.days.iter().find(|d| d.day == day)
    }

    /// Position of the day numbered `day` in `days`.
    pub fn position(&self, day: u32) -> Option<usize> {
        self.days.iter().position(|d| d.day == day)
    }
}
