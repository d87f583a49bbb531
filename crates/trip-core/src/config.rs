//! Scheduling policy passed to every engine entry point.

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::itinerary::Role;

/// Configuration for itinerary time allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Where a day's clock starts when nothing else seeds it.
    /// Default: 08:00.
    pub day_start: ClockTime,

    /// Lunch anchor length in minutes, forced when rebuilding a day.
    /// Default: 60.
    pub lunch_minutes: u32,

    /// Transit buffer in minutes for travel anchors without their own duration.
    /// Default: 45.
    pub travel_minutes: u32,

    /// Length of any other activity without a duration.
    /// Default: 90.
    pub default_minutes: u32,

    /// Rebuilt durations are rounded to this many minutes, and never go below it.
    /// Default: 5.
    pub rounding_step: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            day_start: ClockTime::hm(8, 0),
            lunch_minutes: 60,
            travel_minutes: 45,
            default_minutes: 90,
            rounding_step: 5,
        }
    }
}

impl ScheduleConfig {
    /// Fallback duration for an activity with no usable duration or window.
    pub const fn default_minutes_for(&self, role: Role) -> u32 {
        match role {
            Role::Lunch => self.lunch_minutes,
            Role::Travel => self.travel_minutes,
            Role::Regular => self.default_minutes,
        }
    }

    /// Rounds to the nearest step (halves round up) with a floor of one step.
    pub const fn round_minutes(&self, minutes: u32) -> u32 {
        let step = if self.rounding_step == 0 {
            1
        } else {
            self.rounding_step
        };
        let rounded = minutes.saturating_add(step / 2) / step * step;
        if rounded < step { step } else { rounded }
    }
}
