//! Full recompute of a day's timeline.
//!
//! Used once on documents from the AI import and load paths to normalize
//! whatever time encodings they carry into `time_slot`, `start_time` and
//! `end_time`. Order is never changed.
//!
//! # Algorithm Summary
//!
//! 1. Seed a running clock from the first activity's `start_time`, else the
//!    configured day start.
//! 2. An activity with an explicit window keeps it verbatim; the clock moves
//!    to its end.
//! 3. Any other activity starts at the clock and runs for its resolved
//!    duration; the clock moves to the computed end.

use crate::clock::TimeSlot;
use crate::config::ScheduleConfig;
use crate::duration::resolve_minutes;
use crate::itinerary::{Activity, Day, Itinerary};

/// Recomputes every day of `itinerary`. Days are independent.
pub fn recalculate_itinerary(itinerary: &Itinerary, config: &ScheduleConfig) -> Itinerary {
    Itinerary::new(
        itinerary
            .days
            .iter()
            .map(|day| recalculate_day(day, config))
            .collect(),
    )
}

pub fn recalculate_day(day: &Day, config: &ScheduleConfig) -> Day {
    let places = recalculate_places(&day.places, config);
    tracing::debug!(day = day.day, activities = places.len(), "recalculated time slots");
    day.with_places(places)
}

/// Assigns times to `places` in list order, keeping explicit windows.
pub fn recalculate_places(places: &[Activity], config: &ScheduleConfig) -> Vec<Activity> {
    let mut clock = places
        .first()
        .and_then(Activity::explicit_start_time)
        .unwrap_or(config.day_start);

    places
        .iter()
        .map(|activity| {
            let mut activity = activity.clone();
            if let Some(slot) = activity.explicit_slot() {
                activity.fill_missing_times(slot);
                // An explicit window ending before the clock never pulls it back.
                clock = clock.max(slot.end);
            } else {
                let slot = TimeSlot::starting_at(clock, resolve_minutes(&activity, config));
                activity.schedule(slot);
                clock = slot.end;
            }
            activity
        })
        .collect()
}
