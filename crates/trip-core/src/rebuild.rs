//! Day rebuild after a structural edit (add, remove, duration change).
//!
//! Unlike a full recompute, a rebuild respects the times already on the day:
//! an activity only moves when it would overlap the one before it, and then it
//! is pushed to start exactly when that one ends. Travel placeholders are
//! dropped since transit gaps are regenerated elsewhere.

use crate::clock::{ClockTime, TimeSlot};
use crate::config::ScheduleConfig;
use crate::duration::resolve_minutes;
use crate::itinerary::{Activity, Day, Role};

/// Rebuilds a day's list in its existing order.
///
/// `default_start` seeds an untimed first activity; without it the configured
/// day start is used. Every surviving activity gets a rounded `duration`.
pub fn rebuild_places(
    places: &[Activity],
    default_start: Option<ClockTime>,
    config: &ScheduleConfig,
) -> Vec<Activity> {
    let mut rebuilt = Vec::with_capacity(places.len());
    let mut previous_end: Option<ClockTime> = None;
    let mut pushed = 0_usize;

    for activity in places {
        let role = activity.role();
        if role == Role::Travel {
            continue;
        }

        let mut activity = activity.clone();
        let minutes = config.round_minutes(match role {
            Role::Lunch => config.lunch_minutes,
            _ => resolve_minutes(&activity, config),
        });

        let end = match activity.start() {
            Some(start) if previous_end.is_none_or(|end| start >= end) => {
                // Lunch always spans its fixed length; empty or inverted
                // windows are rebuilt from the rounded duration.
                let kept = activity
                    .explicit_slot()
                    .filter(|slot| role != Role::Lunch && slot.end > start);
                if let Some(slot) = kept {
                    activity.fill_missing_times(slot);
                    slot.end
                } else {
                    let slot = TimeSlot::starting_at(start, minutes);
                    activity.schedule(slot);
                    slot.end
                }
            }
            existing => {
                if existing.is_some() {
                    pushed += 1;
                }
                let start = previous_end
                    .or(default_start)
                    .unwrap_or(config.day_start);
                let slot = TimeSlot::starting_at(start, minutes);
                activity.schedule(slot);
                slot.end
            }
        };

        activity.set_duration_minutes(minutes);
        previous_end = Some(end);
        rebuilt.push(activity);
    }

    tracing::debug!(
        activities = rebuilt.len(),
        dropped = places.len() - rebuilt.len(),
        pushed,
        "rebuilt day"
    );
    rebuilt
}

pub fn rebuild_day(day: &Day, default_start: Option<ClockTime>, config: &ScheduleConfig) -> Day {
    day.with_places(rebuild_places(&day.places, default_start, config))
}
