//! Routing of user edits to the engine.
//!
//! This is the caller side of the engine: it validates anchor rules, picks the
//! reorder, cross-day move or rebuild pass an edit needs, and returns a new
//! itinerary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ScheduleConfig;
use crate::cross_day::{DropLocation, move_between_days};
use crate::itinerary::{Activity, Itinerary};
use crate::rebuild::rebuild_places;
use crate::reorder::reorder;

/// A finished drag gesture. `destination` is absent when dropped outside any list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEvent {
    pub source: DropLocation,
    #[serde(default)]
    pub destination: Option<DropLocation>,
}

/// A user edit to an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    Drag(DragEvent),
    SetDuration {
        day: u32,
        index: usize,
        minutes: u32,
    },
    /// Inserts at `index`, or appends when `index` is `None`.
    Add {
        day: u32,
        index: Option<usize>,
        activity: Activity,
    },
    Remove {
        day: u32,
        index: usize,
    },
}

/// Reasons an edit is refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("day {day} not found in itinerary")]
    DayNotFound { day: u32 },

    #[error("no day number in droppable id {droppable_id:?}")]
    UnknownDroppable { droppable_id: String },

    #[error("index {index} out of range for day {day} with {len} activities")]
    IndexOutOfRange { day: u32, index: usize, len: usize },

    #[error("{id} is an anchor activity and cannot be moved")]
    AnchorNotMovable { id: String },

    #[error("{id} is an anchor activity and cannot be removed")]
    AnchorNotDeletable { id: String },
}

/// Applies `edit` to a copy of `itinerary`.
pub fn apply_edit(
    itinerary: &Itinerary,
    edit: &Edit,
    config: &ScheduleConfig,
) -> Result<Itinerary, EditError> {
    match edit {
        Edit::Drag(event) => apply_drag(itinerary, event, config),
        Edit::SetDuration {
            day,
            index,
            minutes,
        } => edit_day(itinerary, *day, config, |places| {
            let len = places.len();
            let activity = places.get_mut(*index).ok_or(EditError::IndexOutOfRange {
                day: *day,
                index: *index,
                len,
            })?;
            activity.set_duration_minutes(config.round_minutes(*minutes));
            activity.clear_end();
            Ok(())
        }),
        Edit::Add {
            day,
            index,
            activity,
        } => edit_day(itinerary, *day, config, |places| {
            let index = index.unwrap_or(places.len());
            if index > places.len() {
                return Err(EditError::IndexOutOfRange {
                    day: *day,
                    index,
                    len: places.len(),
                });
            }
            let mut activity = activity.clone();
            activity.day = Some(*day);
            places.insert(index, activity);
            Ok(())
        }),
        Edit::Remove { day, index } => edit_day(itinerary, *day, config, |places| {
            let activity = checked(places, *day, *index)?;
            if activity.role().is_anchor() {
                return Err(EditError::AnchorNotDeletable {
                    id: activity.id_label(),
                });
            }
            places.remove(*index);
            Ok(())
        }),
    }
}

fn apply_drag(
    itinerary: &Itinerary,
    event: &DragEvent,
    config: &ScheduleConfig,
) -> Result<Itinerary, EditError> {
    let Some(destination) = &event.destination else {
        return Ok(itinerary.clone());
    };
    let source = &event.source;

    let source_day = droppable_day(source)?;
    let source_pos = day_position(itinerary, source_day)?;
    let moved = checked(&itinerary.days[source_pos].places, source_day, source.index)?;
    if moved.role().is_anchor() {
        return Err(EditError::AnchorNotMovable {
            id: moved.id_label(),
        });
    }

    let mut result = itinerary.clone();

    if source.droppable_id == destination.droppable_id {
        let places = &itinerary.days[source_pos].places;
        checked(places, source_day, destination.index)?;
        result.days[source_pos].places = reorder(places, source.index, destination.index);
        return Ok(result);
    }

    let destination_day = droppable_day(destination)?;
    let destination_pos = day_position(itinerary, destination_day)?;

    let mut lists = move_between_days(
        &itinerary.days[source_pos].places,
        &itinerary.days[destination_pos].places,
        source,
        destination,
    );
    for (pos, droppable_id) in [
        (source_pos, &source.droppable_id),
        (destination_pos, &destination.droppable_id),
    ] {
        let places = lists.remove(droppable_id).unwrap_or_default();
        result.days[pos].places = rebuild_places(&places, None, config);
    }
    Ok(result)
}

/// Runs `change` on a copy of one day's list, then rebuilds that day.
fn edit_day<F>(
    itinerary: &Itinerary,
    day: u32,
    config: &ScheduleConfig,
    change: F,
) -> Result<Itinerary, EditError>
where
    F: FnOnce(&mut Vec<Activity>) -> Result<(), EditError>,
{
    let pos = day_position(itinerary, day)?;
    let mut places = itinerary.days[pos].places.clone();
    change(&mut places)?;

    let mut result = itinerary.clone();
    result.days[pos].places = rebuild_places(&places, None, config);
    Ok(result)
}

fn droppable_day(location: &DropLocation) -> Result<u32, EditError> {
    location
        .day_number()
        .ok_or_else(|| EditError::UnknownDroppable {
            droppable_id: location.droppable_id.clone(),
        })
}

fn day_position(itinerary: &Itinerary, day: u32) -> Result<usize, EditError> {
    itinerary
        .position(day)
        .ok_or(EditError::DayNotFound { day })
}

fn checked(places: &[Activity], day: u32, index: usize) -> Result<&Activity, EditError> {
    places.get(index).ok_or(EditError::IndexOutOfRange {
        day,
        index,
        len: places.len(),
    })
}
