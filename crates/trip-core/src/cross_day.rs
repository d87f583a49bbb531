//! Moving an activity from one day to another.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::itinerary::Activity;

/// Trailing `-<N>` of a droppable id, whatever precedes it.
static DAY_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-(\d+)$").unwrap());

/// A position reported by the drag-and-drop layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropLocation {
    /// Drop target id, `day-<N>` or any variant ending in `-<N>`.
    pub droppable_id: String,
    pub index: usize,
}

impl DropLocation {
    pub fn new(droppable_id: impl Into<String>, index: usize) -> Self {
        Self {
            droppable_id: droppable_id.into(),
            index,
        }
    }

    pub fn day_number(&self) -> Option<u32> {
        parse_day_number(&self.droppable_id)
    }
}

/// Extracts the day number from a droppable id such as `day-3` or `board-day-3`.
pub fn parse_day_number(droppable_id: &str) -> Option<u32> {
    DAY_SUFFIX_RE.captures(droppable_id)?[1].parse().ok()
}

/// Moves the activity at `source.index` into the destination list at
/// `destination.index` and stamps it with the destination's day number.
///
/// Returns both updated lists keyed by droppable id. Neither list is retimed
/// and the source list simply gets shorter. A destination index past the end
/// appends. An out-of-range source index leaves both lists unchanged.
pub fn move_between_days(
    source_places: &[Activity],
    destination_places: &[Activity],
    source: &DropLocation,
    destination: &DropLocation,
) -> HashMap<String, Vec<Activity>> {
    let mut from = source_places.to_vec();

    if source.index >= from.len() {
        tracing::warn!(
            droppable_id = %source.droppable_id,
            index = source.index,
            len = from.len(),
            "move source index out of range, leaving days unchanged"
        );
        return HashMap::from([
            (source.droppable_id.clone(), from),
            (destination.droppable_id.clone(), destination_places.to_vec()),
        ]);
    }

    let mut activity = from.remove(source.index);
    match destination.day_number() {
        Some(day) => activity.day = Some(day),
        None => tracing::warn!(
            droppable_id = %destination.droppable_id,
            "no day number in droppable id, keeping activity's day"
        ),
    }

    // Same target on both sides: a plain move within the source list.
    if source.droppable_id == destination.droppable_id {
        let index = destination.index.min(from.len());
        from.insert(index, activity);
        return HashMap::from([(source.droppable_id.clone(), from)]);
    }

    let mut to = destination_places.to_vec();
    let index = destination.index.min(to.len());
    to.insert(index, activity);

    tracing::debug!(
        from = %source.droppable_id,
        to = %destination.droppable_id,
        index,
        "moved activity between days"
    );

    HashMap::from([
        (source.droppable_id.clone(), from),
        (destination.droppable_id.clone(), to),
    ])
}
