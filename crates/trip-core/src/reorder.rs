//! Drag-and-drop reordering within one day.
//!
//! Times belong to the two endpoint slots of a move: the moved activity takes
//! the window that was at the destination and whatever lands on the source
//! position takes the moved activity's old window. Activities between the two
//! positions shift by one but keep their own times until the next rebuild.

use crate::itinerary::{Activity, Day};

/// Moves the activity at `source` to `destination` and swaps the endpoint times.
///
/// Callers reject anchors as sources. Out-of-range indices leave the list unchanged.
pub fn reorder(places: &[Activity], source: usize, destination: usize) -> Vec<Activity> {
    if source >= places.len() || destination >= places.len() {
        tracing::warn!(
            source,
            destination,
            len = places.len(),
            "reorder index out of range, leaving day unchanged"
        );
        return places.to_vec();
    }

    let source_times = places[source].time_fields();
    let destination_times = places[destination].time_fields();

    let mut moved = places.to_vec();
    let activity = moved.remove(source);
    moved.insert(destination, activity);

    // An endpoint hands over only the fields it had.
    destination_times.hand_to(&mut moved[destination]);
    source_times.hand_to(&mut moved[source]);
    moved
}

pub fn reorder_day(day: &Day, source: usize, destination: usize) -> Day {
    day.with_places(reorder(&day.places, source, destination))
}
