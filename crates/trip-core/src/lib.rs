//! Itinerary time-allocation engine for the trip planner.
//!
//! This crate turns loosely-typed daily activity lists into consistent,
//! non-overlapping timelines and keeps them coherent under edits:
//! - Duration: resolving an activity's length from whichever field it carries
//! - Recalculate: full recompute of a day's time slots
//! - Reorder: drag-and-drop moves within a day
//! - Rebuild: retiming after add, remove or duration changes
//! - Cross-day moves and the edit router that ties them together
//!
//! Every operation is pure and returns new data; nothing here does I/O.

mod clock;
mod config;
pub mod cross_day;
pub mod duration;
mod edit;
pub mod itinerary;
pub mod rebuild;
pub mod recalculate;
pub mod reorder;

pub use clock::{ClockParseError, ClockTime, TimeSlot};
pub use config::ScheduleConfig;
pub use cross_day::{DropLocation, move_between_days, parse_day_number};
pub use duration::{DurationSource, duration_source, resolve_minutes};
pub use edit::{DragEvent, Edit, EditError, apply_edit};
pub use itinerary::{Activity, Day, Itinerary, LUNCH_ID, Role, TRAVEL_ID, TimeFields};
pub use rebuild::{rebuild_day, rebuild_places};
pub use recalculate::{recalculate_day, recalculate_itinerary, recalculate_places};
pub use reorder::{reorder, reorder_day};
