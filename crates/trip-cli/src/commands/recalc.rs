//! Full time-slot recompute for a whole itinerary.
//!
//! Run once on freshly loaded or AI-imported documents to normalize their
//! mixed time encodings into `time_slot`, `start_time` and `end_time`.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use trip_core::{ClockTime, recalculate_itinerary};

use crate::{Config, Document};

#[derive(Debug, Args)]
pub struct RecalcArgs {
    /// Day start (HH:MM) for days whose first activity has no start time.
    #[arg(long)]
    pub day_start: Option<ClockTime>,
}

pub fn run<W: Write>(
    writer: &mut W,
    document: &Document,
    args: &RecalcArgs,
    config: &Config,
) -> Result<()> {
    let mut schedule = config.schedule.clone();
    if let Some(day_start) = args.day_start {
        schedule.day_start = day_start;
    }

    let itinerary = recalculate_itinerary(document.itinerary(), &schedule);
    tracing::debug!(days = itinerary.days.len(), "recalculated itinerary");

    document.with_itinerary(itinerary).write(writer, config.pretty)
}
