//! Rebuild of a single day after a structural edit made elsewhere.

use std::io::Write;

use anyhow::{Result, bail};
use clap::Args;
use trip_core::{ClockTime, rebuild_day};

use crate::{Config, Document};

#[derive(Debug, Args)]
pub struct RebuildArgs {
    /// Day number to rebuild.
    #[arg(long)]
    pub day: u32,

    /// Start (HH:MM) for the first activity when it has no time.
    #[arg(long)]
    pub day_start: Option<ClockTime>,
}

pub fn run<W: Write>(
    writer: &mut W,
    document: &Document,
    args: &RebuildArgs,
    config: &Config,
) -> Result<()> {
    let mut itinerary = document.itinerary().clone();
    let Some(pos) = itinerary.position(args.day) else {
        bail!("day {} not found in itinerary", args.day);
    };

    itinerary.days[pos] = rebuild_day(&itinerary.days[pos], args.day_start, &config.schedule);

    document.with_itinerary(itinerary).write(writer, config.pretty)
}
