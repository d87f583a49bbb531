//! User edits: drag moves, duration changes, insertions and removals.
//!
//! Each command turns its arguments into an [`Edit`] and lets the engine
//! route it to the right reorder, move or rebuild pass.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use trip_core::{Activity, DragEvent, DropLocation, Edit, apply_edit};

use crate::{Config, Document};

#[derive(Debug, Args)]
pub struct DragArgs {
    /// Droppable id the activity was dragged from (e.g. day-1).
    #[arg(long)]
    pub from: String,

    /// Index in the source list.
    #[arg(long)]
    pub from_index: usize,

    /// Droppable id the activity was dropped on (e.g. day-2).
    #[arg(long)]
    pub to: String,

    /// Index in the destination list.
    #[arg(long)]
    pub to_index: usize,
}

#[derive(Debug, Args)]
pub struct SetDurationArgs {
    #[arg(long)]
    pub day: u32,

    #[arg(long)]
    pub index: usize,

    /// New duration in minutes.
    #[arg(long)]
    pub minutes: u32,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub day: u32,

    /// Insert position; appends when omitted.
    #[arg(long)]
    pub index: Option<usize>,

    /// Activity as a JSON object.
    #[arg(long)]
    pub activity: String,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    #[arg(long)]
    pub day: u32,

    #[arg(long)]
    pub index: usize,
}

pub fn drag<W: Write>(
    writer: &mut W,
    document: &Document,
    args: &DragArgs,
    config: &Config,
) -> Result<()> {
    let edit = Edit::Drag(DragEvent {
        source: DropLocation::new(&args.from, args.from_index),
        destination: Some(DropLocation::new(&args.to, args.to_index)),
    });
    apply(writer, document, &edit, config)
}

pub fn set_duration<W: Write>(
    writer: &mut W,
    document: &Document,
    args: &SetDurationArgs,
    config: &Config,
) -> Result<()> {
    let edit = Edit::SetDuration {
        day: args.day,
        index: args.index,
        minutes: args.minutes,
    };
    apply(writer, document, &edit, config)
}

pub fn add<W: Write>(
    writer: &mut W,
    document: &Document,
    args: &AddArgs,
    config: &Config,
) -> Result<()> {
    let activity: Activity =
        serde_json::from_str(&args.activity).context("invalid activity JSON")?;
    let edit = Edit::Add {
        day: args.day,
        index: args.index,
        activity,
    };
    apply(writer, document, &edit, config)
}

pub fn remove<W: Write>(
    writer: &mut W,
    document: &Document,
    args: &RemoveArgs,
    config: &Config,
) -> Result<()> {
    let edit = Edit::Remove {
        day: args.day,
        index: args.index,
    };
    apply(writer, document, &edit, config)
}

fn apply<W: Write>(writer: &mut W, document: &Document, edit: &Edit, config: &Config) -> Result<()> {
    tracing::debug!(?edit, "applying edit");
    let itinerary = apply_edit(document.itinerary(), edit, &config.schedule)?;
    document.with_itinerary(itinerary).write(writer, config.pretty)
}
