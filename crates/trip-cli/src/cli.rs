//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::edit::{AddArgs, DragArgs, RemoveArgs, SetDurationArgs};
use crate::commands::rebuild::RebuildArgs;
use crate::commands::recalc::RecalcArgs;

/// Itinerary time-allocation engine.
///
/// Reads an itinerary document, applies one scheduling operation and writes
/// the resulting document to stdout.
#[derive(Debug, Parser)]
#[command(name = "trip", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Itinerary JSON to read (defaults to stdin).
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Write single-line JSON.
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Recompute time slots for every day.
    Recalc(RecalcArgs),

    /// Rebuild one day, pushing overlaps forward and dropping transit placeholders.
    Rebuild(RebuildArgs),

    /// Apply a drag-and-drop move within or between days.
    Drag(DragArgs),

    /// Change an activity's duration and rebuild its day.
    SetDuration(SetDurationArgs),

    /// Insert an activity and rebuild its day.
    Add(AddArgs),

    /// Remove an activity and rebuild its day.
    Remove(RemoveArgs),
}
