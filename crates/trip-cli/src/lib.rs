//! Trip planner CLI library.
//!
//! This crate provides the CLI interface for the itinerary engine.

mod cli;
pub mod commands;
mod config;
mod document;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use document::Document;
