//! CLI subcommand implementations.

pub mod edit;
pub mod rebuild;
pub mod recalc;
