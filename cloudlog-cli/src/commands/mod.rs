//! Subcommand implementations.

pub mod plot;
pub mod tee;
