// cloudlog-cli/src/lib.rs
//
// Library portion of the cloudlog CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, PlotArgs, TeeArgs};
pub use commands::plot::run_plot;
pub use commands::tee::run_tee;
pub use config::build_core_config;
