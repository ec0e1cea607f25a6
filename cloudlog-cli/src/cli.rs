// cloudlog-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "cloudlog: mirror console output to a file, Dropbox and Telegram",
    long_about = "Tees output into a timestamped log file and optionally syncs it to Dropbox and a Telegram chat via cloudlog-core."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory for the log file and plots
    #[arg(short, long, global = true, value_name = "DIR", env = "CLOUDLOG_ROOT", default_value = "logs")]
    pub root: PathBuf,

    // --- Cloud Storage ---
    /// Optional: Dropbox access token; enables uploads to the app folder
    #[arg(long, global = true, value_name = "TOKEN", env = "CLOUDLOG_DROPBOX_TOKEN", hide_env_values = true)]
    pub dropbox_token: Option<String>,

    // --- Notifications ---
    /// Optional: Telegram bot token; enables chat notifications
    #[arg(long, global = true, value_name = "TOKEN", env = "CLOUDLOG_TELEGRAM_TOKEN", hide_env_values = true)]
    pub telegram_token: Option<String>,

    /// Telegram chat id to notify (required with --telegram-token)
    #[arg(long, global = true, value_name = "ID", env = "CLOUDLOG_TELEGRAM_CHAT_ID", allow_hyphen_values = true)]
    pub chat_id: Option<i64>,

    /// Timeout in seconds for each Dropbox or Telegram request
    #[arg(long, global = true, value_name = "SECONDS", default_value_t = cloudlog_core::config::DEFAULT_REQUEST_TIMEOUT_SECS,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reads stdin line by line, echoing and logging each line
    Tee(TeeArgs),
    /// Publishes an existing PNG image as a plot
    Plot(PlotArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct TeeArgs {
    /// Sync the log to Dropbox every N lines (0 syncs only at the end)
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub sync_every: usize,

    /// Send the final message and the log file to Telegram at the end
    #[arg(long)]
    pub notify: bool,

    /// Optional: Message sent before the log file when --notify is set
    #[arg(short, long, value_name = "TEXT")]
    pub message: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct PlotArgs {
    /// PNG image to publish
    #[arg(required = true, value_name = "IMAGE")]
    pub image: PathBuf,

    /// Also send the image to Telegram
    #[arg(long)]
    pub notify: bool,

    /// Optional: Caption for the Telegram photo
    #[arg(short, long, value_name = "TEXT")]
    pub caption: Option<String>,
}
