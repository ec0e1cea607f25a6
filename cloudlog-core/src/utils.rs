//! Timestamp and filename helpers.
//!
//! Log and plot files are named after the local time they were created at,
//! with one-second resolution.

use chrono::{DateTime, Local, TimeZone};
use std::path::Path;

/// strftime pattern shared by log and plot filenames.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Formats a point in time as `YYYY-MM-DD_HH-MM-SS`.
#[must_use]
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Log filename for a run started at `at` (e.g. "2024-06-01_12-30-45_log.txt").
#[must_use]
pub fn log_file_name_at<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}_log.txt", format_timestamp(at))
}

/// Plot filename for an image rendered at `at` (e.g. "2024-06-01_12-30-45.png").
#[must_use]
pub fn plot_file_name_at<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}.png", format_timestamp(at))
}

/// Plot filename for the current local time.
#[must_use]
pub fn plot_file_name_now() -> String {
    plot_file_name_at(&Local::now())
}

/// Remote path for a file stored at the root of the app folder.
///
/// Only the final path component is kept, so "plots/a.png" maps to "/a.png".
#[must_use]
pub fn remote_path_for(filename: &str) -> String {
    let base = Path::new(filename)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string());
    format!("/{base}")
}
