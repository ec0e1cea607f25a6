//! Core library for mirroring console logs to a local file, Dropbox and Telegram.
//!
//! [`CloudLog`] prints each message and appends it to a timestamped log file.
//! With a Dropbox token it uploads that file and rendered plots to the app
//! folder; with a Telegram token it can push messages, plots and the log
//! itself to a chat. Remote failures never interrupt the caller: they show up
//! as an extra line in the log.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use cloudlog_core::{CloudLog, CoreConfig};
//! use std::path::Path;
//!
//! let config = CoreConfig::new("/tmp/training")
//!     .with_dropbox_token("sl.dropbox-token")
//!     .with_telegram("123456:bot-token", 42);
//! let log = CloudLog::from_config(&config).unwrap();
//!
//! log.log("epoch 1: loss 0.42").unwrap();
//! log.publish_plot(&|path: &Path| -> cloudlog_core::CoreResult<()> {
//!     std::fs::write(path, b"...")?;
//!     Ok(())
//! }, true, Some("loss")).unwrap();
//! log.sync(true, Some("*epoch 1 done*")).unwrap();
//! ```

pub mod cloud;
pub mod config;
pub mod error;
pub mod facade;
#[cfg(feature = "test-mocks")]
pub mod mocks;
pub mod notifications;
pub mod plot;
pub mod utils;

// Re-exports for public API
pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use facade::{ChatTarget, CloudLog, UploadKind};
pub use notifications::ParseMode;
pub use plot::{ImageFileRenderer, PlotRenderer};
