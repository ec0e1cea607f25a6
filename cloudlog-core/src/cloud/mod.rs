//! Cloud storage sinks.
//!
//! The facade only needs one remote operation: put a blob of bytes at a path
//! in a flat, app-scoped namespace. [`CloudSink`] is that seam, and
//! [`DropboxSink`] implements it against the Dropbox HTTP API.
mod dropbox;

pub use dropbox::DropboxSink;

use crate::error::CoreResult;
use serde::Serialize;

/// What happens when an upload targets a path that already exists.
///
/// Only replacement is supported; the facade always overwrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Replace the existing object entirely.
    Overwrite,
}

/// Trait for uploading files to remote storage.
pub trait CloudSink: Send + Sync {
    /// Uploads `contents` to `remote_path`, blocking until the remote call finishes.
    fn upload(&self, contents: Vec<u8>, remote_path: &str, mode: WriteMode) -> CoreResult<()>;
}
