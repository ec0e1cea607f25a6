// ============================================================================
// cloudlog-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Core Error Types
//
// This module defines the error type shared by the facade, the sinks and the
// configuration layer.
//
// KEY COMPONENTS:
// - CoreError: All failures surfaced by cloudlog-core
// - CoreResult: Result alias used throughout the crate
//
// Local failures (Io, PlotRender) propagate to the caller.
// Remote failures (CloudError, NotificationError, Http) are returned by the
// sinks and absorbed by the facade, which logs them.
//
// AI-ASSISTANT-INFO: Error types for cloudlog-core

use thiserror::Error;

/// Custom error types for cloudlog
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Plot rendering failed: {0}")]
    PlotRender(String),

    #[error("Cloud storage error: {0}")]
    CloudError(String),

    #[error("Notification error: {0}")]
    NotificationError(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for cloudlog operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
