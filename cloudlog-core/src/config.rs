// ============================================================================
// cloudlog-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Core Configuration Structure and Constants
//
// This module defines the configuration used to build a CloudLog facade from
// plain values: the local root directory plus the optional Dropbox and
// Telegram credentials.
//
// KEY COMPONENTS:
// - CoreConfig: Root path, tokens, chat id and request timeout
// - Default constants
//
// USAGE:
// Instances of CoreConfig are created by consumers of the library (like
// cloudlog-cli) and passed to CloudLog::from_config.
//
// AI-ASSISTANT-INFO: Configuration for the cloudlog-core library

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Default timeout applied to every Dropbox and Telegram request.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

// ============================================================================
// CORE CONFIGURATION
// ============================================================================

/// Main configuration structure for the cloudlog-core library.
///
/// A sink is only built when its token is present. The Telegram chat id is
/// required as soon as a Telegram token is given.
///
/// # Examples
///
/// ```rust,no_run
/// use cloudlog_core::CoreConfig;
///
/// let config = CoreConfig::new("/tmp/run-logs")
///     .with_dropbox_token("sl.dropbox-token")
///     .with_telegram("123456:telegram-token", 42);
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    // ---- Path Configuration ----

    /// Directory holding the log file and rendered plots
    pub root_path: PathBuf,

    // ---- Cloud Storage ----

    /// Dropbox access token; `None` disables uploads
    pub dropbox_token: Option<String>,

    // ---- Notification Settings ----

    /// Telegram Bot API token; `None` disables notifications
    pub telegram_token: Option<String>,

    /// Destination chat for Telegram messages
    pub telegram_chat_id: Option<i64>,

    // ---- Transport ----

    /// Timeout for each remote request
    pub request_timeout: Duration,
}

impl CoreConfig {
    /// Creates a configuration with no sinks enabled.
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            dropbox_token: None,
            telegram_token: None,
            telegram_chat_id: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub fn with_dropbox_token(mut self, token: impl Into<String>) -> Self {
        self.dropbox_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_telegram(mut self, token: impl Into<String>, chat_id: i64) -> Self {
        self.telegram_token = Some(token.into());
        self.telegram_chat_id = Some(chat_id);
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Checks the configuration for missing or malformed values.
    pub fn validate(&self) -> CoreResult<()> {
        if self.root_path.as_os_str().is_empty() {
            return Err(CoreError::Config("root path must not be empty".to_string()));
        }

        if matches!(self.dropbox_token.as_deref(), Some(t) if t.trim().is_empty()) {
            return Err(CoreError::Config("Dropbox token must not be empty".to_string()));
        }

        match self.telegram_token.as_deref() {
            Some(t) if t.trim().is_empty() => {
                return Err(CoreError::Config("Telegram token must not be empty".to_string()));
            }
            Some(_) if self.telegram_chat_id.is_none() => {
                return Err(CoreError::Config(
                    "Telegram chat id is required when a Telegram token is set".to_string(),
                ));
            }
            _ => {}
        }

        if self.request_timeout.is_zero() {
            return Err(CoreError::Config("request timeout must be non-zero".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_only_config_is_valid() {
        let config = CoreConfig::new("logs");
        assert!(config.validate().is_ok());
        assert_eq!(
            config.request_timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_empty_root_rejected() {
        let config = CoreConfig::new("");
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_telegram_token_requires_chat_id() {
        let mut config = CoreConfig::new("logs");
        config.telegram_token = Some("123:abc".to_string());
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));

        config.telegram_chat_id = Some(-100_123);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_chat_id_alone_is_allowed() {
        let mut config = CoreConfig::new("logs");
        config.telegram_chat_id = Some(7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_tokens_rejected() {
        let config = CoreConfig::new("logs").with_dropbox_token("  ");
        assert!(config.validate().is_err());

        let config = CoreConfig::new("logs").with_telegram("", 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = CoreConfig::new("logs").with_request_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
