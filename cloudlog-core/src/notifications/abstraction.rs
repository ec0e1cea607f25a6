// ============================================================================
// cloudlog-core/src/notifications/abstraction.rs
// ============================================================================
//
// NOTIFICATION ABSTRACTION: Chat Notification Interfaces
//
// This module defines what the facade needs from a chat backend: sending a
// formatted text message, a photo and a document to a chat.
//
// KEY COMPONENTS:
// - ParseMode: Text formatting mode for messages
// - Attachment: In-memory file handed to photo/document sends
// - NotificationSink: Trait implemented by chat backends
//
// AI-ASSISTANT-INFO: Notification system abstractions

// ---- Internal crate imports ----
use crate::error::CoreResult;

// ---- Standard library imports ----
use std::fmt;

// ============================================================================
// PARSE MODE
// ============================================================================

/// Formatting applied by the chat service to message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Legacy Markdown
    #[default]
    Markdown,
    /// Markdown with the stricter escaping rules
    MarkdownV2,
    /// A subset of HTML tags
    Html,
}

impl ParseMode {
    /// Returns the wire name of the mode.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseMode::Markdown => "Markdown",
            ParseMode::MarkdownV2 => "MarkdownV2",
            ParseMode::Html => "HTML",
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ATTACHMENT
// ============================================================================

/// A file read into memory for upload as a photo or document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Filename shown to the recipient
    pub file_name: String,
    /// MIME type of the contents
    pub mime_type: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// A PNG image attachment.
    pub fn png(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(file_name, "image/png", bytes)
    }

    /// A plain text attachment.
    pub fn text(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(file_name, "text/plain", bytes)
    }
}

// ============================================================================
// NOTIFICATION SINK
// ============================================================================

/// Trait for sending notifications to a chat.
///
/// Every call blocks until the remote service has answered.
pub trait NotificationSink: Send + Sync {
    /// Sends a text message. Text messages alert the recipient.
    fn send_text(&self, chat_id: i64, text: &str, mode: ParseMode) -> CoreResult<()>;

    /// Sends an image with an optional caption.
    fn send_photo(
        &self,
        chat_id: i64,
        photo: Attachment,
        caption: Option<&str>,
        silent: bool,
    ) -> CoreResult<()>;

    /// Sends a generic file.
    fn send_document(&self, chat_id: i64, document: Attachment, silent: bool) -> CoreResult<()>;
}
