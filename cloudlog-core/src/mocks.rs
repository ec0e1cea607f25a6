// ============================================================================
// cloudlog-core/src/mocks.rs
// ============================================================================
//
// MOCK SINKS: Recording Test Doubles for Cloud and Chat Sinks
//
// These implementations record every call in a shared, ordered call log and
// can be told to fail, so tests can check which remote steps ran and in what
// order without network access.
//
// AI-ASSISTANT-INFO: Mock sinks for testing the facade
//
// Only compiled with the "test-mocks" feature.

// ---- Internal crate imports ----
use crate::cloud::{CloudSink, WriteMode};
use crate::error::{CoreError, CoreResult};
use crate::notifications::{Attachment, NotificationSink, ParseMode};

// ---- Standard library imports ----
use std::sync::{Arc, Mutex};

/// Ordered record of calls shared between mocks.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A captured upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedUpload {
    pub remote_path: String,
    pub mode: WriteMode,
    pub contents: Vec<u8>,
}

/// Mock implementation of CloudSink.
#[derive(Debug, Clone, Default)]
pub struct MockCloudSink {
    call_log: CallLog,
    uploads: Arc<Mutex<Vec<RecordedUpload>>>,
    failure: Option<String>,
}

impl MockCloudSink {
    pub fn new(call_log: CallLog) -> Self {
        Self {
            call_log,
            ..Default::default()
        }
    }

    /// A sink whose every upload fails with `message`.
    pub fn failing(call_log: CallLog, message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new(call_log)
        }
    }

    pub fn get_uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().unwrap().clone()
    }
}

impl CloudSink for MockCloudSink {
    fn upload(&self, contents: Vec<u8>, remote_path: &str, mode: WriteMode) -> CoreResult<()> {
        self.call_log.record(format!("upload {remote_path}"));
        if let Some(message) = &self.failure {
            return Err(CoreError::CloudError(message.clone()));
        }
        self.uploads.lock().unwrap().push(RecordedUpload {
            remote_path: remote_path.to_string(),
            mode,
            contents,
        });
        Ok(())
    }
}

/// A captured notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentNotification {
    Text {
        chat_id: i64,
        text: String,
        mode: ParseMode,
    },
    Photo {
        chat_id: i64,
        photo: Attachment,
        caption: Option<String>,
        silent: bool,
    },
    Document {
        chat_id: i64,
        document: Attachment,
        silent: bool,
    },
}

/// Mock implementation of NotificationSink.
#[derive(Debug, Clone, Default)]
pub struct MockNotificationSink {
    call_log: CallLog,
    sent: Arc<Mutex<Vec<SentNotification>>>,
    failure: Option<String>,
}

impl MockNotificationSink {
    pub fn new(call_log: CallLog) -> Self {
        Self {
            call_log,
            ..Default::default()
        }
    }

    /// A sink whose every send fails with `message`.
    pub fn failing(call_log: CallLog, message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new(call_log)
        }
    }

    pub fn get_sent_notifications(&self) -> Vec<SentNotification> {
        self.sent.lock().unwrap().clone()
    }

    fn finish(&self, notification: SentNotification) -> CoreResult<()> {
        if let Some(message) = &self.failure {
            return Err(CoreError::NotificationError(message.clone()));
        }
        self.sent.lock().unwrap().push(notification);
        Ok(())
    }
}

impl NotificationSink for MockNotificationSink {
    fn send_text(&self, chat_id: i64, text: &str, mode: ParseMode) -> CoreResult<()> {
        self.call_log.record("send_text");
        self.finish(SentNotification::Text {
            chat_id,
            text: text.to_string(),
            mode,
        })
    }

    fn send_photo(
        &self,
        chat_id: i64,
        photo: Attachment,
        caption: Option<&str>,
        silent: bool,
    ) -> CoreResult<()> {
        self.call_log.record(format!("send_photo {}", photo.file_name));
        self.finish(SentNotification::Photo {
            chat_id,
            photo,
            caption: caption.map(str::to_string),
            silent,
        })
    }

    fn send_document(&self, chat_id: i64, document: Attachment, silent: bool) -> CoreResult<()> {
        self.call_log.record(format!("send_document {}", document.file_name));
        self.finish(SentNotification::Document {
            chat_id,
            document,
            silent,
        })
    }
}
