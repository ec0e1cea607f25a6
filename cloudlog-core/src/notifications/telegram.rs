// ============================================================================
// cloudlog-core/src/notifications/telegram.rs
// ============================================================================
//
// TELEGRAM IMPLEMENTATION: Notifications Through the Telegram Bot API
//
// This module sends messages, photos and documents to a Telegram chat using
// the Bot API (`https://api.telegram.org/bot<token>/<method>`). Requests are
// blocking; each call returns once Telegram has answered.
//
// KEY COMPONENTS:
// - TelegramSink: Holds the bot token and HTTP client
// - ApiResponse: Envelope returned by every Bot API method
//
// AI-ASSISTANT-INFO: Telegram implementation of NotificationSink

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};
use crate::notifications::{Attachment, NotificationSink, ParseMode};

// ---- External crate imports ----
use log::debug;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};

// ---- Standard library imports ----
use std::time::Duration;

/// Production Bot API endpoint.
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

// ============================================================================
// WIRE TYPES
// ============================================================================

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: i64,
    text: &'a str,
    parse_mode: &'static str,
}

/// Envelope shared by all Bot API responses. `result` is not needed.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    error_code: Option<i64>,
    #[serde(default)]
    description: Option<String>,
}

// ============================================================================
// TELEGRAM SINK
// ============================================================================

/// Sends notifications through a Telegram bot.
///
/// # Examples
///
/// ```rust,no_run
/// use cloudlog_core::notifications::{NotificationSink, ParseMode, TelegramSink};
/// use std::time::Duration;
///
/// let sink = TelegramSink::new("123456:bot-token", Duration::from_secs(30)).unwrap();
/// sink.send_text(42, "*Training finished*", ParseMode::Markdown).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct TelegramSink {
    token: String,
    base_url: String,
    client: Client,
}

impl TelegramSink {
    /// Creates a sink talking to the production Bot API.
    pub fn new(token: &str, timeout: Duration) -> CoreResult<Self> {
        Self::with_base_url(token, TELEGRAM_API_URL, timeout)
    }

    /// Creates a sink against a custom endpoint (e.g. a local Bot API server).
    pub fn with_base_url(token: &str, base_url: &str, timeout: Duration) -> CoreResult<Self> {
        if token.trim().is_empty() {
            return Err(CoreError::Config("Telegram token must not be empty".to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            token: token.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    fn file_part(attachment: Attachment) -> CoreResult<Part> {
        Ok(Part::bytes(attachment.bytes)
            .file_name(attachment.file_name)
            .mime_str(&attachment.mime_type)?)
    }

    /// Sends the request and checks the Bot API envelope.
    fn dispatch(&self, method: &str, request: RequestBuilder) -> CoreResult<()> {
        // The request URL embeds the bot token; keep it out of error text.
        let response = request.send().map_err(|e| CoreError::Http(e.without_url()))?;
        let status = response.status();
        let body = response.text().map_err(|e| CoreError::Http(e.without_url()))?;

        match serde_json::from_str::<ApiResponse>(&body) {
            Ok(envelope) if envelope.ok && status.is_success() => Ok(()),
            Ok(envelope) => Err(CoreError::NotificationError(format!(
                "{} failed ({}): {}",
                method,
                envelope.error_code.map_or_else(|| status.as_u16().to_string(), |c| c.to_string()),
                envelope.description.unwrap_or_else(|| "no description".to_string())
            ))),
            Err(_) => Err(CoreError::NotificationError(format!(
                "{} failed with {}: {}",
                method,
                status,
                body.trim()
            ))),
        }
    }
}

impl NotificationSink for TelegramSink {
    fn send_text(&self, chat_id: i64, text: &str, mode: ParseMode) -> CoreResult<()> {
        debug!("Sending Telegram message to chat {}", chat_id);

        let payload = SendMessage {
            chat_id,
            text,
            parse_mode: mode.as_str(),
        };
        let request = self.client.post(self.method_url("sendMessage")).json(&payload);
        self.dispatch("sendMessage", request)
    }

    fn send_photo(
        &self,
        chat_id: i64,
        photo: Attachment,
        caption: Option<&str>,
        silent: bool,
    ) -> CoreResult<()> {
        debug!("Sending Telegram photo {} to chat {}", photo.file_name, chat_id);

        let mut form = Form::new()
            .text("chat_id", chat_id.to_string())
            .text("disable_notification", silent.to_string())
            .part("photo", Self::file_part(photo)?);
        if let Some(caption) = caption {
            form = form.text("caption", caption.to_string());
        }

        let request = self.client.post(self.method_url("sendPhoto")).multipart(form);
        self.dispatch("sendPhoto", request)
    }

    fn send_document(&self, chat_id: i64, document: Attachment, silent: bool) -> CoreResult<()> {
        debug!("Sending Telegram document {} to chat {}", document.file_name, chat_id);

        let form = Form::new()
            .text("chat_id", chat_id.to_string())
            .text("disable_notification", silent.to_string())
            .part("document", Self::file_part(document)?);

        let request = self.client.post(self.method_url("sendDocument")).multipart(form);
        self.dispatch("sendDocument", request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_url() {
        let sink =
            TelegramSink::with_base_url("123:abc", "http://localhost:8081/", Duration::from_secs(5))
                .unwrap();
        assert_eq!(
            sink.method_url("sendMessage"),
            "http://localhost:8081/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_send_message_payload() {
        let payload = SendMessage {
            chat_id: -1001,
            text: "*done*",
            parse_mode: ParseMode::Markdown.as_str(),
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"chat_id":-1001,"text":"*done*","parse_mode":"Markdown"}"#
        );
    }

    #[test]
    fn test_error_envelope_decoding() {
        let envelope: ApiResponse = serde_json::from_str(
            r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#,
        )
        .unwrap();
        assert!(!envelope.ok);
        assert_eq!(envelope.error_code, Some(400));
        assert_eq!(envelope.description.as_deref(), Some("Bad Request: chat not found"));

        let envelope: ApiResponse =
            serde_json::from_str(r#"{"ok":true,"result":{"message_id":5}}"#).unwrap();
        assert!(envelope.ok);
        assert!(envelope.description.is_none());
    }

    #[test]
    fn test_empty_token_rejected() {
        assert!(matches!(
            TelegramSink::new(" ", Duration::from_secs(5)),
            Err(CoreError::Config(_))
        ));
    }
}
