// ============================================================================
// cloudlog-core/src/cloud/dropbox.rs
// ============================================================================
//
// DROPBOX IMPLEMENTATION: Uploads Through the Dropbox HTTP API
//
// This module sends file contents to the Dropbox content endpoint
// (`/2/files/upload`). Paths are relative to the app folder the access token
// was issued for.
//
// KEY COMPONENTS:
// - DropboxSink: Blocking uploader holding the token and an HTTP client
//
// AI-ASSISTANT-INFO: Dropbox implementation of CloudSink

// ---- Internal crate imports ----
use crate::cloud::{CloudSink, WriteMode};
use crate::error::{CoreError, CoreResult};

// ---- External crate imports ----
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;

// ---- Standard library imports ----
use std::time::Duration;

/// Production content endpoint.
pub const DROPBOX_CONTENT_URL: &str = "https://content.dropboxapi.com";

/// Header carrying the JSON-encoded call arguments.
const DROPBOX_API_ARG: &str = "Dropbox-API-Arg";

// ============================================================================
// REQUEST ARGUMENTS
// ============================================================================

/// JSON payload of the `Dropbox-API-Arg` header for `files/upload`.
#[derive(Debug, Serialize)]
struct UploadArg<'a> {
    path: &'a str,
    mode: WriteMode,
    autorename: bool,
    mute: bool,
}

/// Escapes DEL and every non-ASCII char in `json` as `\uXXXX` (UTF-16 units).
///
/// HTTP header values must be ASCII, so Dropbox expects the argument JSON in
/// this form. The result decodes to the same JSON value.
fn ascii_header_json(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c < '\u{7f}' {
            escaped.push(c);
            continue;
        }
        for unit in c.encode_utf16(&mut units).iter() {
            escaped.push_str(&format!("\\u{:04x}", unit));
        }
    }
    escaped
}

// ============================================================================
// DROPBOX SINK
// ============================================================================

/// Uploads files into a Dropbox app folder.
///
/// # Examples
///
/// ```rust,no_run
/// use cloudlog_core::cloud::{CloudSink, DropboxSink, WriteMode};
/// use std::time::Duration;
///
/// let sink = DropboxSink::new("sl.access-token", Duration::from_secs(30)).unwrap();
/// sink.upload(b"hello".to_vec(), "/hello.txt", WriteMode::Overwrite).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DropboxSink {
    token: String,
    base_url: String,
    client: Client,
}

impl DropboxSink {
    /// Creates a sink talking to the production Dropbox endpoint.
    pub fn new(token: &str, timeout: Duration) -> CoreResult<Self> {
        Self::with_base_url(token, DROPBOX_CONTENT_URL, timeout)
    }

    /// Creates a sink against a custom endpoint (e.g. a local mock server).
    pub fn with_base_url(token: &str, base_url: &str, timeout: Duration) -> CoreResult<Self> {
        if token.trim().is_empty() {
            return Err(CoreError::Config("Dropbox token must not be empty".to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            token: token.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn upload_url(&self) -> String {
        format!("{}/2/files/upload", self.base_url)
    }
}

impl CloudSink for DropboxSink {
    fn upload(&self, contents: Vec<u8>, remote_path: &str, mode: WriteMode) -> CoreResult<()> {
        let arg = ascii_header_json(&serde_json::to_string(&UploadArg {
            path: remote_path,
            mode,
            autorename: false,
            mute: false,
        })?);

        debug!("Uploading {} bytes to Dropbox path {}", contents.len(), remote_path);

        let response = self
            .client
            .post(self.upload_url())
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(CONTENT_TYPE, "application/octet-stream")
            .header(DROPBOX_API_ARG, arg)
            .body(contents)
            .send()?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().unwrap_or_default();
        Err(CoreError::CloudError(format!(
            "upload to {} failed with {}: {}",
            remote_path,
            status,
            body.trim()
        )))
    }
}
