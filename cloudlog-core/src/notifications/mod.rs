//! Notification system for pushing log updates to a chat.
//!
//! This module provides the [`NotificationSink`] abstraction used by the
//! facade and a Telegram Bot API implementation of it.
mod abstraction;
mod telegram;

pub use abstraction::{Attachment, NotificationSink, ParseMode};
pub use telegram::{TELEGRAM_API_URL, TelegramSink};
