//! Knobs shared by the handlers.

use std::time::Duration;

use cashu_delivery::{DeliveryConfig, DeliveryOptions};

/// Telegram's bot upload ceiling for files the bot downloads.
pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 50 * 1024 * 1024;
pub const DEFAULT_TEST_LONG_DELAY: Duration = Duration::from_millis(1000);
/// Attachment name used when echoed text goes out as a file.
pub const ECHO_FILENAME: &str = "long_message.txt";
/// Attachment name used for uploads that arrive without a file name.
pub const DOCUMENT_FALLBACK_NAME: &str = "document.txt";

#[derive(Debug, Clone)]
pub struct HandlerSettings {
    pub delivery: DeliveryConfig,
    pub delivery_options: DeliveryOptions,
    /// Uploads larger than this are rejected before download.
    pub max_document_bytes: u64,
    /// Pause after each `/test_long` case.
    pub test_long_delay: Duration,
}

impl Default for HandlerSettings {
    fn default() -> Self {
        Self {
            delivery: DeliveryConfig::default(),
            delivery_options: DeliveryOptions::default(),
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
            test_long_delay: DEFAULT_TEST_LONG_DELAY,
        }
    }
}
