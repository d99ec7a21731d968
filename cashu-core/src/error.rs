//! Error types for the bot core.
//!
//! [`DbotError`] is the top-level error; [`HandlerError`] is used for handler failures.

use thiserror::Error;

/// Top-level error (bot transport, handler, config, delivery).
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Delivery error: {0}")]
    Delivery(String),
}

/// Errors produced by handlers (no text, invalid command, oversized or undecodable upload).
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("No text in message")]
    NoText,

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Document too large: {size} bytes (limit {limit})")]
    DocumentTooLarge { size: u64, limit: u64 },

    #[error("Document is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error_converts_into_dbot_error() {
        let err: DbotError = HandlerError::DocumentTooLarge {
            size: 52_428_801,
            limit: 52_428_800,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Handler error: Document too large: 52428801 bytes (limit 52428800)"
        );
    }

    #[test]
    fn test_decode_error_from_utf8() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: HandlerError = utf8_err.into();
        assert!(matches!(err, HandlerError::Decode(_)));
    }
}
