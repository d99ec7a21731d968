//! Delivery thresholds.

use crate::error::DeliveryError;
use crate::plan::chunk_header;

/// Hard Telegram ceiling for one text message.
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 4096;
/// Per-chunk payload; leaves room for the part header.
pub const DEFAULT_CHUNK_SIZE: usize = 4000;
/// Above this many characters the payload goes out as a file.
pub const DEFAULT_DOCUMENT_THRESHOLD: usize = 20_000;
pub const DEFAULT_EMPTY_PROMPT: &str = "Please send some text to echo!";

/// Thresholds used by [`crate::plan_delivery`]. All lengths count Unicode code points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    pub max_message_length: usize,
    pub chunk_size: usize,
    pub document_threshold: usize,
    /// Text of the prompt step produced for empty payloads.
    pub empty_prompt: String,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
            chunk_size: DEFAULT_CHUNK_SIZE,
            document_threshold: DEFAULT_DOCUMENT_THRESHOLD,
            empty_prompt: DEFAULT_EMPTY_PROMPT.to_string(),
        }
    }
}

impl DeliveryConfig {
    /// Largest number of chunks a chunked plan can have under these thresholds.
    pub fn max_chunk_count(&self) -> usize {
        self.document_threshold.div_ceil(self.chunk_size.max(1))
    }

    /// Checks that every chunk, header included, fits in `max_message_length`.
    pub fn validate(&self) -> Result<(), DeliveryError> {
        if self.max_message_length == 0 {
            return Err(DeliveryError::InvalidConfig(
                "max_message_length must be positive".to_string(),
            ));
        }
        if self.chunk_size == 0 || self.chunk_size >= self.max_message_length {
            return Err(DeliveryError::InvalidConfig(format!(
                "chunk_size ({}) must be between 1 and max_message_length ({}) exclusive",
                self.chunk_size, self.max_message_length
            )));
        }
        if self.document_threshold < self.max_message_length {
            return Err(DeliveryError::InvalidConfig(format!(
                "document_threshold ({}) must not be below max_message_length ({})",
                self.document_threshold, self.max_message_length
            )));
        }

        let total = self.max_chunk_count();
        let longest_header = chunk_header(1, total)
            .chars()
            .count()
            .max(chunk_header(total, total).chars().count());
        if self.chunk_size + longest_header > self.max_message_length {
            return Err(DeliveryError::InvalidConfig(format!(
                "chunk_size ({}) plus part header ({}) exceeds max_message_length ({})",
                self.chunk_size, longest_header, self.max_message_length
            )));
        }
        if self.empty_prompt.trim().is_empty() {
            return Err(DeliveryError::InvalidConfig(
                "empty_prompt must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DeliveryConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_chunk_count(), 5);
    }

    #[test]
    fn test_chunk_size_must_be_below_ceiling() {
        let config = DeliveryConfig {
            chunk_size: 4096,
            ..DeliveryConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DeliveryError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_header_must_fit() {
        // 4090 + "📄 Long message (part 1/5):\n\n" overflows 4096
        let config = DeliveryConfig {
            chunk_size: 4090,
            ..DeliveryConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("part header"));
    }

    #[test]
    fn test_document_threshold_not_below_ceiling() {
        let config = DeliveryConfig {
            document_threshold: 1000,
            ..DeliveryConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_prompt_rejected() {
        let config = DeliveryConfig {
            empty_prompt: "  ".to_string(),
            ..DeliveryConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
