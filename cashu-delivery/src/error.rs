//! Delivery errors: invalid thresholds and partially delivered plans.

use cashu_core::DbotError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Invalid delivery config: {0}")]
    InvalidConfig(String),

    /// Steps before `failed_step` were sent; `failed_step` (1-based) and everything after it were not.
    #[error("Delivered {delivered}/{total} steps; step {failed_step} failed: {reason}")]
    Partial {
        delivered: usize,
        total: usize,
        failed_step: usize,
        reason: String,
    },
}

impl From<DeliveryError> for DbotError {
    fn from(err: DeliveryError) -> Self {
        match err {
            DeliveryError::InvalidConfig(msg) => DbotError::Config(msg),
            partial @ DeliveryError::Partial { .. } => DbotError::Delivery(partial.to_string()),
        }
    }
}
