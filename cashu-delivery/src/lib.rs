//! # cashu-delivery
//!
//! Long-message delivery policy. [`plan_delivery`] turns an [`OutgoingPayload`] into a
//! [`DeliveryPlan`] (prompt, direct, chunked or file attachment) without any I/O;
//! [`deliver`] executes a plan through a [`cashu_core::Bot`] and reports every step.

pub mod config;
pub mod error;
pub mod executor;
pub mod plan;

pub use config::DeliveryConfig;
pub use error::DeliveryError;
pub use executor::{deliver, DeliveryOptions, DeliveryReport, StepOutcome};
pub use plan::{chunk_header, plan_delivery, DeliveryMode, DeliveryPlan, DeliveryStep, OutgoingPayload};
