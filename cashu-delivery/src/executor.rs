//! Executes a [`DeliveryPlan`] against a [`Bot`], one API call per step, in plan order.
//!
//! No retries. The first failing step is logged and recorded; the steps after it are skipped
//! so the receiver never sees a later chunk without the earlier ones.

use std::time::Duration;

use cashu_core::{Bot, Chat};
use tracing::{debug, error, info, instrument};

use crate::error::DeliveryError;
use crate::plan::{DeliveryPlan, DeliveryStep};

#[derive(Debug, Clone, Default)]
pub struct DeliveryOptions {
    /// Pause between consecutive steps; not applied after the last one.
    pub step_delay: Duration,
}

impl DeliveryOptions {
    pub fn with_step_delay(step_delay: Duration) -> Self {
        Self { step_delay }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Sent,
    Failed(String),
    /// Not attempted because an earlier step failed.
    Skipped,
}

/// Per-step outcome of one [`deliver`] call, in plan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    outcomes: Vec<StepOutcome>,
}

impl DeliveryReport {
    pub fn outcomes(&self) -> &[StepOutcome] {
        &self.outcomes
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of steps that reached the transport successfully.
    pub fn delivered(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, StepOutcome::Sent))
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.delivered() == self.total()
    }

    /// 1-based index and reason of the failed step, if any.
    pub fn failure(&self) -> Option<(usize, &str)> {
        self.outcomes.iter().enumerate().find_map(|(i, o)| match o {
            StepOutcome::Failed(reason) => Some((i + 1, reason.as_str())),
            _ => None,
        })
    }

    /// `Ok(delivered)` when every step was sent, otherwise [`DeliveryError::Partial`].
    pub fn into_result(self) -> Result<usize, DeliveryError> {
        match self.failure() {
            None => Ok(self.delivered()),
            Some((failed_step, reason)) => Err(DeliveryError::Partial {
                delivered: self.delivered(),
                total: self.total(),
                failed_step,
                reason: reason.to_string(),
            }),
        }
    }
}

/// Sends every step of `plan` to `chat`. Never panics or returns early with an error;
/// inspect the returned report.
#[instrument(skip(bot, chat, plan, options), fields(chat_id = chat.id, mode = %plan.mode(), steps = plan.len()))]
pub async fn deliver(
    bot: &dyn Bot,
    chat: &Chat,
    plan: &DeliveryPlan,
    options: &DeliveryOptions,
) -> DeliveryReport {
    let total = plan.len();
    let mut outcomes = Vec::with_capacity(total);

    for (i, step) in plan.steps().iter().enumerate() {
        let step_no = i + 1;
        if i > 0 && !options.step_delay.is_zero() {
            tokio::time::sleep(options.step_delay).await;
        }

        debug!(step = step_no, kind = step.kind(), "sending delivery step");
        let sent = match step {
            DeliveryStep::FileAttachment {
                filename,
                content,
                caption,
            } => {
                bot.send_document(chat, filename, content.clone(), caption)
                    .await
            }
            inline => bot.send_message(chat, &inline.render()).await,
        };

        if let Err(e) = sent {
            error!(
                step = step_no,
                total = total,
                kind = step.kind(),
                error = %e,
                "delivery step failed, remaining steps skipped"
            );
            outcomes.push(StepOutcome::Failed(e.to_string()));
            outcomes.resize(total, StepOutcome::Skipped);
            return DeliveryReport { outcomes };
        }
        outcomes.push(StepOutcome::Sent);
    }

    info!(delivered = total, "delivery complete");
    DeliveryReport { outcomes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_into_result_partial() {
        let report = DeliveryReport {
            outcomes: vec![
                StepOutcome::Sent,
                StepOutcome::Failed("timeout".to_string()),
                StepOutcome::Skipped,
            ],
        };
        assert!(!report.is_complete());
        assert_eq!(report.failure(), Some((2, "timeout")));
        assert_eq!(
            report.into_result(),
            Err(DeliveryError::Partial {
                delivered: 1,
                total: 3,
                failed_step: 2,
                reason: "timeout".to_string(),
            })
        );
    }

    #[test]
    fn test_report_into_result_complete() {
        let report = DeliveryReport {
            outcomes: vec![StepOutcome::Sent, StepOutcome::Sent],
        };
        assert_eq!(report.into_result(), Ok(2));
    }
}
