//! Echo fallback and the shared "send text through the delivery policy" path.

use std::sync::Arc;

use async_trait::async_trait;
use cashu_commands::templates;
use cashu_core::{Bot, Chat, Handler, HandlerError, HandlerResponse, Message, Result};
use cashu_delivery::{
    deliver, plan_delivery, DeliveryConfig, DeliveryMode, DeliveryPlan, OutgoingPayload,
};
use tracing::{debug, info, instrument};

use crate::settings::{HandlerSettings, ECHO_FILENAME};

/// Sends every step of `plan`. An incomplete delivery becomes [`cashu_core::DbotError::Delivery`].
async fn send_plan(
    bot: &dyn Bot,
    chat: &Chat,
    settings: &HandlerSettings,
    plan: &DeliveryPlan,
) -> Result<DeliveryMode> {
    info!(
        chat_id = chat.id,
        mode = %plan.mode(),
        steps = plan.len(),
        "Delivering"
    );
    deliver(bot, chat, plan, &settings.delivery_options)
        .await
        .into_result()?;
    Ok(plan.mode())
}

/// Plans `text` as-is and sends every step.
pub async fn send_planned(
    bot: &dyn Bot,
    chat: &Chat,
    settings: &HandlerSettings,
    text: String,
    filename: &str,
) -> Result<DeliveryMode> {
    let plan = plan_delivery(&settings.delivery, &OutgoingPayload::new(text, filename));
    send_plan(bot, chat, settings, &plan).await
}

/// Plan for echoing `text`. The mode follows the length of the user's text:
/// past the document threshold the raw text goes out as a file, otherwise
/// the prefixed echo goes out inline (direct or chunked). Blank text gets the prompt.
pub fn echo_plan(config: &DeliveryConfig, text: &str, filename: &str) -> DeliveryPlan {
    let raw = match non_blank(text) {
        Ok(text) => text,
        Err(e) => {
            debug!(error = %e, "Nothing to echo");
            return plan_delivery(config, &OutgoingPayload::new("", filename));
        }
    };
    if raw.chars().count() > config.document_threshold {
        return plan_delivery(config, &OutgoingPayload::new(raw, filename));
    }

    let echoed = OutgoingPayload::new(templates::echo(raw), filename);
    // The prefix must not tip an inline echo over into file mode.
    let inline = DeliveryConfig {
        document_threshold: config.document_threshold.max(echoed.char_len()),
        ..config.clone()
    };
    plan_delivery(&inline, &echoed)
}

/// Echoes `text` through [`echo_plan`].
pub async fn echo_text(
    bot: &dyn Bot,
    chat: &Chat,
    settings: &HandlerSettings,
    text: &str,
    filename: &str,
) -> Result<DeliveryMode> {
    let plan = echo_plan(&settings.delivery, text, filename);
    send_plan(bot, chat, settings, &plan).await
}

fn non_blank(text: &str) -> std::result::Result<&str, HandlerError> {
    if text.trim().is_empty() {
        Err(HandlerError::NoText)
    } else {
        Ok(text)
    }
}

/// Last handler in the chain: echoes plain text nobody else claimed.
/// Commands and non-text updates (stickers, photos, service messages) are left alone.
pub struct EchoHandler {
    bot: Arc<dyn Bot>,
    settings: HandlerSettings,
}

impl EchoHandler {
    pub fn new(bot: Arc<dyn Bot>, settings: HandlerSettings) -> Self {
        Self { bot, settings }
    }
}

#[async_trait]
impl Handler for EchoHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_text() || message.command().is_some() {
            debug!(message_type = %message.message_type, "Not echoing");
            return Ok(HandlerResponse::Continue);
        }
        echo_text(
            self.bot.as_ref(),
            &message.chat,
            &self.settings,
            &message.content,
            ECHO_FILENAME,
        )
        .await?;
        Ok(HandlerResponse::Stop)
    }
}
