//! Handler that logs messages and responses.

use async_trait::async_trait;
use cashu_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

/// Logs each message in before() and the response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            chars = message.content.chars().count(),
            has_document = message.document.is_some(),
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let outcome = match response {
            HandlerResponse::Reply(text) => format!("reply ({} chars)", text.chars().count()),
            other => format!("{:?}", other),
        };
        debug!(
            message_id = %message.id,
            response = %outcome,
            "Processed message"
        );
        Ok(())
    }
}
