//! Uploaded text documents: size check, download, decode, echo through the delivery policy.

use std::sync::Arc;

use async_trait::async_trait;
use cashu_commands::templates;
use cashu_core::{Bot, DocumentRef, Handler, HandlerError, HandlerResponse, Message, Result};
use tracing::{error, info, instrument, warn};

use crate::echo::echo_text;
use crate::settings::{HandlerSettings, DOCUMENT_FALLBACK_NAME};

pub struct DocumentHandler {
    bot: Arc<dyn Bot>,
    settings: HandlerSettings,
}

impl DocumentHandler {
    pub fn new(bot: Arc<dyn Bot>, settings: HandlerSettings) -> Self {
        Self { bot, settings }
    }

    /// Downloads and decodes the document. Nothing is downloaded when the reported size is over the limit.
    async fn fetch_text(&self, document: &DocumentRef) -> Result<String> {
        let limit = self.settings.max_document_bytes;
        if document.file_size > limit {
            return Err(HandlerError::DocumentTooLarge {
                size: document.file_size,
                limit,
            }
            .into());
        }
        let bytes = self.bot.download_file(&document.file_id).await?;
        let text = String::from_utf8(bytes).map_err(HandlerError::from)?;
        Ok(text)
    }
}

#[async_trait]
impl Handler for DocumentHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(document) = &message.document else {
            return Ok(HandlerResponse::Continue);
        };
        let file_name = document
            .file_name
            .as_deref()
            .unwrap_or(DOCUMENT_FALLBACK_NAME);

        let text = match self.fetch_text(document).await {
            Ok(text) => text,
            Err(cashu_core::DbotError::Handler(e @ HandlerError::DocumentTooLarge { .. })) => {
                warn!(error = %e, file_name, "Rejecting document");
                let reply = templates::document_too_large(self.settings.max_document_bytes);
                self.bot.reply_to(message, &reply).await?;
                return Ok(HandlerResponse::Reply(reply));
            }
            Err(e) => {
                error!(error = %e, file_name, "Error processing document");
                self.bot.reply_to(message, templates::DOCUMENT_ERROR).await?;
                return Ok(HandlerResponse::Reply(templates::DOCUMENT_ERROR.to_string()));
            }
        };

        let chars = text.chars().count();
        info!(file_name, bytes = document.file_size, chars, "Document received");
        self.bot
            .reply_to(message, &templates::document_received(file_name))
            .await?;
        self.bot
            .reply_to(message, &templates::document_size(chars))
            .await?;

        echo_text(
            self.bot.as_ref(),
            &message.chat,
            &self.settings,
            &text,
            file_name,
        )
        .await?;
        Ok(HandlerResponse::Stop)
    }
}
