//! Wraps teloxide::Bot and implements [`cashu_core::Bot`]. Production code talks to Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use cashu_core::{Bot as CoreBot, Chat, DbotError, Message, Result};
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{ChatId, FileId, InputFile};
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements cashu-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn bot_error(e: impl std::fmt::Display) -> DbotError {
    DbotError::Bot(e.to_string())
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_document(
        &self,
        chat: &Chat,
        filename: &str,
        content: Vec<u8>,
        caption: &str,
    ) -> Result<()> {
        let file = InputFile::memory(content).file_name(filename.to_string());
        self.bot
            .send_document(ChatId(chat.id), file)
            .caption(caption.to_string())
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn download_file(&self, file_id: &str) -> Result<Vec<u8>> {
        let file = self
            .bot
            .get_file(FileId(file_id.to_string()))
            .await
            .map_err(bot_error)?;
        let mut buf = Vec::new();
        self.bot
            .download_file(&file.path, &mut buf)
            .await
            .map_err(bot_error)?;
        debug!(file_id, bytes = buf.len(), "Downloaded file");
        Ok(buf)
    }
}
