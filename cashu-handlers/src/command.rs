//! `/start`, `/help` and `/test_long`.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use cashu_commands::templates;
use cashu_core::{Bot, Handler, HandlerError, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

use crate::echo::send_planned;
use crate::settings::{HandlerSettings, ECHO_FILENAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Help,
    TestLong,
}

impl FromStr for BotCommand {
    type Err = HandlerError;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        match name {
            "start" => Ok(Self::Start),
            "help" => Ok(Self::Help),
            "test_long" => Ok(Self::TestLong),
            other => Err(HandlerError::InvalidCommand(other.to_string())),
        }
    }
}

/// The `/test_long` cases: name and payload, one per delivery mode.
pub fn test_long_cases() -> Vec<(&'static str, String)> {
    vec![
        ("Short message test", "Short message (< 4k chars)".to_string()),
        ("Medium message test", "A".repeat(5_000)),
        ("Long message test", "B".repeat(15_000)),
        ("Very long message test", "C".repeat(25_000)),
    ]
}

pub struct CommandHandler {
    bot: Arc<dyn Bot>,
    settings: HandlerSettings,
}

impl CommandHandler {
    pub fn new(bot: Arc<dyn Bot>, settings: HandlerSettings) -> Self {
        Self { bot, settings }
    }

    async fn run_test_long(&self, message: &Message) -> Result<()> {
        for (name, payload) in test_long_cases() {
            info!(chat_id = message.chat.id, test = name, "Running long message test");
            self.bot
                .reply_to(message, &templates::test_banner(name))
                .await?;
            send_planned(
                self.bot.as_ref(),
                &message.chat,
                &self.settings,
                payload,
                ECHO_FILENAME,
            )
            .await?;
            tokio::time::sleep(self.settings.test_long_delay).await;
        }
        Ok(())
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(name) = message.command() else {
            return Ok(HandlerResponse::Continue);
        };
        let command = match name.parse::<BotCommand>() {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "Not a bot command, passing on");
                return Ok(HandlerResponse::Continue);
            }
        };

        let reply = match command {
            BotCommand::Start => templates::WELCOME.to_string(),
            BotCommand::Help => templates::help(
                self.settings.delivery.max_message_length,
                self.settings.delivery.document_threshold,
            ),
            BotCommand::TestLong => {
                self.run_test_long(message).await?;
                return Ok(HandlerResponse::Stop);
            }
        };
        self.bot.reply_to(message, &reply).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}
