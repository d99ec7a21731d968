//! Wires config, tracing, the Telegram adapter and the handler chain, then runs the REPL.

use std::sync::Arc;

use anyhow::Result;
use cashu_core::{init_tracing, Bot};
use cashu_handlers::{
    CommandHandler, DocumentHandler, EchoHandler, HandlerSettings, LoggingHandler, WalletHandler,
};
use cashu_telegram::{run_repl, TelegramBotAdapter};
use handler_chain::HandlerChain;
use tracing::{info, instrument};

use crate::config::BotConfig;

/// Chain in bot order: logging, commands, documents, wallet intents, echo.
pub fn build_handler_chain(bot: Arc<dyn Bot>, settings: &HandlerSettings) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(bot.clone(), settings.clone())))
        .add_handler(Arc::new(DocumentHandler::new(bot.clone(), settings.clone())))
        .add_handler(Arc::new(WalletHandler::new(
            bot.clone(),
            settings.delivery.clone(),
        )))
        .add_handler(Arc::new(EchoHandler::new(bot, settings.clone())))
}

/// Main entry: validate config, init logging, build the chain, then run the REPL until Ctrl-C.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        log_file = %config.log_file,
        api_url = %config.telegram.telegram_api_url.as_deref().unwrap_or("default"),
        max_message_length = config.delivery().max_message_length,
        chunk_size = config.delivery().chunk_size,
        document_threshold = config.delivery().document_threshold,
        max_document_bytes = config.handlers.max_document_bytes,
        "Starting Cashu wallet bot"
    );

    let teloxide_bot = config.telegram.build_bot()?;
    let core_bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handler_chain = build_handler_chain(core_bot.clone(), &config.handlers);

    info!(handlers = handler_chain.len(), "Bot started. Press Ctrl+C to stop.");
    run_repl(teloxide_bot, handler_chain, core_bot).await
}
