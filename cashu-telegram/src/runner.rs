//! REPL: converts each teloxide message to a core Message and runs the handler chain on it.
//! Chain errors are logged and answered with a generic apology; the REPL keeps serving.

use std::sync::Arc;

use anyhow::Result;
use cashu_commands::templates::GENERIC_ERROR;
use cashu_core::{Bot, Message, ToCoreMessage};
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use crate::adapters::TelegramMessageWrapper;

/// Runs the chain for one message; on failure logs it and sends [`GENERIC_ERROR`] to the chat.
#[instrument(skip_all, fields(user_id = message.user.id, chat_id = message.chat.id))]
pub async fn dispatch(handler_chain: &HandlerChain, bot: &dyn Bot, message: &Message) {
    if let Err(e) = handler_chain.handle(message).await {
        error!(error = %e, message_id = %message.id, "Handler chain failed");
        if let Err(send_err) = bot.send_message(&message.chat, GENERIC_ERROR).await {
            warn!(error = %send_err, "Could not deliver error notice");
        }
    }
}

/// Starts the REPL with the given teloxide Bot, chain, and the core Bot handlers send through.
/// Updates of one chat are handled one at a time; the chain is awaited in place.
#[instrument(skip(bot, handler_chain, core_bot))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    core_bot: Arc<dyn Bot>,
) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Connected to Telegram");
        }
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: teloxide::Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();
        let core_bot = core_bot.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_type = %core_msg.message_type,
                "step: processing message (handler chain started)"
            );
            dispatch(&chain, core_bot.as_ref(), &core_msg).await;
            respond(())
        }
    })
    .await;

    Ok(())
}
