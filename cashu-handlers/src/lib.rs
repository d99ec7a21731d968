//! # Handlers for the Cashu wallet bot
//!
//! Chain order used by the bot: [`LoggingHandler`], [`CommandHandler`], [`DocumentHandler`],
//! [`WalletHandler`], [`EchoHandler`]. Every outgoing text that may be long goes through
//! [`cashu_delivery`].

mod command;
mod document;
mod echo;
mod logging;
mod settings;
mod wallet;

#[cfg(test)]
mod test;

pub use command::{test_long_cases, BotCommand, CommandHandler};
pub use document::DocumentHandler;
pub use echo::{echo_plan, echo_text, send_planned, EchoHandler};
pub use logging::LoggingHandler;
pub use settings::{
    HandlerSettings, DEFAULT_MAX_DOCUMENT_BYTES, DEFAULT_TEST_LONG_DELAY, DOCUMENT_FALLBACK_NAME,
    ECHO_FILENAME,
};
pub use wallet::WalletHandler;
