//! # cashu-telegram
//!
//! Telegram layer: adapters, [`cashu_core::Bot`] implementation, connection config, REPL runner.
//! Handles only Telegram connectivity and handler-chain execution; no wallet or delivery logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{dispatch, run_repl};
