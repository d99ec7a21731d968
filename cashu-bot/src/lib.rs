//! # cashu-bot
//!
//! Binary support: CLI parsing, env config and the runner that wires everything to Telegram.

pub mod cli;
pub mod config;
pub mod runner;

pub use cli::{Cli, Commands};
pub use config::BotConfig;
pub use runner::{build_handler_chain, run_bot};
