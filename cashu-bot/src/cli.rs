//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cashu-bot")]
#[command(about = "Cashu wallet demo bot for Telegram", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}
