//! Bot config: Telegram connection, logging, delivery thresholds and handler knobs. Loaded from env.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use cashu_delivery::DeliveryConfig;
use cashu_handlers::HandlerSettings;
use cashu_telegram::TelegramConfig;


pub const DEFAULT_LOG_FILE: &str = "logs/cashu-bot.log";

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN and TELEGRAM_API_URL (or TELOXIDE_API_URL)
    pub telegram: TelegramConfig,
    /// LOG_FILE
    pub log_file: String,
    /// MAX_MESSAGE_LENGTH, CHUNK_SIZE, DOCUMENT_THRESHOLD, MAX_DOCUMENT_BYTES, TEST_LONG_DELAY_MS
    pub handlers: HandlerSettings,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN")
                .context("BOT_TOKEN not set (set it in .env or pass --token)")?,
        };
        if bot_token.trim().is_empty() {
            anyhow::bail!("Bot token is empty");
        }
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        let defaults = HandlerSettings::default();
        let delivery = DeliveryConfig {
            max_message_length: env_or("MAX_MESSAGE_LENGTH", defaults.delivery.max_message_length)?,
            chunk_size: env_or("CHUNK_SIZE", defaults.delivery.chunk_size)?,
            document_threshold: env_or("DOCUMENT_THRESHOLD", defaults.delivery.document_threshold)?,
            ..defaults.delivery.clone()
        };
        let handlers = HandlerSettings {
            delivery,
            max_document_bytes: env_or("MAX_DOCUMENT_BYTES", defaults.max_document_bytes)?,
            test_long_delay: Duration::from_millis(env_or(
                "TEST_LONG_DELAY_MS",
                defaults.test_long_delay.as_millis() as u64,
            )?),
            ..defaults
        };

        Ok(Self {
            telegram: TelegramConfig {
                bot_token,
                telegram_api_url,
            },
            log_file,
            handlers,
        })
    }

    /// Validate config: API URL must parse if set, delivery thresholds must be coherent.
    pub fn validate(&self) -> Result<()> {
        self.telegram.api_url()?;
        self.handlers.delivery.validate()?;
        if self.handlers.max_document_bytes == 0 {
            anyhow::bail!("MAX_DOCUMENT_BYTES must be positive");
        }
        Ok(())
    }

    pub fn delivery(&self) -> &DeliveryConfig {
        &self.handlers.delivery
    }
}

/// Parses `key` when set; unset falls back to `default`, unparsable is an error.
fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} is not a valid value: {:?}", key, raw)),
        Err(_) => Ok(default),
    }
}
