//! Telegram connection settings: token and optional Bot API base URL.

use cashu_core::{DbotError, Result};
use reqwest::Url;

/// Everything needed to build a teloxide Bot.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// Alternative Bot API server, e.g. a local `telegram-bot-api` instance.
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Uses the given token and the public Bot API.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// Parsed API URL; `Err` when set but not a URL.
    pub fn api_url(&self) -> Result<Option<Url>> {
        self.telegram_api_url
            .as_deref()
            .map(|raw| {
                Url::parse(raw).map_err(|e| {
                    DbotError::Config(format!("Invalid TELEGRAM_API_URL {:?}: {}", raw, e))
                })
            })
            .transpose()
    }

    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(&self.bot_token);
        Ok(match self.api_url()? {
            Some(url) => bot.set_api_url(url),
            None => bot,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_token() {
        let config = TelegramConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert!(config.api_url().unwrap().is_none());
    }

    #[test]
    fn test_api_url_parsed() {
        let config = TelegramConfig {
            telegram_api_url: Some("http://localhost:8081".to_string()),
            ..TelegramConfig::with_token("t".to_string())
        };
        let url = config.api_url().unwrap().unwrap();
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(8081));
    }

    #[test]
    fn test_invalid_api_url_is_config_error() {
        let config = TelegramConfig {
            telegram_api_url: Some("not a url".to_string()),
            ..TelegramConfig::with_token("t".to_string())
        };
        assert!(matches!(config.api_url(), Err(DbotError::Config(_))));
        assert!(config.build_bot().is_err());
    }
}
