//! Wallet vocabulary for the bot: currencies, natural-language intents and reply texts.
//!
//! Everything here is pure; no network or Telegram types are involved.

pub mod currency;
pub mod intent;
pub mod templates;

pub use currency::{
    format_amount, format_balance, group_thousands, mock_balances, Amount, Currency, CurrencyInfo,
};
pub use intent::{normalize, parse_intent, Intent, Transfer};
