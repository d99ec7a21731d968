//! Natural-language intent recognition.
//!
//! A static table maps each intent to a pure parser; the first parser that matches wins.
//! Parsers take text already passed through [`normalize`].

use lazy_regex::{regex_captures, regex_is_match};
use tracing::debug;

use crate::currency::{Amount, Currency};

/// A recognized user request.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Balance,
    SecurityHelp,
    /// `None` when the request looked like a payment but amount or recipient could not be read.
    Send(Option<Transfer>),
    /// `None` when the request looked like minting but the amount could not be read.
    Create(Option<Amount>),
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub amount: Amount,
    /// Telegram username without the leading `@`.
    pub recipient: String,
}

type IntentParser = fn(&str) -> Option<Intent>;

const INTENT_TABLE: &[(&str, IntentParser)] = &[
    ("balance", parse_balance),
    ("security_help", parse_security_help),
    ("send", parse_send),
    ("create", parse_create),
    ("help", parse_help),
];

/// Lowercases and trims user text.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Recognizes the first matching intent, or `None` for plain text.
pub fn parse_intent(text: &str) -> Option<Intent> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return None;
    }
    INTENT_TABLE.iter().find_map(|(name, parser)| {
        let intent = parser(&normalized)?;
        debug!(intent = %name, "intent recognized");
        Some(intent)
    })
}

pub fn parse_balance(text: &str) -> Option<Intent> {
    regex_is_match!(
        r"show\s+my\s+balance|check\s+my\s+wallet|how\s+much\s+do\s+i\s+have|what('s|\s+is)\s+in\s+my\s+wallet|\b(balance|wallet|funds)\b",
        text
    )
    .then_some(Intent::Balance)
}

pub fn parse_security_help(text: &str) -> Option<Intent> {
    regex_is_match!(
        r"help\s+security|security\s+help|how\s+to\s+stay\s+safe|safety\s+guide",
        text
    )
    .then_some(Intent::SecurityHelp)
}

/// `send|transfer N CUR to @user`, `pay|give @user N CUR`; otherwise any payment verb plus `@`.
pub fn parse_send(text: &str) -> Option<Intent> {
    if let Some((_, amount, currency, recipient)) = regex_captures!(
        r"\b(?:send|transfer)\s+(\d+(?:\.\d+)?)\s*(usd|dollars?|sats?|gwei|micro\s*usd[ct]?|milli\s*strk|strk)\s+to\s+@(\w+)",
        text
    ) {
        if let Some(transfer) = build_transfer(amount, currency, recipient) {
            return Some(Intent::Send(Some(transfer)));
        }
    }

    if let Some((_, recipient, amount, currency)) = regex_captures!(
        r"\b(?:pay|give)\s+@(\w+)\s+(\d+(?:\.\d+)?)\s*(usd|dollars?|sats?|gwei|micro\s*usd[ct]?|milli\s*strk|strk)\b",
        text
    ) {
        if let Some(transfer) = build_transfer(amount, currency, recipient) {
            return Some(Intent::Send(Some(transfer)));
        }
    }

    (regex_is_match!(r"\b(send|pay|transfer|give)\b", text) && text.contains('@'))
        .then_some(Intent::Send(None))
}

/// `create|mint|generate|make N CUR`; otherwise a mint verb plus a currency word.
pub fn parse_create(text: &str) -> Option<Intent> {
    if let Some((_, amount, currency)) = regex_captures!(
        r"\b(?:create|mint|generate|make)\s+(\d+(?:\.\d+)?)\s*(usd|dollars?|sats?|gwei|micro\s*usd[ct]?|milli\s*strk|strk)\b",
        text
    ) {
        if let Some(amount) = build_amount(amount, currency) {
            return Some(Intent::Create(Some(amount)));
        }
    }

    (regex_is_match!(r"\b(create|mint|generate|make)\b", text)
        && regex_is_match!(r"\b(sats?|gwei|usdc|usdt)\b", text))
    .then_some(Intent::Create(None))
}

pub fn parse_help(text: &str) -> Option<Intent> {
    regex_is_match!(
        r"\bhelp\b|what\s+can\s+you\s+do|how\s+to\s+use|\bcommands\b|\bguide\b",
        text
    )
    .then_some(Intent::Help)
}

fn build_amount(value: &str, currency: &str) -> Option<Amount> {
    let value: f64 = value.parse().ok()?;
    let currency = Currency::parse(currency)?;
    Some(Amount { value, currency })
}

fn build_transfer(value: &str, currency: &str, recipient: &str) -> Option<Transfer> {
    Some(Transfer {
        amount: build_amount(value, currency)?,
        recipient: recipient.to_string(),
    })
}
