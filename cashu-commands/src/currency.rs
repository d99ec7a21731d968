//! Supported currencies, their display rules and balance formatting.
//!
//! Display rules live in [`Currency::info`], an exhaustive match, so a new variant needs its row.

use std::collections::BTreeMap;

/// Token units the wallet knows about. Ordering is the display order of balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Currency {
    Sats,
    Gwei,
    MicroUsdc,
    MicroUsdt,
    MilliStrk,
    Usd,
}

/// How a currency is shown to users and valued in USD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyInfo {
    pub emoji: &'static str,
    /// Asset name shown in balances, e.g. "Bitcoin".
    pub asset: &'static str,
    /// Unit label shown after amounts, e.g. "sats".
    pub unit_label: &'static str,
    /// Approximate USD value of one unit. Mock rates, not market data.
    pub usd_per_unit: f64,
}

/// Spellings accepted in commands, compared after removing whitespace.
const CURRENCY_ALIASES: &[(&str, Currency)] = &[
    ("usd", Currency::Usd),
    ("dollar", Currency::Usd),
    ("dollars", Currency::Usd),
    ("sat", Currency::Sats),
    ("sats", Currency::Sats),
    ("gwei", Currency::Gwei),
    ("microusd", Currency::MicroUsdc),
    ("microusdc", Currency::MicroUsdc),
    ("microusdt", Currency::MicroUsdt),
    ("strk", Currency::MilliStrk),
    ("millistrk", Currency::MilliStrk),
];

impl Currency {
    /// Every currency, in display order.
    pub const ALL: [Currency; 6] = [
        Currency::Sats,
        Currency::Gwei,
        Currency::MicroUsdc,
        Currency::MicroUsdt,
        Currency::MilliStrk,
        Currency::Usd,
    ];

    pub fn info(self) -> &'static CurrencyInfo {
        match self {
            Currency::Sats => &CurrencyInfo {
                emoji: "🪙",
                asset: "Bitcoin",
                unit_label: "sats",
                usd_per_unit: 0.000_25,
            },
            Currency::Gwei => &CurrencyInfo {
                emoji: "⚡",
                asset: "Ethereum",
                unit_label: "gwei",
                usd_per_unit: 0.000_000_5,
            },
            Currency::MicroUsdc => &CurrencyInfo {
                emoji: "💵",
                asset: "USDC",
                unit_label: "micro USDC",
                usd_per_unit: 0.000_001,
            },
            Currency::MicroUsdt => &CurrencyInfo {
                emoji: "💵",
                asset: "USDT",
                unit_label: "micro USDT",
                usd_per_unit: 0.000_001,
            },
            Currency::MilliStrk => &CurrencyInfo {
                emoji: "🔷",
                asset: "Starknet",
                unit_label: "milli STRK",
                usd_per_unit: 0.000_5,
            },
            Currency::Usd => &CurrencyInfo {
                emoji: "💲",
                asset: "US Dollar",
                unit_label: "USD",
                usd_per_unit: 1.0,
            },
        }
    }

    /// Normalizes a user-typed unit ("dollars", "micro usdc", "SATS") to a currency.
    pub fn parse(word: &str) -> Option<Self> {
        let compact: String = word
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        CURRENCY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == compact)
            .map(|(_, currency)| *currency)
    }
}

/// An amount of some currency as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount {
    pub value: f64,
    pub currency: Currency,
}

/// `50000` → `"50,000"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `$10.00 USD` for dollars, `1,000 sats` style for everything else.
pub fn format_amount(amount: &Amount) -> String {
    match amount.currency {
        Currency::Usd => format!("${:.2} USD", amount.value),
        other => format!(
            "{} {}",
            group_thousands(amount.value.round() as u64),
            other.info().unit_label
        ),
    }
}

/// Renders a wallet balance: one line per currency (in [`Currency`] order) with its USD value, then the total.
pub fn format_balance(balances: &BTreeMap<Currency, u64>) -> String {
    let mut text = String::from("💰 Your Cashu Wallet Balance:\n\n");
    let mut total_usd = 0.0;

    for (currency, amount) in balances {
        let info = currency.info();
        let usd_value = *amount as f64 * info.usd_per_unit;
        total_usd += usd_value;
        text.push_str(&format!(
            "{} {}: {} {} (${:.2})\n",
            info.emoji,
            info.asset,
            group_thousands(*amount),
            info.unit_label,
            usd_value
        ));
    }
    if balances.is_empty() {
        text.push_str("(empty)\n");
    }

    text.push_str(&format!("\n💵 Total Value: ~${:.2} USD", total_usd));
    text.push_str("\n\n💡 What would you like to do next?");
    text
}

/// Canned balances shown by the demo wallet.
pub fn mock_balances() -> BTreeMap<Currency, u64> {
    BTreeMap::from([
        (Currency::Sats, 50_000),
        (Currency::Gwei, 1_000_000),
        (Currency::MicroUsdc, 100_000),
        (Currency::MicroUsdt, 500_000),
    ])
}
