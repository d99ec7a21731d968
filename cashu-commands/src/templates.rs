//! Canned response texts.

use crate::currency::{format_amount, Amount};
use crate::intent::Transfer;

pub const WELCOME: &str = "🎉 Welcome to Cashu MCP Wallet Bot!\n\n\
    💡 I help you manage your Cashu tokens - digital cash that's private and fast.\n\n\
    🪙 Supported currencies:\n\
    • Bitcoin (sats)\n\
    • Ethereum (gwei)\n\
    • USDC & USDT\n\
    • Starknet (STRK)\n\n\
    💬 Try these commands:\n\
    • \"Show my balance\"\n\
    • \"Send 10 USD to @username\"\n\
    • \"Create 1000 sats\"\n\
    • \"Help\" for more info\n\n\
    🔒 Your tokens are secure and private!";

const HELP_COMMANDS: &str = "📚 Cashu Bot Help\n\n\
    💬 Natural Language Commands:\n\n\
    💰 Check Balance:\n\
    • \"Show my balance\"\n\
    • \"Check my wallet\"\n\
    • \"How much do I have?\"\n\n\
    💸 Send Money:\n\
    • \"Send 10 USD to @username\"\n\
    • \"Pay @alice 5000 sats\"\n\
    • \"Transfer 100 gwei to @bob\"\n\n\
    🪙 Create Tokens:\n\
    • \"Create 1000 sats\"\n\
    • \"Mint 500 gwei\"\n\
    • \"Generate 50 micro USDC\"\n\n\
    🔒 Security:\n\
    • \"Help security\" for safety tips\n\n";

/// Help text; the long-message section quotes the active thresholds.
pub fn help(max_message_length: usize, document_threshold: usize) -> String {
    format!(
        "{}📏 Long messages:\n\
         • Up to {} characters: sent as one message\n\
         • Up to {} characters: split into numbered parts\n\
         • Longer: sent as a text file\n\
         • /test_long shows all three\n\n\
         💡 Tip: You can use natural language - just tell me what you want to do!",
        HELP_COMMANDS, max_message_length, document_threshold
    )
}

pub const SECURITY_HELP: &str = "🔐 Security Guide\n\n\
    💡 Best Practices:\n\n\
    1. **Store Safely**: These tokens are like digital cash\n\
    2. **Private Keys**: Never share your private keys\n\
    3. **Backup**: Keep a backup of your wallet\n\
    4. **Verify**: Always verify amounts before spending\n\
    5. **Network**: These work on Lightning Network\n\n\
    ⚠️ Important:\n\
    • Transactions are irreversible\n\
    • Double-check recipient usernames\n\
    • Keep your device secure\n\n\
    🆘 If you lose access:\n\
    • Contact support immediately\n\
    • Have backup information ready\n\n\
    💬 Need more help? Just ask!";

const FOR_NOW: &str = "For now, you can:\n\
    • Check your balance\n\
    • Get security help\n\
    • Test long messages\n\n";

pub const DOCUMENT_ERROR: &str = "❌ Error processing document. Please try again.";
pub const GENERIC_ERROR: &str = "❌ An error occurred. Please try again.";

/// Stub reply for payments; echoes the parsed request when there is one.
pub fn send_unavailable(transfer: Option<&Transfer>) -> String {
    let requested = transfer
        .map(|t| {
            format!(
                "📝 Requested: {} to @{}\n\n",
                format_amount(&t.amount),
                t.recipient
            )
        })
        .unwrap_or_default();
    format!(
        "💸 Send Money Feature\n\n🔒 Security Check:\n\n{}⚠️ This feature is coming soon!\n\n{}Stay tuned for full send functionality! 🚀",
        requested, FOR_NOW
    )
}

/// Stub reply for minting; echoes the parsed amount when there is one.
pub fn create_unavailable(amount: Option<&Amount>) -> String {
    let requested = amount
        .map(|a| format!("📝 Requested: {}\n\n", format_amount(a)))
        .unwrap_or_default();
    format!(
        "🪙 Create Tokens Feature\n\n{}⚠️ This feature is coming soon!\n\n{}Stay tuned for full token creation! 🚀",
        requested, FOR_NOW
    )
}

pub fn document_received(file_name: &str) -> String {
    format!("📄 Document received: {}", file_name)
}

pub fn document_size(chars: usize) -> String {
    format!("📊 File size: {} characters", chars)
}

pub fn document_too_large(limit_bytes: u64) -> String {
    format!(
        "❌ File too large! Maximum {}MB allowed.",
        limit_bytes / (1024 * 1024)
    )
}

pub fn test_banner(name: &str) -> String {
    format!("🧪 Testing: {}", name)
}

pub fn echo(text: &str) -> String {
    format!("📤 Echo: {}", text)
}
