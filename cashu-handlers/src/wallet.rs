//! Natural-language wallet requests answered from the demo wallet.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use cashu_commands::{format_balance, mock_balances, parse_intent, templates, Currency, Intent};
use cashu_core::{Bot, Handler, HandlerResponse, Message, Result};
use cashu_delivery::DeliveryConfig;
use tracing::{info, instrument};

pub struct WalletHandler {
    bot: Arc<dyn Bot>,
    balances: BTreeMap<Currency, u64>,
    delivery: DeliveryConfig,
}

impl WalletHandler {
    /// Handler over the canned demo balances.
    pub fn new(bot: Arc<dyn Bot>, delivery: DeliveryConfig) -> Self {
        Self::with_balances(bot, delivery, mock_balances())
    }

    pub fn with_balances(
        bot: Arc<dyn Bot>,
        delivery: DeliveryConfig,
        balances: BTreeMap<Currency, u64>,
    ) -> Self {
        Self {
            bot,
            balances,
            delivery,
        }
    }

    fn respond(&self, intent: &Intent) -> String {
        match intent {
            Intent::Balance => format_balance(&self.balances),
            Intent::SecurityHelp => templates::SECURITY_HELP.to_string(),
            Intent::Send(transfer) => templates::send_unavailable(transfer.as_ref()),
            Intent::Create(amount) => templates::create_unavailable(amount.as_ref()),
            Intent::Help => templates::help(
                self.delivery.max_message_length,
                self.delivery.document_threshold,
            ),
        }
    }
}

#[async_trait]
impl Handler for WalletHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(intent) = parse_intent(&message.content) else {
            return Ok(HandlerResponse::Continue);
        };
        info!(intent = ?intent, "Wallet request");
        let reply = self.respond(&intent);
        self.bot.reply_to(message, &reply).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}
