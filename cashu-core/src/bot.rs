//! Bot abstraction for sending text, uploading documents and fetching uploaded files.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in `cashu-telegram`.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Abstraction over the messaging transport. Each method maps to one platform API call.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Uploads `content` as a document named `filename`, with `caption` shown below it.
    async fn send_document(
        &self,
        chat: &Chat,
        filename: &str,
        content: Vec<u8>,
        caption: &str,
    ) -> Result<()>;
    /// Downloads a previously uploaded file by its transport-specific id.
    async fn download_file(&self, file_id: &str) -> Result<Vec<u8>>;
}
