//! Recording [`cashu_core::Bot`] for delivery tests.

use std::sync::Mutex;

use async_trait::async_trait;
use cashu_core::{Bot, Chat, DbotError, Message, Result};

/// One recorded transport call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text(String),
    Document {
        filename: String,
        content: Vec<u8>,
        caption: String,
    },
}

/// Records every call; optionally fails the n-th call (1-based).
#[derive(Default)]
pub struct RecordingBot {
    pub sent: Mutex<Vec<Sent>>,
    fail_on_call: Option<usize>,
    calls: Mutex<usize>,
}

impl RecordingBot {
    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, item: Sent) -> Result<()> {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        if self.fail_on_call == Some(*calls) {
            return Err(DbotError::Bot("Too Many Requests: retry after 5".to_string()));
        }
        self.sent.lock().unwrap().push(item);
        Ok(())
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, _chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Text(text.to_string()))
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_document(
        &self,
        _chat: &Chat,
        filename: &str,
        content: Vec<u8>,
        caption: &str,
    ) -> Result<()> {
        self.record(Sent::Document {
            filename: filename.to_string(),
            content,
            caption: caption.to_string(),
        })
    }

    async fn download_file(&self, _file_id: &str) -> Result<Vec<u8>> {
        Err(DbotError::Bot("not supported in delivery tests".to_string()))
    }
}

pub fn chat() -> Chat {
    Chat {
        id: 42,
        chat_type: "private".to_string(),
    }
}
