//! Recording Bot and message builders shared by the handler tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cashu_core::{Bot, Chat, DbotError, DocumentRef, Message, MessageDirection, Result, User};
use chrono::Utc;

/// One outgoing call as seen by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text(String),
    Document {
        filename: String,
        content: Vec<u8>,
        caption: String,
    },
}

/// Records sends and downloads; serves downloads from an in-memory file table.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    downloads: Mutex<Vec<String>>,
    files: HashMap<String, Vec<u8>>,
    fail_sends: bool,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_file(file_id: &str, content: Vec<u8>) -> Arc<Self> {
        let mut files = HashMap::new();
        files.insert(file_id.to_string(), content);
        Arc::new(Self {
            files,
            ..Self::default()
        })
    }

    /// Every send fails, as if the chat were unreachable.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail_sends: true,
            ..Self::default()
        })
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text(t) => Some(t),
                Sent::Document { .. } => None,
            })
            .collect()
    }

    pub fn downloads(&self) -> Vec<String> {
        self.downloads.lock().unwrap().clone()
    }

    fn record(&self, item: Sent) -> Result<()> {
        if self.fail_sends {
            return Err(DbotError::Bot("Forbidden: bot was blocked by the user".to_string()));
        }
        self.sent.lock().unwrap().push(item);
        Ok(())
    }
}

#[async_trait]
impl Bot for MockBot {
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

    async fn download_file(&self, file_id: &str) -> Result<Vec<u8>> {
        self.downloads.lock().unwrap().push(file_id.to_string());
        self.files
            .get(file_id)
            .cloned()
            .ok_or_else(|| DbotError::Bot(format!("Bad Request: invalid file_id {}", file_id)))
    }
}

pub fn text_message(content: &str) -> Message {
    Message {
        id: "msg-1".to_string(),
        user: User {
            id: 7,
            username: Some("satoshi".to_string()),
            first_name: Some("Satoshi".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 123,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
        document: None,
    }
}

pub fn document_message(file_id: &str, file_name: Option<&str>, file_size: u64) -> Message {
    Message {
        message_type: "document".to_string(),
        document: Some(DocumentRef {
            file_id: file_id.to_string(),
            file_name: file_name.map(str::to_string),
            file_size,
        }),
        ..text_message("")
    }
}
