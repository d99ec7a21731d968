//! Delivery planning: classify an outgoing payload by length and build the ordered steps
//! a transport must perform.
//!
//! | Length (code points)                         | Mode    | Steps                      |
//! |----------------------------------------------|---------|----------------------------|
//! | 0                                            | Prompt  | one [`DeliveryStep::Prompt`] |
//! | `1..=max_message_length`                     | Direct  | one [`DeliveryStep::DirectMessage`] |
//! | `max_message_length+1..=document_threshold`  | Chunked | `ceil(len / chunk_size)` [`DeliveryStep::ChunkMessage`] |
//! | `> document_threshold`                       | File    | one [`DeliveryStep::FileAttachment`] |

use crate::config::DeliveryConfig;

/// Text to deliver plus the filename used if it ends up as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingPayload {
    text: String,
    suggested_filename: String,
}

impl OutgoingPayload {
    pub fn new(text: impl Into<String>, suggested_filename: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            suggested_filename: suggested_filename.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn suggested_filename(&self) -> &str {
        &self.suggested_filename
    }

    /// Length in Unicode code points.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// One transport operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStep {
    /// Asks the user for input; produced instead of an empty message.
    Prompt { text: String },
    DirectMessage { text: String },
    /// `index` is 1-based; `text` is the raw slice without header.
    ChunkMessage {
        index: usize,
        total_count: usize,
        text: String,
    },
    FileAttachment {
        filename: String,
        content: Vec<u8>,
        caption: String,
    },
}

impl DeliveryStep {
    /// The message text a transport sends for this step. For attachments, the caption.
    pub fn render(&self) -> String {
        match self {
            DeliveryStep::Prompt { text } | DeliveryStep::DirectMessage { text } => text.clone(),
            DeliveryStep::ChunkMessage {
                index,
                total_count,
                text,
            } => format!("{}{}", chunk_header(*index, *total_count), text),
            DeliveryStep::FileAttachment { caption, .. } => caption.clone(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DeliveryStep::Prompt { .. } => "prompt",
            DeliveryStep::DirectMessage { .. } => "direct",
            DeliveryStep::ChunkMessage { .. } => "chunk",
            DeliveryStep::FileAttachment { .. } => "file",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    Prompt,
    Direct,
    Chunked,
    File,
}

impl std::fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DeliveryMode::Prompt => "prompt",
            DeliveryMode::Direct => "direct",
            DeliveryMode::Chunked => "chunked",
            DeliveryMode::File => "file",
        };
        f.write_str(name)
    }
}

/// Ordered steps for one payload. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryPlan {
    mode: DeliveryMode,
    steps: Vec<DeliveryStep>,
}

impl DeliveryPlan {
    pub fn mode(&self) -> DeliveryMode {
        self.mode
    }

    pub fn steps(&self) -> &[DeliveryStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Header prepended to chunk `index` of `total`. The first chunk announces a long message.
pub fn chunk_header(index: usize, total: usize) -> String {
    if index == 1 {
        format!("📄 Long message (part {}/{}):\n\n", index, total)
    } else {
        format!("📄 Part {}/{}:\n\n", index, total)
    }
}

/// Builds the delivery plan for `payload`. Pure and deterministic.
pub fn plan_delivery(config: &DeliveryConfig, payload: &OutgoingPayload) -> DeliveryPlan {
    let len = payload.char_len();

    if len == 0 {
        return DeliveryPlan {
            mode: DeliveryMode::Prompt,
            steps: vec![DeliveryStep::Prompt {
                text: config.empty_prompt.clone(),
            }],
        };
    }

    if len <= config.max_message_length {
        return DeliveryPlan {
            mode: DeliveryMode::Direct,
            steps: vec![DeliveryStep::DirectMessage {
                text: payload.text().to_string(),
            }],
        };
    }

    if len <= config.document_threshold {
        let slices = split_chars(payload.text(), config.chunk_size);
        let total_count = slices.len();
        let steps = slices
            .into_iter()
            .enumerate()
            .map(|(i, slice)| DeliveryStep::ChunkMessage {
                index: i + 1,
                total_count,
                text: slice.to_string(),
            })
            .collect();
        return DeliveryPlan {
            mode: DeliveryMode::Chunked,
            steps,
        };
    }

    let filename = payload.suggested_filename().to_string();
    let caption = format!("📎 {} ({} characters)", filename, len);
    DeliveryPlan {
        mode: DeliveryMode::File,
        steps: vec![DeliveryStep::FileAttachment {
            filename,
            content: payload.text().as_bytes().to_vec(),
            caption,
        }],
    }
}

/// Splits `text` into contiguous slices of at most `size` code points.
fn split_chars(text: &str, size: usize) -> Vec<&str> {
    let size = size.max(1);
    let mut slices = Vec::with_capacity(text.len() / size + 1);
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == size {
            slices.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        slices.push(&text[start..]);
    }
    slices
}
