//! Mail payload extraction
//!
//! Flattens a parsed RFC 5322 message into the plain text the model is
//! trained on. Headers are dropped; multipart bodies are joined part by
//! part with newlines.

use mail_parser::{Message, MessageParser, MessagePart, PartType};
use std::path::Path;
use tokio::fs;

use crate::error::{Result, SpamError};

/// Parse a raw message and return its body as a single string
pub fn read_payload(raw: &[u8]) -> Result<String> {
    let message = MessageParser::default()
        .parse(raw)
        .ok_or_else(|| SpamError::Parse("Failed to parse mail message".to_string()))?;

    Ok(message_payload(&message))
}

/// Read a mail file and return its body as a single string
pub async fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let raw = fs::read(path).await?;
    read_payload(&raw).map_err(|e| match e {
        SpamError::Parse(msg) => SpamError::Parse(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

fn message_payload(message: &Message<'_>) -> String {
    message
        .parts
        .first()
        .map(|root| part_payload(message, root))
        .unwrap_or_default()
}

fn part_payload(message: &Message<'_>, part: &MessagePart<'_>) -> String {
    match &part.body {
        PartType::Text(text) | PartType::Html(text) => text.to_string(),
        PartType::Binary(data) | PartType::InlineBinary(data) => {
            String::from_utf8_lossy(data).into_owned()
        }
        PartType::Message(nested) => message_payload(nested),
        PartType::Multipart(ids) => ids
            .iter()
            .filter_map(|&id| message.parts.get(id as usize))
            .map(|sub| part_payload(message, sub))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
