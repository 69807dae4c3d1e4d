use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies which side of the conversation produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

/// Represents a single message within the active conversation session.
///
/// Messages are created by the session actor on each user submission and each
/// produced reply, are immutable once recorded, and live only as long as the
/// session itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The unique identifier for the message (UUID v4).
    pub id: Uuid,
    /// The text content of the message.
    pub text: String,
    /// The role of the message sender.
    pub sender: Sender,
    /// UTC timestamp of when the message was recorded.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Creates a new message with a fresh id and the current timestamp.
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }
}

/// The outcome of a single remote-generation attempt.
///
/// Never partially filled: on success `text` is usable reply content; on
/// failure `text` holds a user-safe fallback message and `error_detail` holds
/// a diagnostic string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub success: bool,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl GenerationResult {
    /// A successful attempt carrying usable reply text.
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            success: true,
            text: text.into(),
            error_detail: None,
        }
    }

    /// A failed attempt carrying a user-safe message and a diagnostic detail.
    pub fn failed(text: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            success: false,
            text: text.into(),
            error_detail: Some(detail.into()),
        }
    }
}

/// The final outcome of one orchestrated turn.
///
/// `remote_error_detail` is populated when the remote path was attempted and
/// failed; the user still receives a substantive `reply_text` from the local
/// path, and the detail feeds a separate, non-blocking advisory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineReply {
    pub reply_text: String,
    pub used_remote: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_error_detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::new(Sender::User, "first");
        let b = Message::new(Sender::User, "first");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_generation_result_is_never_partial() {
        let ok = GenerationResult::ok("reply");
        assert!(ok.success);
        assert!(ok.error_detail.is_none());

        let failed = GenerationResult::failed("fallback", "boom");
        assert!(!failed.success);
        assert_eq!(failed.text, "fallback");
        assert_eq!(failed.error_detail.as_deref(), Some("boom"));
    }

    #[test]
    fn test_message_serialization_round_trip() {
        let message = Message::new(Sender::Bot, "hello");
        let json = serde_json::to_string(&message).unwrap();
        let parsed: Message = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.id, message.id);
        assert_eq!(parsed.text, "hello");
        assert_eq!(parsed.sender, Sender::Bot);
    }
}
