use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::FetchFailure;

/// One entry of the chat history, exactly as the history endpoint returns it.
///
/// There is no identifier: position in the conversation is the only ordering
/// signal, and `time` is kept as the server sent it.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: String,
    pub message: String,
    pub time: String,
}

impl ChatMessage {
    pub fn new(
        sender: impl Into<String>,
        message: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            message: message.into(),
            time: time.into(),
        }
    }

    /// Builds a locally composed message stamped with `now`.
    ///
    /// The timestamp uses millisecond precision and a `Z` suffix, the same
    /// shape browsers produce for `Date.prototype.toISOString`.
    pub fn outgoing(sender: &str, message: String, now: DateTime<Utc>) -> Self {
        Self {
            sender: sender.to_string(),
            message,
            time: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn is_from(&self, sender: &str) -> bool {
        self.sender == sender
    }
}

/// Body of `GET /assignment/chat?page={n}`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChatPage {
    pub chats: Vec<ChatMessage>,
}

impl ChatPage {
    /// Decodes a response body. Any shape mismatch is a fetch failure.
    pub fn from_json(body: &str) -> Result<Self, FetchFailure> {
        serde_json::from_str(body).map_err(|e| FetchFailure::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn decodes_history_page() {
        let page = ChatPage::from_json(
            r#"{"chats":[{"sender":"a","message":"hi","time":"T1"}],"from":"IGI Airport"}"#,
        )
        .unwrap();
        assert_eq!(page.chats, vec![ChatMessage::new("a", "hi", "T1")]);
    }

    #[test]
    fn missing_chats_field_is_a_decode_failure() {
        let err = ChatPage::from_json(r#"{"messages":[]}"#).unwrap_err();
        assert!(matches!(err, FetchFailure::Decode(_)));
        assert!(err.to_string().contains("chats"));
    }

    #[test]
    fn outgoing_message_uses_iso_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let msg = ChatMessage::outgoing("me", "hello ".to_string(), now);
        assert_eq!(msg.time, "2024-03-09T14:05:07.000Z");
        assert_eq!(msg.message, "hello ");
        assert!(msg.is_from("me"));
    }
}
