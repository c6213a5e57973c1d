use std::path::Path;
use std::sync::Arc;

use chat_widget_core::{ChatMessage, ChatPage};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use tracing::error;

use crate::errors::AppError;

const SYNTHETIC_SENDERS: [&str; 4] = ["me", "Priya", "Rahul", "Ananya"];

/// The complete chat history served by the dev server, oldest first.
#[derive(Clone)]
pub struct FixtureStore {
    messages: Arc<Vec<ChatMessage>>,
}

impl FixtureStore {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self { messages: Arc::new(messages) }
    }

    /// Reads a JSON file shaped like a history page.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            error!("Failed to read fixture {}: {e}", path.display());
            AppError::FixtureRead { path: display.clone(), source: e }
        })?;
        let page: ChatPage = serde_json::from_str(&raw)
            .map_err(|e| AppError::FixtureParse { path: display, source: e })?;
        Ok(Self::new(page.chats))
    }

    /// `count` messages a minute apart ending at `newest`, senders rotating
    /// through a small cast that includes the widget's local user.
    pub fn synthetic(count: usize, newest: DateTime<Utc>) -> Self {
        let messages = (0..count)
            .map(|i| {
                let minutes_back = (count - 1 - i) as i64;
                let time = newest - Duration::minutes(minutes_back);
                ChatMessage::new(
                    SYNTHETIC_SENDERS[i % SYNTHETIC_SENDERS.len()],
                    format!("Message #{} of the trip chat", i + 1),
                    time.to_rfc3339_opts(SecondsFormat::Millis, true),
                )
            })
            .collect();
        Self::new(messages)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn synthetic_history_is_chronological() {
        let newest = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let store = FixtureStore::synthetic(3, newest);

        let times: Vec<_> = store.messages().iter().map(|m| m.time.as_str()).collect();
        assert_eq!(
            times,
            [
                "2024-05-01T11:58:00.000Z",
                "2024-05-01T11:59:00.000Z",
                "2024-05-01T12:00:00.000Z",
            ]
        );
        assert_eq!(store.messages()[0].sender, "me");
    }

    #[test]
    fn load_reads_page_shaped_file() {
        let path = std::env::temp_dir().join(format!("chat-fixture-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"chats":[{"sender":"a","message":"hi","time":"T1"}]}"#,
        )
        .unwrap();

        let store = FixtureStore::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(store.messages(), &[ChatMessage::new("a", "hi", "T1")]);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = FixtureStore::load(Path::new("/nonexistent/chat.json")).err().unwrap();
        assert!(matches!(err, AppError::FixtureRead { .. }));
    }
}
