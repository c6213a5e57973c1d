use chrono::{DateTime, Utc};

use crate::models::ChatMessage;

/// Single-line text buffer behind the message input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Composer {
    buffer: String,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Turns the buffer into an outgoing message and clears it.
    ///
    /// Whitespace-only input yields `None` and the buffer is left as typed.
    /// The message keeps the buffer untrimmed.
    pub fn submit(&mut self, local_user: &str, now: DateTime<Utc>) -> Option<ChatMessage> {
        if self.buffer.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.buffer);
        Some(ChatMessage::outgoing(local_user, text, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ChatView;

    #[test]
    fn submit_builds_local_message_and_clears_buffer() {
        let now = Utc::now();
        let mut composer = Composer::new();
        composer.set_buffer("hello");

        let message = composer.submit("me", now).unwrap();
        assert_eq!(message.sender, "me");
        assert_eq!(message.message, "hello");
        assert_eq!(composer.buffer(), "");
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut view = ChatView::new();
        let mut composer = Composer::new();

        for blank in ["", "   ", "\t\n"] {
            composer.set_buffer(blank);
            assert!(composer.submit("me", Utc::now()).is_none());
            assert_eq!(composer.buffer(), blank);
        }
        assert!(view.is_empty());

        composer.set_buffer("  padded  ");
        if let Some(message) = composer.submit("me", Utc::now()) {
            view.append_local_message(message);
        }
        assert_eq!(view.len(), 1);
        assert_eq!(view.messages()[0].message, "  padded  ");
    }
}
