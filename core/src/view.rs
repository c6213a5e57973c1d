use crate::models::ChatMessage;

/// Owned view-model of the widget: the conversation plus the loading flag.
///
/// The conversation is ordered oldest to newest by position. It only changes
/// through the transitions below; nothing deduplicates or reconciles entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatView {
    messages: Vec<ChatMessage>,
    loading: bool,
    local_appends: u64,
}

impl ChatView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Bumped on every local append and nothing else. The renderer keys its
    /// scroll-to-bottom on this, so page merges never move the viewport.
    pub fn local_appends(&self) -> u64 {
        self.local_appends
    }

    /// Page 0: the fetched list replaces whatever is shown.
    pub fn apply_initial_page(&mut self, chats: Vec<ChatMessage>) {
        self.messages = chats;
    }

    /// Older page: fetched entries go in front, existing order kept.
    pub fn prepend_older_page(&mut self, chats: Vec<ChatMessage>) {
        self.messages.splice(0..0, chats);
    }

    /// Routes a fetched page to the matching transition.
    pub fn apply_page(&mut self, page: u32, chats: Vec<ChatMessage>) {
        if page == 0 {
            self.apply_initial_page(chats);
        } else {
            self.prepend_older_page(chats);
        }
    }

    pub fn append_local_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.local_appends += 1;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}
