use chat_widget_core::ChatPage;

use crate::store::fixture_store::FixtureStore;

/// Slices the stored history into pages counted back from the newest message.
///
/// Page 0 holds the newest `page_size` messages, page 1 the ones before them,
/// and so on. Each page is in chronological order. Pages past the start of
/// history are empty; there is no end-of-history marker.
#[derive(Clone)]
pub struct HistoryService {
    store: FixtureStore,
    page_size: usize,
}

impl HistoryService {
    pub fn new(store: FixtureStore, page_size: usize) -> Self {
        Self { store, page_size: page_size.max(1) }
    }

    pub fn page(&self, page: u32) -> ChatPage {
        let total = self.store.len();
        let skip = (page as usize).saturating_mul(self.page_size);
        if skip >= total {
            return ChatPage::default();
        }
        let end = total - skip;
        let start = end.saturating_sub(self.page_size);
        ChatPage { chats: self.store.messages()[start..end].to_vec() }
    }
}
