//! Pagination cursor and the fetch loop that feeds pages into the view.
//!
//! Page requests are serialized: cursor increments queue their page index and
//! a single drain loop fetches them one at a time, in cursor order. Two
//! overlapping responses can therefore never reorder history.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;

use crate::errors::FetchFailure;
use crate::models::{ChatMessage, ChatPage};

/// Where history pages come from.
pub trait HistorySource {
    fn fetch_page(&self, page: u32) -> impl Future<Output = Result<ChatPage, FetchFailure>>;
}

/// Receiver of fetch outcomes, normally the widget's reactive state.
pub trait ViewSink {
    fn set_loading(&self, loading: bool);

    fn apply_page(&self, page: u32, chats: Vec<ChatMessage>);

    fn report_failure(&self, page: u32, failure: &FetchFailure);

    /// `false` once the widget is torn down; late results are then dropped.
    fn is_mounted(&self) -> bool {
        true
    }
}

/// Cursor plus the queue of pages still to fetch.
///
/// A fresh queue already holds page 0, the load issued on mount.
#[derive(Clone, Debug)]
pub struct PageQueue {
    cursor: u32,
    pending: VecDeque<u32>,
    in_flight: Option<u32>,
}

impl Default for PageQueue {
    fn default() -> Self {
        Self {
            cursor: 0,
            pending: VecDeque::from([0]),
            in_flight: None,
        }
    }
}

impl PageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn in_flight(&self) -> Option<u32> {
        self.in_flight
    }

    /// Moves the cursor one page back in history and queues that page.
    /// There is no end-of-history signal, so this never refuses.
    pub fn advance(&mut self) -> u32 {
        self.cursor = self.cursor.saturating_add(1);
        self.pending.push_back(self.cursor);
        self.cursor
    }

    /// Takes the next queued page, unless a fetch is already running.
    pub fn start_next(&mut self) -> Option<u32> {
        if self.in_flight.is_some() {
            return None;
        }
        let page = self.pending.pop_front()?;
        self.in_flight = Some(page);
        Some(page)
    }

    pub fn finish(&mut self, page: u32) {
        debug_assert_eq!(self.in_flight, Some(page));
        self.in_flight = None;
    }
}

/// Owns a history source and the page queue of one widget instance.
pub struct PageFetcher<S> {
    source: S,
    queue: RefCell<PageQueue>,
}

impl<S: HistorySource> PageFetcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            queue: RefCell::new(PageQueue::new()),
        }
    }

    pub fn cursor(&self) -> u32 {
        self.queue.borrow().cursor()
    }

    pub fn is_busy(&self) -> bool {
        self.queue.borrow().in_flight().is_some()
    }

    pub fn advance(&self) -> u32 {
        let page = self.queue.borrow_mut().advance();
        log::debug!("pagination cursor advanced to {page}");
        page
    }

    /// Fetches queued pages until the queue is empty.
    ///
    /// Returns at once if another drain is already running; that one picks up
    /// anything queued meanwhile. The loading flag is raised around each fetch
    /// and lowered on every exit path, including unwinding.
    pub async fn drain<V: ViewSink>(&self, sink: &V) {
        loop {
            if !sink.is_mounted() {
                return;
            }
            let Some(page) = self.queue.borrow_mut().start_next() else {
                return;
            };
            let _in_flight = InFlight {
                queue: &self.queue,
                page,
            };

            sink.set_loading(true);
            let _loading = LoadingGuard(sink);

            log::debug!("fetching history page {page}");
            let result = self.source.fetch_page(page).await;

            if !sink.is_mounted() {
                log::debug!("widget unmounted; discarding history page {page}");
                return;
            }
            match result {
                Ok(body) => {
                    log::debug!("history page {page}: {} message(s)", body.chats.len());
                    sink.apply_page(page, body.chats);
                }
                Err(failure) => {
                    log::error!("history page {page} failed: {failure}");
                    sink.report_failure(page, &failure);
                }
            }
        }
    }
}

struct InFlight<'a> {
    queue: &'a RefCell<PageQueue>,
    page: u32,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.queue.borrow_mut().finish(self.page);
    }
}

struct LoadingGuard<'a, V: ViewSink>(&'a V);

impl<V: ViewSink> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        self.0.set_loading(false);
    }
}
