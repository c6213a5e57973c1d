//! Framework-independent core of the chat widget.
//!
//! Everything here is plain owned state with explicit transitions, so the
//! same logic drives the Leptos frontend and runs under native unit tests.

pub mod composer;
pub mod config;
pub mod errors;
pub mod models;
pub mod pagination;
pub mod render;
pub mod scroll;
pub mod view;

pub use composer::Composer;
pub use config::WidgetConfig;
pub use errors::FetchFailure;
pub use models::{ChatMessage, ChatPage};
pub use pagination::{HistorySource, PageFetcher, PageQueue, ViewSink};
pub use render::{BubbleKind, TopSlot};
pub use scroll::ScrollObserver;
pub use view::ChatView;
