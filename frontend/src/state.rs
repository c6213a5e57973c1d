use chat_widget_core::{ChatMessage, ChatView, Composer, FetchFailure, ViewSink, WidgetConfig};
use chrono::Utc;
use leptos::prelude::*;

/// Reactive state of one `ChatAppHome`, provided via Leptos context.
///
/// All mutation goes through the `ChatView` / `Composer` transitions.
#[derive(Clone, Copy)]
pub struct WidgetState {
    pub view: RwSignal<ChatView>,
    pub composer: RwSignal<Composer>,
    pub config: StoredValue<WidgetConfig>,
}

impl WidgetState {
    /// Create a new `WidgetState` and provide it in the current Leptos context.
    pub fn provide(config: WidgetConfig) -> Self {
        let state = Self {
            view: RwSignal::new(ChatView::new()),
            composer: RwSignal::new(Composer::new()),
            config: StoredValue::new(config),
        };
        provide_context(state);
        state
    }

    pub fn local_user(&self) -> String {
        self.config.with_value(|c| c.local_user.clone())
    }

    pub fn sink(&self) -> SignalSink {
        SignalSink { view: self.view }
    }

    /// Runs `follow` after every local append, and only then.
    ///
    /// The effect tracks a memo of the append counter, not the view itself,
    /// so loading flips and page merges never re-trigger it.
    pub fn on_local_append(&self, follow: impl Fn() + 'static) {
        let view = self.view;
        let appends = Memo::new(move |_| view.with(|v| v.local_appends()));

        Effect::new(move |_| {
            if appends.get() > 0 {
                follow();
            }
        });
    }

    /// Appends the composed message locally. Nothing is sent anywhere.
    pub fn submit_composer(&self) {
        let local_user = self.local_user();
        let message: Option<ChatMessage> = self
            .composer
            .try_update(|c| c.submit(&local_user, Utc::now()))
            .flatten();

        if let Some(message) = message {
            log::debug!("appending local message ({} chars)", message.message.len());
            self.view.update(|v| v.append_local_message(message));
        }
    }
}

/// Feeds fetch outcomes into the view signal.
///
/// Writes use `try_update`, so a sink outliving its component is inert.
#[derive(Clone, Copy)]
pub struct SignalSink {
    view: RwSignal<ChatView>,
}

impl ViewSink for SignalSink {
    fn set_loading(&self, loading: bool) {
        self.view.try_update(|v| v.set_loading(loading));
    }

    fn apply_page(&self, page: u32, chats: Vec<ChatMessage>) {
        self.view.try_update(|v| v.apply_page(page, chats));
    }

    fn report_failure(&self, _page: u32, failure: &FetchFailure) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(&failure.alert_text()) {
                log::error!("Failed to show alert: {e:?}");
            }
        }
    }

    fn is_mounted(&self) -> bool {
        self.view.try_with_untracked(|_| ()).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use any_spawner::Executor;
    use std::cell::Cell;
    use std::rc::Rc;
    use tokio::task::LocalSet;

    #[tokio::test]
    async fn page_merges_do_not_refollow_the_bottom() {
        _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        LocalSet::new()
            .run_until(async {
                let state = WidgetState::provide(WidgetConfig::default());
                let sink = state.sink();
                let follows = Rc::new(Cell::new(0));
                let counter = Rc::clone(&follows);
                state.on_local_append(move || counter.set(counter.get() + 1));

                sink.apply_page(0, vec![ChatMessage::new("a", "hi", "T1")]);
                Executor::tick().await;
                assert_eq!(follows.get(), 0);

                state.composer.update(|c| c.set_buffer("hello"));
                state.submit_composer();
                Executor::tick().await;
                assert_eq!(follows.get(), 1);

                sink.set_loading(true);
                Executor::tick().await;
                sink.apply_page(1, vec![ChatMessage::new("b", "yo", "T0")]);
                Executor::tick().await;
                sink.set_loading(false);
                Executor::tick().await;
                assert_eq!(follows.get(), 1);

                let senders: Vec<_> =
                    state.view.with(|v| v.messages().iter().map(|m| m.sender.clone()).collect());
                assert_eq!(senders, ["b", "a", "me"]);
                assert_eq!(state.composer.with(|c| c.buffer().to_string()), "");
            })
            .await;
    }

    #[test]
    fn sink_is_inert_after_owner_cleanup() {
        let owner = Owner::new();
        let (state, sink) = owner.with(|| {
            let state = WidgetState::provide(WidgetConfig::default());
            (state, state.sink())
        });
        assert!(sink.is_mounted());

        owner.cleanup();

        assert!(!sink.is_mounted());
        sink.set_loading(true);
        sink.apply_page(0, vec![ChatMessage::new("a", "hi", "T1")]);
        assert!(state.view.try_with_untracked(|v| v.len()).is_none());
    }
}
