use std::rc::Rc;

use chat_widget_core::{BubbleKind, ChatMessage, PageFetcher, TopSlot, WidgetConfig};
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpHistorySource;
use crate::components::header::TripHeaderBar;
use crate::components::loader::Loader;
use crate::scroll::watch_top;
use crate::state::{SignalSink, WidgetState};

const AVATAR_URL: &str = "https://cdn.builder.io/api/v1/image/assets/TEMP/e95e0d38f30f45725c7954b71025331d04db0901e4c2f91229d79a524688478f?apiKey=ad0536c147a54b0ab52575a2dda9bd51&";

type Fetcher = Rc<PageFetcher<HttpHistorySource>>;

/// Fetches whatever pages are queued. A drain already running absorbs the call.
fn pump(fetcher: Fetcher, sink: SignalSink) {
    spawn_local(async move {
        fetcher.drain(&sink).await;
    });
}

/// The chat screen: trip header, scrollable history, composer.
///
/// Conversation, cursor and scroll listener live exactly as long as the
/// component does.
#[component]
pub fn ChatAppHome(config: WidgetConfig) -> impl IntoView {
    let state = WidgetState::provide(config.clone());
    let list_ref = NodeRef::<Div>::new();

    // Page 0 is queued from the start.
    let fetcher: Fetcher = Rc::new(PageFetcher::new(HttpHistorySource::new(config.clone())));
    let sink = state.sink();
    pump(Rc::clone(&fetcher), sink);

    watch_top(list_ref, config.scroll_throttle_ms, move || {
        fetcher.advance();
        pump(Rc::clone(&fetcher), sink);
    });

    // Follow local appends to the bottom; page merges leave the viewport alone.
    state.on_local_append(move || {
        if let Some(list) = list_ref.get_untracked() {
            list.set_scroll_top(list.scroll_height());
        }
    });

    let placeholder = config.placeholder;
    let local_user = config.local_user;

    view! {
        <div class="chat-app">
            <TripHeaderBar />

            <div class="messages-container" node_ref=list_ref>
                {move || match state.view.with(TopSlot::for_view) {
                    TopSlot::Loader => view! { <Loader /> }.into_any(),
                    TopSlot::Placeholder => view! {
                        <div class="idle-placeholder">{placeholder.clone()}</div>
                    }.into_any(),
                }}

                {move || {
                    state.view.with(|v| {
                        v.messages()
                            .iter()
                            .map(|msg| {
                                let kind = BubbleKind::of(msg, &local_user);
                                view! { <MessageBubble message=msg.clone() kind=kind /> }
                            })
                            .collect_view()
                    })
                }}
            </div>

            <ChatInput />
        </div>
    }
}

/// A single chat message bubble.
#[component]
fn MessageBubble(message: ChatMessage, kind: BubbleKind) -> impl IntoView {
    let ChatMessage { sender, message, time } = message;
    let avatar = kind.shows_avatar().then(|| {
        view! { <img class="avatar" loading="lazy" src=AVATAR_URL alt=sender /> }
    });

    view! {
        <div class={kind.row_class()} title=time>
            {avatar}
            <div class={kind.bubble_class()}>
                <div class="bubble-text">{message}</div>
            </div>
        </div>
    }
}

/// Single-line composer. Submitting only appends locally.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<WidgetState>();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.submit_composer();
    };

    view! {
        <form class="input-area" on:submit=on_submit>
            <input
                type="text"
                placeholder="Type your message here..."
                prop:value=move || state.composer.with(|c| c.buffer().to_string())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    state.composer.update(|c| c.set_buffer(text));
                }
            />
            <button type="submit" class="send-btn">"Send"</button>
        </form>
    }
}
