mod api;
mod components;
mod scroll;
mod state;

use chat_widget_core::WidgetConfig;
use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::chat::ChatAppHome;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    // wasm has no process environment; the API base is fixed at build time.
    let config = WidgetConfig::with_api_base(option_env!("CHAT_API_BASE"));
    log::info!("chat history API: {}", config.api_base);

    view! { <ChatAppHome config=config /> }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
