use leptos::prelude::*;

/// Spinner shown above the history while a page is being fetched.
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader" role="status" aria-label="Loading older messages">
            <div class="spinner"></div>
        </div>
    }
}
