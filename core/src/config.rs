/// Base URL of the hosted chat history API.
pub const DEFAULT_API_BASE: &str = "https://qa.corider.in";

/// Sender label of messages composed in the widget.
pub const LOCAL_USER: &str = "me";

pub const DEFAULT_FETCH_TIMEOUT_MS: u32 = 15_000;
/// Throttling is opt-in; by default every scroll event at the top advances.
pub const DEFAULT_SCROLL_THROTTLE_MS: u32 = 0;

/// Shown above the history while nothing is loading.
pub const IDLE_PLACEHOLDER: &str = "Scroll up to see new chats...";

/// Runtime settings of one widget instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub api_base: String,
    pub local_user: String,
    /// Zero disables the timeout.
    pub fetch_timeout_ms: u32,
    /// Zero disables throttling: every scroll event at the top advances.
    pub scroll_throttle_ms: u32,
    pub placeholder: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            local_user: LOCAL_USER.to_string(),
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            scroll_throttle_ms: DEFAULT_SCROLL_THROTTLE_MS,
            placeholder: IDLE_PLACEHOLDER.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Defaults, with the API base replaced when an override is given.
    /// Blank overrides are ignored.
    pub fn with_api_base(base: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = base.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        config
    }

    /// URL of history page `page`.
    pub fn history_url(&self, page: u32) -> String {
        format!(
            "{}/assignment/chat?page={page}",
            self.api_base.trim_end_matches('/')
        )
    }
}
