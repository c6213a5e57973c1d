use thiserror::Error;

/// The single failure kind of a history fetch.
///
/// Variants only record the cause; callers treat them alike: report once,
/// leave the conversation untouched, never retry.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Decode(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u32),
}

impl FetchFailure {
    /// Text shown in the blocking alert.
    pub fn alert_text(&self) -> String {
        format!("Error fetching chat data: {self}")
    }
}
