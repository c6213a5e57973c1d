use thiserror::Error;

/// Errors of the development history server. All of them are startup
/// failures; once serving, every request is answered from memory.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Configuration ────────────────────────────────────────────────────────
    #[error("Environment variable '{name}' has invalid value '{value}'")]
    InvalidSetting { name: String, value: String },

    #[error("'{name}' must be greater than zero")]
    ZeroSetting { name: String },

    // ── Fixture loading ──────────────────────────────────────────────────────
    #[error("Failed to read fixture '{path}': {source}")]
    FixtureRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Fixture '{path}' is not a chat page: {source}")]
    FixtureParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl AppError {
    pub fn invalid_setting(name: &str, value: impl Into<String>) -> Self {
        AppError::InvalidSetting { name: name.to_string(), value: value.into() }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, AppError::InvalidSetting { .. } | AppError::ZeroSetting { .. })
    }
}
