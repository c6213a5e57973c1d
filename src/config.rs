use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::AppError;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_FIXTURE_SIZE: usize = 120;

/// Settings of the development history server, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// JSON file shaped like a history page (`{"chats": [...]}`), oldest first.
    /// Without one, a synthetic history of `fixture_size` messages is served.
    pub fixture_path: Option<PathBuf>,
    pub page_size: usize,
    pub fixture_size: usize,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let config = Self {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            fixture_path: lookup("CHAT_FIXTURE_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            page_size: parse_or(&lookup, "CHAT_PAGE_SIZE", DEFAULT_PAGE_SIZE)?,
            fixture_size: parse_or(&lookup, "CHAT_FIXTURE_SIZE", DEFAULT_FIXTURE_SIZE)?,
        };

        if config.page_size == 0 {
            return Err(AppError::ZeroSetting { name: "CHAT_PAGE_SIZE".to_string() });
        }
        Ok(config)
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, AppError> {
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_setting(name, raw)),
    }
}
