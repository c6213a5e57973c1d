use serde::Deserialize;

/// Query string of `GET /assignment/chat`. A missing page means page 0.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: u32,
}
