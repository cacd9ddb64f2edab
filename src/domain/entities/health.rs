//! Backend health probe result.

use serde::Deserialize;

/// Body of the backend's `GET /health` response.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendHealth {
    pub status: String,

    #[serde(default)]
    pub database: Option<String>,
}

impl BackendHealth {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy") || self.status.eq_ignore_ascii_case("ok")
    }
}
