//! Service-account credentials for the spreadsheet service.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Bearer credentials for the spreadsheet service API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Bearer token presented on every request.
    pub token: String,
    /// API base URL (e.g., "https://sheets.example.com").
    pub api_base: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_base: api_base.into(),
        }
    }

    /// Load credentials from a service-account JSON file.
    ///
    /// The file holds `{"token": "...", "api_base": "..."}`. Deployments
    /// conventionally mount it at `/etc/secrets/service_account.json`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Credentials(format!("failed to read '{}': {}", path.display(), e))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            ClientError::Credentials(format!("failed to parse '{}': {}", path.display(), e))
        })
    }
}
