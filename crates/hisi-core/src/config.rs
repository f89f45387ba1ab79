// ── Runtime client configuration ──
//
// Describes *where* the store API lives and which credential to send.
// It never touches disk; the CLI/TUI builds one from a profile.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use hisi_api::{AuthToken, StoreClient, TransportConfig};

use crate::error::CoreError;

/// Configuration for talking to one store backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin (e.g. `http://localhost:5000`); `/api/v1` is appended.
    pub api_url: Url,
    /// Bearer token for admin endpoints. Storefront calls work without it.
    pub token: Option<SecretString>,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            token: None,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    /// Build the HTTP client this configuration describes.
    pub fn build_client(&self) -> Result<StoreClient, CoreError> {
        let transport = TransportConfig::default().with_timeout(self.timeout);
        let token = self.token.clone().map(AuthToken::new);
        Ok(StoreClient::new(self.api_url.as_str(), token, &transport)?)
    }
}
