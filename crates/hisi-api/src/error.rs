use thiserror::Error;

/// Top-level error type for the `hisi-api` crate.
///
/// Covers every failure mode of the REST surface: credentials, transport,
/// non-success HTTP statuses, and payload decoding. `hisi-core` maps these
/// into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// A privileged endpoint was called without a bearer token.
    #[error("No bearer token configured for a privileged request")]
    MissingToken,

    /// The backend rejected the bearer token (HTTP 401).
    #[error("Bearer token rejected: {message}")]
    Unauthorized { message: String },

    /// The token cannot be encoded as an HTTP header value.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    // ── API ─────────────────────────────────────────────────────────
    /// Non-success response. `message` comes from the body's
    /// `message`/`error` field when the backend provides one.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        status: u16,
        message: String,
        errors: Option<serde_json::Value>,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// The envelope decoded but carried no `data` payload.
    #[error("Response envelope carried no data")]
    EmptyEnvelope,
}

impl Error {
    /// Returns `true` if the backend refused the credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. } | Self::MissingToken)
            || matches!(self, Self::Api { status: 403, .. })
    }

    /// Returns `true` for connection-level failures.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api { status: 404, .. } => true,
            _ => false,
        }
    }

    /// HTTP status, if the error came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Unauthorized { .. } => Some(401),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_status_predicates() {
        let not_found = Error::Api {
            status: 404,
            message: "Product not found".into(),
            errors: None,
        };
        assert!(not_found.is_not_found());
        assert!(!not_found.is_transient());
        assert_eq!(not_found.status(), Some(404));

        let server = Error::Api {
            status: 503,
            message: "unavailable".into(),
            errors: None,
        };
        assert!(server.is_transient());
    }

    #[test]
    fn forbidden_counts_as_unauthorized() {
        let err = Error::Api {
            status: 403,
            message: "Forbidden".into(),
            errors: None,
        };
        assert!(err.is_unauthorized());
        assert!(Error::MissingToken.is_unauthorized());
    }
}
