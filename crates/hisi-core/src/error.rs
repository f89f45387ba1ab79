// ── Core error types ──
//
// User-facing errors from hisi-core. Views never see raw HTTP plumbing;
// the `From<hisi_api::Error>` impl translates transport-layer errors into
// the variants renderers show in notices.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach the store API: {reason}")]
    ConnectionFailed { reason: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Not signed in: {message}")]
    Unauthorized { message: String },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity} not found: {identifier}")]
    NotFound { entity: String, identifier: String },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    /// A mutation was started while an identical one was still in flight.
    #[error("{operation} already in progress")]
    Busy { operation: &'static str },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    /// Non-success response. `message` is the backend's own text when it
    /// sent one, so it can go straight into an alert.
    #[error("{message}")]
    Api { message: String, status: Option<u16> },

    #[error("Unexpected response from the store API: {message}")]
    Decode { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            identifier: identifier.into(),
        }
    }

    /// Whether the error stems from missing or rejected credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<hisi_api::Error> for CoreError {
    fn from(err: hisi_api::Error) -> Self {
        match err {
            hisi_api::Error::MissingToken => CoreError::Unauthorized {
                message: "no bearer token configured (run `hisi config set-token`)".into(),
            },
            hisi_api::Error::Unauthorized { message } => CoreError::Unauthorized { message },
            hisi_api::Error::InvalidToken(reason) => CoreError::Config {
                message: format!("Invalid bearer token: {reason}"),
            },
            hisi_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            hisi_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            hisi_api::Error::ClientBuild(reason) => CoreError::Config { message: reason },
            hisi_api::Error::Api {
                status: 403,
                message,
                ..
            } => CoreError::Unauthorized { message },
            hisi_api::Error::Api {
                status, message, ..
            } => CoreError::Api {
                message,
                status: Some(status),
            },
            hisi_api::Error::Deserialization { message, body: _ } => CoreError::Decode { message },
            hisi_api::Error::EmptyEnvelope => CoreError::Decode {
                message: "response carried no data".into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_is_surfaced_verbatim() {
        let err = CoreError::from(hisi_api::Error::Api {
            status: 422,
            message: "Status must be one of pending, shipped".into(),
            errors: None,
        });
        assert_eq!(err.to_string(), "Status must be one of pending, shipped");
    }

    #[test]
    fn missing_and_forbidden_are_unauthorized() {
        assert!(CoreError::from(hisi_api::Error::MissingToken).is_unauthorized());
        let forbidden = CoreError::from(hisi_api::Error::Api {
            status: 403,
            message: "Admin only".into(),
            errors: None,
        });
        assert!(forbidden.is_unauthorized());
    }
}
