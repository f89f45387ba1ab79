//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors with
//! actionable help text and distinct exit codes.

use miette::Diagnostic;
use thiserror::Error;

use hisi_config::ConfigError;
use hisi_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the store API")]
    #[diagnostic(
        code(hisi::connection_failed),
        help(
            "Check that the backend is running and the URL is right.\n\
             {reason}\n\
             Override the URL with --api-url or HISI_API_URL."
        )
    )]
    ConnectionFailed { reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(hisi::timeout),
        help("Increase the timeout with --timeout or check backend responsiveness.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────
    #[error("Not authorized: {message}")]
    #[diagnostic(
        code(hisi::unauthorized),
        help(
            "Admin commands need a bearer token.\n\
             Store one with: hisi config set-token\n\
             Or set the HISI_TOKEN environment variable."
        )
    )]
    Unauthorized { message: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(hisi::not_found),
        help("Run: hisi {list_command} to see what exists")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    #[error("{message}")]
    #[diagnostic(code(hisi::conflict))]
    Conflict { message: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(hisi::api_error))]
    Api { message: String, status: Option<u16> },

    #[error("Unexpected response from the store API: {message}")]
    #[diagnostic(
        code(hisi::decode),
        help("The backend answered with a shape this client does not understand. Run with -vv for details.")
    )]
    Decode { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(hisi::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(hisi::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: hisi config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(hisi::config),
        help("Inspect the file with: hisi config show")
    )]
    Config { message: String },

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(hisi::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(hisi::json), help("Check the JSON file contents and try again."))]
    Json(#[from] serde_json::Error),

    #[error("YAML rendering failed: {0}")]
    #[diagnostic(code(hisi::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::Unauthorized { .. } => exit_code::AUTH,
            Self::NotFound { .. }
            | Self::Api {
                status: Some(404), ..
            } => exit_code::NOT_FOUND,
            Self::Conflict { .. }
            | Self::Api {
                status: Some(409), ..
            } => exit_code::CONFLICT,
            Self::Validation { .. }
            | Self::NonInteractiveRequiresYes { .. }
            | Self::ProfileNotFound { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

/// The list command that shows entities of this kind.
fn list_command_for(entity: &str) -> String {
    match entity.to_ascii_lowercase().as_str() {
        "product" => "products list",
        "order" => "orders list",
        "customer" => "customers list",
        "blog post" => "blog list",
        "media" => "media list",
        "inquiry" => "inquiries list",
        "conversation" => "messages conversations",
        "collection" => "collections list",
        "review" => "reviews queue --status all",
        _ => "--help",
    }
    .to_owned()
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { reason } => CliError::ConnectionFailed { reason },
            CoreError::Timeout => CliError::Timeout,
            CoreError::Unauthorized { message } => CliError::Unauthorized { message },
            CoreError::NotFound { entity, identifier } => CliError::NotFound {
                list_command: list_command_for(&entity),
                resource_type: entity,
                identifier,
            },
            CoreError::ValidationFailed { message } => CliError::Validation {
                field: "input".into(),
                reason: message,
            },
            CoreError::Busy { operation } => CliError::Conflict {
                message: format!("{operation} already in progress"),
            },
            CoreError::Api { message, status } => CliError::Api { message, status },
            CoreError::Decode { message } => CliError::Decode { message },
            CoreError::Config { message } | CoreError::Internal(message) => {
                CliError::Config { message }
            }
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::UnknownProfile { profile } => CliError::ProfileNotFound {
                name: profile,
                available: "(see hisi config show)".into(),
            },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_error_kind() {
        assert_eq!(CliError::Timeout.exit_code(), exit_code::TIMEOUT);
        let not_found: CliError = CoreError::not_found("Order", "77").into();
        assert_eq!(not_found.exit_code(), exit_code::NOT_FOUND);
        let api_404 = CliError::Api {
            message: "gone".into(),
            status: Some(404),
        };
        assert_eq!(api_404.exit_code(), exit_code::NOT_FOUND);
        let api_500 = CliError::Api {
            message: "boom".into(),
            status: Some(500),
        };
        assert_eq!(api_500.exit_code(), exit_code::GENERAL);
        let unauthorized: CliError = CoreError::Unauthorized {
            message: "token expired".into(),
        }
        .into();
        assert_eq!(unauthorized.exit_code(), exit_code::AUTH);
    }

    #[test]
    fn not_found_points_at_list_command() {
        let err: CliError = CoreError::not_found("Blog post", "spring-edit").into();
        let CliError::NotFound { list_command, .. } = err else {
            panic!("expected NotFound");
        };
        assert_eq!(list_command, "blog list");
    }

    #[test]
    fn api_message_is_the_display_text() {
        let err: CliError = CoreError::Api {
            message: "Order already shipped".into(),
            status: Some(409),
        }
        .into();
        assert_eq!(err.to_string(), "Order already shipped");
        assert_eq!(err.exit_code(), exit_code::CONFLICT);
    }
}
