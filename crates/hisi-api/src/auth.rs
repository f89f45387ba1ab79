use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// Opaque bearer credential attached to every privileged request.
///
/// The client never refreshes or inspects the token; its lifecycle is
/// managed by whoever put it in storage (see `hisi-config`).
#[derive(Debug, Clone)]
pub struct AuthToken(SecretString);

impl AuthToken {
    pub fn new(token: SecretString) -> Self {
        Self(token)
    }

    /// `Authorization` header value (`Bearer <token>`), marked sensitive so
    /// it never shows up in debug output.
    pub fn header_value(&self) -> Result<HeaderValue, Error> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0.expose_secret()))
            .map_err(|e| Error::InvalidToken(e.to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().trim().is_empty()
    }
}

impl From<SecretString> for AuthToken {
    fn from(token: SecretString) -> Self {
        Self(token)
    }
}

impl From<String> for AuthToken {
    fn from(token: String) -> Self {
        Self(SecretString::from(token))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn header_value_is_bearer_and_sensitive() {
        let token = AuthToken::from("abc.def".to_string());
        let value = token.header_value().unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer abc.def");
        assert!(value.is_sensitive());
    }

    #[test]
    fn control_characters_are_rejected() {
        let token = AuthToken::from("bad\ntoken".to_string());
        assert!(matches!(token.header_value(), Err(Error::InvalidToken(_))));
    }

    #[test]
    fn blank_token_is_empty() {
        assert!(AuthToken::from("   ".to_string()).is_empty());
    }
}
