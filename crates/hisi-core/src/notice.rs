// Blocking notices raised by admin mutations.

use serde::Serialize;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A message the user must dismiss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Notice for a finished mutation; failures carry the backend's text.
    pub fn from_result<T>(action: &str, result: &Result<T, CoreError>) -> Self {
        match result {
            Ok(_) => Self::success(format!("{action} succeeded")),
            Err(e) => Self::error(format!("{action} failed: {e}")),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_notice_carries_backend_message() {
        let result: Result<(), _> = Err(CoreError::Api {
            message: "Order already shipped".into(),
            status: Some(409),
        });
        let notice = Notice::from_result("Status update", &result);
        assert!(notice.is_error());
        assert_eq!(notice.message, "Status update failed: Order already shipped");
    }
}
