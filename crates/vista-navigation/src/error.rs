//! Navigation error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Address bar input that could not be turned into a loadable URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid URL: {0:?}")]
    Malformed(String),
}

impl ValidationError {
    /// Fixed message shown to the user.
    pub fn display_message(&self) -> &'static str {
        match self {
            ValidationError::Malformed(_) => "Invalid URL",
        }
    }
}

/// Why the renderer gave up on a navigation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "lowercase")]
pub enum LoadError {
    /// Superseded by a newer navigation or explicitly stopped
    #[error("Navigation cancelled")]
    Cancelled,

    /// Anything else the renderer reports
    #[error("Network error: {0}")]
    Network(String),
}

impl LoadError {
    pub fn is_cancellation(&self) -> bool {
        matches!(self, LoadError::Cancelled)
    }

    /// Fixed message shown to the user, `None` when the failure is suppressed.
    pub fn display_message(&self) -> Option<&'static str> {
        match self {
            LoadError::Cancelled => None,
            LoadError::Network(_) => Some("Network Error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ValidationError::Malformed("not a url!!".to_string());
        assert_eq!(err.display_message(), "Invalid URL");
        assert_eq!(err.to_string(), "Invalid URL: \"not a url!!\"");

        assert!(LoadError::Cancelled.is_cancellation());
        assert_eq!(LoadError::Cancelled.display_message(), None);

        let err = LoadError::Network("timed out".to_string());
        assert!(!err.is_cancellation());
        assert_eq!(err.display_message(), Some("Network Error"));
    }

    #[test]
    fn test_load_error_json() {
        let json = serde_json::to_string(&LoadError::Network("dns".to_string())).unwrap();
        assert_eq!(json, r#"{"kind":"network","detail":"dns"}"#);

        let err: LoadError = serde_json::from_str(r#"{"kind":"cancelled"}"#).unwrap();
        assert_eq!(err, LoadError::Cancelled);
    }
}
