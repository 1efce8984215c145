//! Viewer configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page loaded when the screen first appears
    pub homepage: String,
    /// Scheme for address bar input typed without one
    pub default_scheme: String,
    /// Delay before the address field selects its text on focus
    pub select_all_delay_ms: u64,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;

        tracing::info!(path = %path.display(), "Loaded viewer configuration");

        Ok(config)
    }

    pub fn select_all_delay(&self) -> Duration {
        Duration::from_millis(self.select_all_delay_ms)
    }

    fn validate(&self) -> Result<()> {
        if !vista_navigation::is_valid_scheme(&self.default_scheme) {
            return Err(CoreError::Config(format!(
                "invalid default scheme: {:?}",
                self.default_scheme
            )));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            homepage: "https://qiita.com/_CHUBURA".to_string(),
            default_scheme: vista_navigation::DEFAULT_SCHEME.to_string(),
            select_all_delay_ms: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.homepage, "https://qiita.com/_CHUBURA");
        assert_eq!(config.default_scheme, "http");
        assert_eq!(config.select_all_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_partial_json() {
        let config = Config::from_json_str(r#"{"homepage":"example.com"}"#).unwrap();
        assert_eq!(config.homepage, "example.com");
        assert_eq!(config.default_scheme, "http");
        assert_eq!(config.select_all_delay_ms, 100);
    }

    #[test]
    fn test_invalid_scheme_rejected() {
        let err = Config::from_json_str(r#"{"default_scheme":"ht tp"}"#).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));

        let err = Config::from_json_str(r#"{"default_scheme":""}"#).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = Config::from_json_str("{").unwrap_err();
        assert!(matches!(err, CoreError::Serialization(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/vista.json").unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
