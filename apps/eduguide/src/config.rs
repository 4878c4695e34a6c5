use std::path::PathBuf;

use anyhow::{anyhow, Result};

const DEFAULT_DATA_DIR: &str = ".eduguide";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Only needed by commands that call the engine.
    pub gemini_api_key: Option<String>,
    pub data_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY").or_else(|| optional_env("API_KEY")),
            data_dir: optional_env("EDUGUIDE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.gemini_api_key.as_deref().ok_or_else(|| {
            anyhow!("Required environment variable 'GEMINI_API_KEY' (or 'API_KEY') is not set")
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_api_key_reports_variable_name() {
        let config = Config {
            gemini_api_key: None,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            rust_log: "info".to_string(),
        };
        let err = config.require_api_key().unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_require_api_key_returns_key() {
        let config = Config {
            gemini_api_key: Some("secret".to_string()),
            data_dir: PathBuf::from("/tmp/eduguide"),
            rust_log: "debug".to_string(),
        };
        assert_eq!(config.require_api_key().unwrap(), "secret");
    }
}
