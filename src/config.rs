use serde::{Deserialize, Serialize};

use crate::utils::constants::{DEFAULT_BACKEND_URL, DEFAULT_PAGE_LIMIT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    /// Page size used by the default catalog listing.
    pub page_limit: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            environment: "production".to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from compile-time environment variables
    /// (see `build.rs` for `.env` support).
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("PAGE_LIMIT"),
            option_env!("LOG_LEVEL"),
        )
    }

    fn from_values(
        backend_url: Option<&str>,
        environment: Option<&str>,
        page_limit: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.backend_url),
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            page_limit: page_limit
                .and_then(|limit| limit.parse().ok())
                .filter(|limit| *limit > 0)
                .unwrap_or(defaults.page_limit),
            log_level: log_level
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Level handed to `wasm_logger`. Unknown names fall back to `Info`.
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.page_limit, 200);
        assert_eq!(config.backend_url(), "https://recommedia-api.herokuapp.com");
    }

    #[test]
    fn backend_url_loses_trailing_slash() {
        let config = AppConfig::from_values(Some("http://localhost:5000/"), None, None, None);
        assert_eq!(config.backend_url(), "http://localhost:5000");
    }

    #[test]
    fn invalid_page_limit_is_ignored() {
        assert_eq!(AppConfig::from_values(None, None, Some("abc"), None).page_limit, 200);
        assert_eq!(AppConfig::from_values(None, None, Some("0"), None).page_limit, 200);
        assert_eq!(AppConfig::from_values(None, None, Some("50"), None).page_limit, 50);
    }

    #[test]
    fn log_level_parsing() {
        let config = AppConfig::from_values(None, Some("development"), None, Some("DEBUG"));
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.environment, "development");
        assert_eq!(AppConfig::from_values(None, None, None, Some("loud")).log_level(), log::Level::Info);
    }
}
