use serde::{Deserialize, Serialize};

use crate::utils::constants::{DEFAULT_API_BASE_URL, DEFAULT_LANGUAGE, DEFAULT_TOKEN_STORAGE_KEY};

/// Client configuration, fixed at compile time (see `build.rs` for `.env` support).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub language: String,
    pub enable_logging: bool,
    pub token_storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            enable_logging: true,
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Build the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            language: option_env!("APP_LANGUAGE")
                .unwrap_or(DEFAULT_LANGUAGE)
                .to_uppercase(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            token_storage_key: option_env!("TOKEN_STORAGE_KEY")
                .unwrap_or(DEFAULT_TOKEN_STORAGE_KEY)
                .to_string(),
        }
    }

    /// Absolute URL for an API path such as `/devices/me`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
