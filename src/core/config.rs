use std::env;

use crate::shared::constants::{API_URL_ENV, DEFAULT_API_BASE_URL};

/// Settings for talking to the remote itinerary service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the service, without a trailing slash
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Error loading .env file: {}", e);
            }
        }

        Self::from_value(env::var(API_URL_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Result<Self, String> {
        let base_url = value
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(format!(
                "{} must be an http(s) URL, got: {}",
                API_URL_ENV, base_url
            ));
        }

        Ok(Self::new(base_url))
    }

    /// Full URL of an endpoint path such as `/itinerary`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
