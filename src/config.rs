// SPDX-License-Identifier: GPL-3.0-only

use crate::app_settings;
use cosmic::cosmic_config;
use cosmic::cosmic_config::{cosmic_config_derive::CosmicConfigEntry, CosmicConfigEntry};

/// User configuration that persists between application runs.
#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq)]
#[version = 1]
pub struct Config {
    /// Base URL of the name-validation backend.
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: app_settings::DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Resolves the effective backend base URL.
    ///
    /// The `NAMEBOARD_API_BASE_URL` environment variable takes precedence
    /// over the persisted entry. Trailing slashes are trimmed so endpoint
    /// paths can be appended directly.
    pub fn api_base_url(&self) -> String {
        resolve_base_url(
            std::env::var(app_settings::API_BASE_URL_ENV).ok(),
            &self.api_base_url,
        )
    }
}

/// Picks the environment override when present and non-empty, otherwise the
/// persisted value, normalizing away trailing slashes.
fn resolve_base_url(env_override: Option<String>, persisted: &str) -> String {
    let raw = env_override
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| persisted.to_string());

    raw.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: Config defaults to the stock backend URL
    #[test]
    fn test_default_base_url() {
        let config = Config::default();
        assert_eq!(
            config.api_base_url,
            app_settings::DEFAULT_API_BASE_URL,
            "Default config should point at the stock backend"
        );
    }

    /// Test: Config struct has correct version for cosmic_config
    #[test]
    fn test_config_version() {
        assert_eq!(Config::VERSION, 1, "Config::VERSION should be 1");
    }

    /// Test: Environment override wins over the persisted entry
    #[test]
    fn test_env_override_wins() {
        let resolved = resolve_base_url(
            Some("https://kiosk.example.com".to_string()),
            "http://localhost:8080",
        );
        assert_eq!(resolved, "https://kiosk.example.com");
    }

    /// Test: Empty environment override falls back to the persisted entry
    #[test]
    fn test_empty_env_override_ignored() {
        let resolved = resolve_base_url(Some(String::new()), "http://localhost:8080");
        assert_eq!(resolved, "http://localhost:8080");
    }

    /// Test: Trailing slashes are normalized away
    #[test]
    fn test_trailing_slash_trimmed() {
        let resolved = resolve_base_url(None, "http://localhost:8080/");
        assert_eq!(resolved, "http://localhost:8080");

        let resolved = resolve_base_url(Some("https://api.example.com//".to_string()), "unused");
        assert_eq!(resolved, "https://api.example.com");
    }
}
