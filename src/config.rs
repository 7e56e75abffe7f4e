//! Runtime configuration
//!
//! The only setting is the base URL of the search API. Resolution order:
//! `--api-url` flag, `THERAPIST_SEARCH_API_URL`, built-in default.

use reqwest::Url;

use crate::error::ConfigError;

/// Production search API
pub const DEFAULT_API_BASE_URL: &str = "https://therapistsearch-production.up.railway.app";

/// Environment variable overriding the base URL
pub const API_URL_ENV: &str = "THERAPIST_SEARCH_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Build from an optional CLI override, falling back to the environment.
    pub fn load(cli_override: Option<&str>) -> Result<Self, ConfigError> {
        let from_env = std::env::var(API_URL_ENV).ok();
        Self::resolve(cli_override, from_env.as_deref())
    }

    pub fn resolve(cli_override: Option<&str>, from_env: Option<&str>) -> Result<Self, ConfigError> {
        let raw = cli_override
            .or(from_env)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        Self::with_base_url(raw)
    }

    pub fn with_base_url(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim().trim_end_matches('/');
        let url = Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw.to_string(),
                reason: format!("unsupported scheme {:?}", url.scheme()),
            });
        }

        Ok(Self {
            api_base_url: trimmed.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        let config = Config::resolve(None, None).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_flag_beats_env() {
        let config = Config::resolve(Some("http://localhost:9000/"), Some("http://env:1")).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:9000");
    }

    #[test]
    fn test_env_used_when_no_flag() {
        let config = Config::resolve(None, Some("http://10.0.0.2:8000")).unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.2:8000");
    }

    #[test]
    fn test_blank_env_falls_back_to_default() {
        let config = Config::resolve(None, Some("   ")).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(Config::with_base_url("not a url").is_err());
        assert!(Config::with_base_url("ftp://example.com").is_err());
    }
}
