//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::time::Duration;

/// Default upstream timeout for proxied auth requests
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 10;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the authentication backend that `/api/auth/*` is forwarded to
    /// Example: https://auth.internal.example.com
    pub auth_backend_url: Option<String>,

    /// Upstream timeout for proxied requests, in seconds
    pub proxy_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let auth_backend_url = lookup("AUTH_BACKEND_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let proxy_timeout_secs = lookup("AUTH_PROXY_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_PROXY_TIMEOUT_SECS);

        Self {
            auth_backend_url,
            proxy_timeout_secs,
        }
    }

    /// Check if an auth backend is configured
    pub fn has_auth_backend(&self) -> bool {
        self.auth_backend_url.is_some()
    }

    pub fn proxy_timeout(&self) -> Duration {
        Duration::from_secs(self.proxy_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_lookup(lookup_from(&[
            ("AUTH_BACKEND_URL", "https://auth.example.com/"),
            ("AUTH_PROXY_TIMEOUT_SECS", "3"),
        ]));

        assert_eq!(
            config.auth_backend_url.as_deref(),
            Some("https://auth.example.com")
        );
        assert!(config.has_auth_backend());
        assert_eq!(config.proxy_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config::from_lookup(|_| None);

        assert!(config.auth_backend_url.is_none());
        assert!(!config.has_auth_backend());
        assert_eq!(config.proxy_timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);
    }

    #[test]
    fn test_config_ignores_blank_and_invalid_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("AUTH_BACKEND_URL", "   "),
            ("AUTH_PROXY_TIMEOUT_SECS", "zero"),
        ]));
        assert!(config.auth_backend_url.is_none());
        assert_eq!(config.proxy_timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);

        let config = Config::from_lookup(lookup_from(&[("AUTH_PROXY_TIMEOUT_SECS", "0")]));
        assert_eq!(config.proxy_timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);
    }
}
