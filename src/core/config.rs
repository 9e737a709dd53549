//! Server configuration from environment variables.
//!
//! Load configuration using `SiteConfig::from_env()` after calling `dotenvy::dotenv()`.

use super::error::ConfigError;
use super::seo::public_site_url;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info,learnbridge=debug";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Public origin of the site, without a trailing slash.
    /// Defaults to the `LEARNBRIDGE_SITE_URL` the bundle was built with
    /// Example: https://learnbridge.app
    pub site_url: String,

    /// tracing-subscriber filter directive
    /// Example: info,learnbridge=debug
    pub log_filter: String,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let site_url = match lookup("SITE_URL") {
            Some(raw) => parse_site_url(&raw)?,
            None => public_site_url().to_string(),
        };

        let log_filter = lookup("RUST_LOG")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            site_url,
            log_filter,
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: public_site_url().to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

fn parse_site_url(raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim().trim_end_matches('/');
    let host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    match host {
        Some(host) if !host.is_empty() => Ok(url.to_string()),
        _ => Err(ConfigError::InvalidSiteUrl(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no env var dependencies - thread safe)
    // ========================================================================

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = SiteConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.site_url, public_site_url());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_site_url_trailing_slash_stripped() {
        let config =
            SiteConfig::from_lookup(lookup_from(&[("SITE_URL", " https://learnbridge.app/ ")]))
                .unwrap();
        assert_eq!(config.site_url, "https://learnbridge.app");
    }

    #[test]
    fn test_invalid_site_urls_rejected() {
        for raw in ["learnbridge.app", "ftp://learnbridge.app", "https://", ""] {
            let result = SiteConfig::from_lookup(lookup_from(&[("SITE_URL", raw)]));
            assert!(
                matches!(result, Err(ConfigError::InvalidSiteUrl(ref v)) if v == raw),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_log_filter_override() {
        let config =
            SiteConfig::from_lookup(lookup_from(&[("RUST_LOG", "warn,tower_http=debug")]))
                .unwrap();
        assert_eq!(config.log_filter, "warn,tower_http=debug");
    }

    #[test]
    fn test_blank_log_filter_falls_back_to_default() {
        let config = SiteConfig::from_lookup(lookup_from(&[("RUST_LOG", "   ")])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
