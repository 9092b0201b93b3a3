use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.balldontlie.io/v1";
pub const DEFAULT_PER_PAGE: u32 = 25;

/// Connection settings for the players API.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sent verbatim as the `Authorization` header value.
    #[serde(default)]
    pub api_key: Option<String>,
    /// No timeout is applied when absent.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

impl CatalogConfig {
    #[inline]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: CatalogConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn full_config() {
        let config: CatalogConfig = serde_json::from_str(
            r#"{ "base_url": "http://localhost:8080/v1", "api_key": "secret", "timeout_secs": 5 }"#,
        )
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }
}
