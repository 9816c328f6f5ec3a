//! Client configuration.
//!
//! Defaults are embedded at build time; the API base can be overridden per
//! browser with the `api_base_url` localStorage key.

use contracts::shared::pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use serde::Deserialize;

const OVERRIDE_KEY: &str = "api_base_url";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[ui]
default_page_size = 10
page_size_options = [5, 10, 25, 50, 100]
notification_timeout_ms = 4000
"#;

#[derive(Debug, Clone, Deserialize)]
struct RawConfig {
    api: ApiSection,
    #[serde(default)]
    ui: UiSection,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiSection {
    #[serde(default = "default_port")]
    port: u16,
    /// Full base URL; wins over `port` when set.
    base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct UiSection {
    default_page_size: usize,
    page_size_options: Vec<usize>,
    notification_timeout_ms: u32,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            notification_timeout_ms: 4000,
        }
    }
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_port: u16,
    pub api_base_url: Option<String>,
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    pub notification_timeout_ms: u32,
}

impl AppConfig {
    pub fn parse(source: &str) -> Result<Self, toml::de::Error> {
        let raw: RawConfig = toml::from_str(source)?;
        let mut options = raw.ui.page_size_options;
        options.retain(|&n| n > 0);
        if options.is_empty() {
            options = PAGE_SIZE_OPTIONS.to_vec();
        }
        Ok(Self {
            api_port: raw.api.port,
            api_base_url: raw.api.base_url.filter(|s| !s.trim().is_empty()),
            default_page_size: raw.ui.default_page_size.max(1),
            page_size_options: options,
            notification_timeout_ms: raw.ui.notification_timeout_ms,
        })
    }

    /// Embedded defaults plus the localStorage override.
    pub fn load() -> Self {
        let mut config = match Self::parse(DEFAULT_CONFIG) {
            Ok(c) => c,
            Err(e) => {
                log::error!("embedded config is invalid: {}", e);
                Self::fallback()
            }
        };
        if let Some(url) = stored_override() {
            log::info!("Using API base override from localStorage");
            config.api_base_url = Some(url);
        }
        config
    }

    fn fallback() -> Self {
        Self {
            api_port: default_port(),
            api_base_url: None,
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            notification_timeout_ms: 4000,
        }
    }

    /// e.g. `http://localhost:3000`
    pub fn api_base(&self) -> String {
        if let Some(url) = &self.api_base_url {
            return url.trim_end_matches('/').to_string();
        }
        let Some(window) = web_sys::window() else {
            return String::new();
        };
        let location = window.location();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let hostname = location
            .hostname()
            .unwrap_or_else(|_| "127.0.0.1".to_string());
        format!("{}//{}:{}", protocol, hostname, self.api_port)
    }
}

fn stored_override() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage
        .get_item(OVERRIDE_KEY)
        .ok()?
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api_port, 3000);
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.page_size_options, vec![5, 10, 25, 50, 100]);
        assert_eq!(config.api_base_url, None);
    }

    #[test]
    fn explicit_base_url_wins() {
        let config = AppConfig::parse(
            r#"
            [api]
            base_url = "https://inventory.example.com/"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base(), "https://inventory.example.com");
        assert_eq!(config.notification_timeout_ms, 4000);
    }

    #[test]
    fn zero_page_sizes_dropped() {
        let config = AppConfig::parse(
            r#"
            [api]
            [ui]
            default_page_size = 0
            page_size_options = [0]
            notification_timeout_ms = 1000
            "#,
        )
        .unwrap();
        assert_eq!(config.default_page_size, 1);
        assert_eq!(config.page_size_options, PAGE_SIZE_OPTIONS.to_vec());
    }
}
