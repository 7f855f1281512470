use serde::Deserialize;

/// localStorage key holding an optional TOML override
pub const CONFIG_STORAGE_KEY: &str = "payroll_dashboard_config";

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty means "same origin as the page"
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_debounce_ms")]
    pub search_debounce_ms: u32,
    #[serde(default = "default_toast_delay_ms")]
    pub toast_delay_ms: u32,
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_debounce_ms() -> u32 {
    300
}

fn default_toast_delay_ms() -> u32 {
    3000
}

fn default_page_size() -> usize {
    10
}

fn default_page_size_options() -> Vec<usize> {
    vec![10, 25, 50, 100]
}

fn default_currency() -> String {
    "SAR".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: default_debounce_ms(),
            toast_delay_ms: default_toast_delay_ms(),
            default_page_size: default_page_size(),
            page_size_options: default_page_size_options(),
            currency: default_currency(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[ui]
search_debounce_ms = 300
toast_delay_ms = 3000
default_page_size = 10
page_size_options = [10, 25, 50, 100]
currency = "SAR"
"#;

impl ClientConfig {
    /// Parse a TOML document; missing keys fall back to defaults
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        let mut config: ClientConfig = toml::from_str(source)?;
        config.normalize();
        Ok(config)
    }

    fn normalize(&mut self) {
        self.api.base_url = self.api.base_url.trim().trim_end_matches('/').to_string();
        self.ui.page_size_options.retain(|s| *s > 0);
        if self.ui.page_size_options.is_empty() {
            self.ui.page_size_options = default_page_size_options();
        }
        if self.ui.default_page_size == 0 {
            self.ui.default_page_size = self.ui.page_size_options[0];
        }
        if !self.ui.page_size_options.contains(&self.ui.default_page_size) {
            self.ui.page_size_options.push(self.ui.default_page_size);
            self.ui.page_size_options.sort_unstable();
        }
    }
}

/// Load configuration.
///
/// Search order:
/// 1. TOML stored in localStorage under [`CONFIG_STORAGE_KEY`]
/// 2. Falls back to the embedded default
pub fn load_config() -> ClientConfig {
    if let Some(raw) = read_override() {
        match ClientConfig::from_toml(&raw) {
            Ok(config) => {
                log::info!("Using config override from localStorage");
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid config override: {}", e),
        }
    }

    ClientConfig::from_toml(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("Embedded config is invalid: {}", e);
        ClientConfig::default()
    })
}

fn read_override() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage
        .get_item(CONFIG_STORAGE_KEY)
        .ok()?
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = ClientConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.ui.search_debounce_ms, 300);
        assert_eq!(config.ui.default_page_size, 10);
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://payroll.example.com/"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://payroll.example.com");
        assert_eq!(config.ui.toast_delay_ms, 3000);
        assert_eq!(config.ui.currency, "SAR");
    }

    #[test]
    fn default_page_size_is_always_an_option() {
        let config = ClientConfig::from_toml(
            r#"
            [ui]
            default_page_size = 20
            page_size_options = [10, 50, 0]
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.page_size_options, vec![10, 20, 50]);
    }
}
