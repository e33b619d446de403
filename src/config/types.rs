//! Configuration type definitions

use serde::{Deserialize, Serialize};

use super::defaults::*;

/// Configuration for capability handlers exposed to extensions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityConfig {
    /// Enable the clipboard capability (default: true)
    #[serde(default = "default_clipboard_enabled")]
    pub clipboard: bool,
    /// Enable the theme lookup capability (default: true)
    #[serde(default = "default_theme_lookup_enabled")]
    pub theme_lookup: bool,
}

fn default_clipboard_enabled() -> bool {
    DEFAULT_CLIPBOARD_ENABLED
}
fn default_theme_lookup_enabled() -> bool {
    DEFAULT_THEME_LOOKUP_ENABLED
}

impl Default for CapabilityConfig {
    fn default() -> Self {
        CapabilityConfig {
            clipboard: DEFAULT_CLIPBOARD_ENABLED,
            theme_lookup: DEFAULT_THEME_LOOKUP_ENABLED,
        }
    }
}

/// Top-level host configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path to the theme JSON file (default: ~/.palette/theme.json)
    #[serde(default = "default_theme_path")]
    pub theme_path: String,
    /// Capability toggles
    #[serde(default)]
    pub capabilities: CapabilityConfig,
}

fn default_theme_path() -> String {
    DEFAULT_THEME_PATH.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme_path: DEFAULT_THEME_PATH.to_string(),
            capabilities: CapabilityConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_has_capabilities_enabled() {
        let config = Config::default();
        assert!(config.capabilities.clipboard);
        assert!(config.capabilities.theme_lookup);
        assert_eq!(config.theme_path, "~/.palette/theme.json");
    }

    #[test]
    fn test_config_empty_json_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.capabilities.clipboard);
        assert_eq!(config.theme_path, DEFAULT_THEME_PATH);
    }

    #[test]
    fn test_config_partial_capabilities() {
        let config: Config =
            serde_json::from_str(r#"{"capabilities":{"clipboard":false}}"#).unwrap();
        assert!(!config.capabilities.clipboard);
        assert!(config.capabilities.theme_lookup);
    }

    #[test]
    fn test_config_custom_theme_path() {
        let config: Config =
            serde_json::from_str(r#"{"themePath":"/tmp/theme.json"}"#).unwrap();
        assert_eq!(config.theme_path, "/tmp/theme.json");
    }
}
