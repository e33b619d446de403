//! Default configuration values

/// Clipboard capability enabled by default
pub const DEFAULT_CLIPBOARD_ENABLED: bool = true;

/// Theme lookup capability enabled by default
pub const DEFAULT_THEME_LOOKUP_ENABLED: bool = true;

/// Default theme file path (tilde-expanded at load time)
pub const DEFAULT_THEME_PATH: &str = "~/.palette/theme.json";
