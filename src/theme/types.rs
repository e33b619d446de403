//! Theme type definitions
//!
//! Contains the struct definitions for the theme palette:
//! - TextColors, AccentColors, StatusColors
//! - Theme (the full palette plus name lookup)

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::hex_color::{hex_color_serde, HexColor};
use crate::error::{HostError, ResultExt};

/// Text color definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextColors {
    /// Primary text color (#FFFFFF - white)
    #[serde(default = "default_text_primary", with = "hex_color_serde")]
    pub primary: HexColor,
    /// Secondary text color (#CCCCCC - light gray)
    #[serde(default = "default_text_secondary", with = "hex_color_serde")]
    pub secondary: HexColor,
    /// Muted text color (#808080)
    #[serde(default = "default_text_muted", with = "hex_color_serde")]
    pub muted: HexColor,
}

fn default_text_primary() -> HexColor {
    0xFFFFFF
}
fn default_text_secondary() -> HexColor {
    0xCCCCCC
}
fn default_text_muted() -> HexColor {
    0x808080
}

impl Default for TextColors {
    fn default() -> Self {
        TextColors {
            primary: default_text_primary(),
            secondary: default_text_secondary(),
            muted: default_text_muted(),
        }
    }
}

/// Accent and highlight colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccentColors {
    /// Primary accent color (#FBBF24 - yellow/gold)
    /// Used for: selected items, highlighted icons
    #[serde(default = "default_accent_selected", with = "hex_color_serde")]
    pub selected: HexColor,
}

fn default_accent_selected() -> HexColor {
    0xFBBF24
}

impl Default for AccentColors {
    fn default() -> Self {
        AccentColors {
            selected: default_accent_selected(),
        }
    }
}

/// Status colors for feedback states
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusColors {
    /// Success color (#00FF00 - green)
    #[serde(default = "default_status_success", with = "hex_color_serde")]
    pub success: HexColor,
    /// Error color (#EF4444 - red-500)
    #[serde(default = "default_status_error", with = "hex_color_serde")]
    pub error: HexColor,
    /// Warning color (#F59E0B - amber-500)
    #[serde(default = "default_status_warning", with = "hex_color_serde")]
    pub warning: HexColor,
}

fn default_status_success() -> HexColor {
    0x00FF00
}
fn default_status_error() -> HexColor {
    0xEF4444
}
fn default_status_warning() -> HexColor {
    0xF59E0B
}

impl Default for StatusColors {
    fn default() -> Self {
        StatusColors {
            success: default_status_success(),
            error: default_status_error(),
            warning: default_status_warning(),
        }
    }
}

/// The full theme palette
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub text: TextColors,
    #[serde(default)]
    pub accent: AccentColors,
    #[serde(default)]
    pub status: StatusColors,
}

impl Theme {
    /// Look up a color by its token name.
    ///
    /// Token names are the stable identifiers extensions reference through
    /// ColorLike `themeColor` fields and `themeColor` requests. `primary-text`
    /// is also the ColorLike fallback token, so it must always resolve.
    pub fn color(&self, name: &str) -> Option<HexColor> {
        match name {
            "primary-text" => Some(self.text.primary),
            "secondary-text" => Some(self.text.secondary),
            "muted-text" => Some(self.text.muted),
            "accent" => Some(self.accent.selected),
            "success" => Some(self.status.success),
            "error" => Some(self.status.error),
            "warning" => Some(self.status.warning),
            _ => None,
        }
    }
}

/// Load a theme from a JSON file.
///
/// Returns `Theme::default()` if the file is missing, unreadable, or fails to
/// parse. Missing fields fall back per-field, so partial themes work.
pub fn load_theme(path: &Path) -> Theme {
    if !path.exists() {
        info!(path = %path.display(), "Theme file not found, using default theme");
        return Theme::default();
    }

    let Some(contents) = std::fs::read_to_string(path)
        .map_err(|source| HostError::ThemeLoad {
            path: path.display().to_string(),
            source,
        })
        .warn_on_err()
    else {
        return Theme::default();
    };

    match serde_json::from_str::<Theme>(&contents) {
        Ok(theme) => {
            info!(path = %path.display(), "Successfully loaded theme");
            theme
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to parse theme JSON, using default");
            Theme::default()
        }
    }
}
