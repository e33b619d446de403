//! Theme lookup service
//!
//! Wraps the loaded theme behind a lock so the router can answer
//! name -> color lookups while a reload (e.g. from a file watcher upstream)
//! swaps the palette underneath. The service is passed explicitly to the
//! router rather than living in a global.

use std::path::PathBuf;

use parking_lot::RwLock;
use tracing::info;

use super::hex_color::format_color;
use super::types::{load_theme, Theme};

/// Reloadable name -> color lookup service
pub struct ThemeService {
    path: PathBuf,
    theme: RwLock<Theme>,
}

impl ThemeService {
    /// Load the theme at `path` and wrap it. Missing or malformed files fall
    /// back to the default palette (see `load_theme`).
    pub fn new(path: PathBuf) -> Self {
        let theme = load_theme(&path);
        ThemeService {
            path,
            theme: RwLock::new(theme),
        }
    }

    /// Build a service from an already-loaded theme (test seam)
    pub fn with_theme(theme: Theme) -> Self {
        ThemeService {
            path: PathBuf::new(),
            theme: RwLock::new(theme),
        }
    }

    /// Re-read the theme file, swapping the palette in place
    pub fn reload(&self) {
        let theme = load_theme(&self.path);
        *self.theme.write() = theme;
        info!(path = %self.path.display(), "Theme reloaded");
    }

    /// Resolve a token name to its display color string ("#RRGGBB")
    pub fn lookup(&self, name: &str) -> Option<String> {
        self.theme.read().color(name).map(format_color)
    }
}
