//! Theme module - named color palette for extensions
//!
//! This module provides functionality for:
//! - Loading a theme from a JSON file (path comes from config)
//! - Hex color parsing and serialization
//! - Name -> color lookup behind a reloadable service
//!
//! # Module Structure
//!
//! - `hex_color` - Hex color parsing and serialization
//! - `types` - Theme struct definitions and loading
//! - `service` - Reloadable lookup service handed to the router

pub mod hex_color;
mod service;
mod types;

pub use hex_color::{hex_color_serde, HexColor};
pub use service::ThemeService;
pub use types::{load_theme, AccentColors, StatusColors, TextColors, Theme};
