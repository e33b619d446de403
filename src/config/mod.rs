//! Host configuration
//!
//! Loads ~/.palette/config.json into a typed `Config`, falling back to
//! defaults on any failure.
//!
//! # Module Structure
//!
//! - `types` - Config struct definitions
//! - `defaults` - Default values
//! - `loader` - File system loading

mod defaults;
mod loader;
mod types;

pub use loader::{load_config, load_config_from};
pub use types::{CapabilityConfig, Config};
