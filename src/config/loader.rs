//! Configuration loading from file system

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use super::types::Config;
use crate::error::{HostError, ResultExt};

/// Load configuration from ~/.palette/config.json
///
/// Returns `Config::default()` if the file is missing, unreadable, or fails
/// to parse. Failures are logged as warnings, never propagated - the host
/// always starts with a usable configuration.
#[instrument(name = "load_config")]
pub fn load_config() -> Config {
    let config_path = PathBuf::from(shellexpand::tilde("~/.palette/config.json").as_ref());
    load_config_from(&config_path)
}

/// Load configuration from an explicit path (test seam)
pub fn load_config_from(config_path: &Path) -> Config {
    if !config_path.exists() {
        info!(path = %config_path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    let Some(contents) = std::fs::read_to_string(config_path)
        .map_err(|e| {
            HostError::Config(format!(
                "failed to read {}: {}",
                config_path.display(),
                e
            ))
        })
        .warn_on_err()
    else {
        return Config::default();
    };

    match serde_json::from_str::<Config>(&contents) {
        Ok(config) => {
            info!(path = %config_path.display(), "Successfully loaded config");
            config
        }
        Err(e) => {
            warn!(
                path = %config_path.display(),
                error = %e,
                "Failed to parse config JSON, using defaults"
            );
            Config::default()
        }
    }
}
