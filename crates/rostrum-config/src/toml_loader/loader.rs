//! Core TOML config loading: read from path or platform default.

use crate::schema::RostrumConfig;
use rostrum_common::ConfigError;
use std::path::Path;
use tracing::info;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields fall back to serde defaults, so a partial file works.
pub fn load_from_path(path: &Path) -> Result<RostrumConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        }
    })?;

    let config: RostrumConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/rostrum/config.toml`
/// On Linux: `~/.config/rostrum/config.toml`
///
/// If the file does not exist, creates a commented default config file and
/// returns defaults.
pub fn load_default() -> Result<RostrumConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(RostrumConfig::default())
        }
        Err(e) => Err(e),
    }
}
