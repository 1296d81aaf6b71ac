//! Rostrum configuration system.
//!
//! TOML-based configuration where every field has a serde default, so a
//! partial config file works out of the box. The Gemini credential can
//! come from the config file or from the `GEMINI_API_KEY` environment
//! variable; the file value wins when both are set.

pub mod schema;
pub mod toml_loader;

pub use schema::RostrumConfig;
pub use toml_loader::{load_default, load_from_path};

use rostrum_common::ConfigError;
use std::path::Path;

/// Environment variable consulted when `ai.api_key` is not set in the file.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Load config from the platform default path, creating a commented
/// default file on first run, then fill the credential from the
/// environment if the file leaves it unset.
pub fn load_config() -> Result<RostrumConfig, ConfigError> {
    let mut config = toml_loader::load_default()?;
    apply_env_api_key(&mut config, std::env::var(API_KEY_ENV).ok());
    Ok(config)
}

/// Same as [`load_config`] but from an explicit file path.
pub fn load_config_from(path: &Path) -> Result<RostrumConfig, ConfigError> {
    let mut config = toml_loader::load_from_path(path)?;
    apply_env_api_key(&mut config, std::env::var(API_KEY_ENV).ok());
    Ok(config)
}

/// The environment only fills an absent or empty key.
fn apply_env_api_key(config: &mut RostrumConfig, env_key: Option<String>) {
    let unset = config.ai.api_key.as_deref().map_or(true, str::is_empty);
    if unset {
        if let Some(key) = env_key.filter(|k| !k.is_empty()) {
            config.ai.api_key = Some(key);
        }
    }
}
