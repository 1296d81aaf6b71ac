//! Configuration schema types for Rostrum.
//!
//! All structs use `serde(default)` so partial configs work correctly.

use serde::{Deserialize, Serialize};

/// Root configuration for Rostrum.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RostrumConfig {
    pub ai: AiConfig,
    pub logging: LoggingConfig,
}

/// Gemini model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// API key; when unset, `GEMINI_API_KEY` is consulted at load time.
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash".into(),
            max_tokens: 4096,
            temperature: 0.7,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing directive, overridable with `--log-level`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "rostrum=info".into(),
        }
    }
}
