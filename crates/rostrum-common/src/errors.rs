use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no Gemini API key configured — set GEMINI_API_KEY or ai.api_key in config.toml")]
    MissingApiKey,

    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),
}
