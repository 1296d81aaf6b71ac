//! Debate-training AI engine for Rostrum.
//!
//! Wraps the Gemini Generative Language API with:
//! - Per-session conversation history with a rolling context window
//! - Two conversation modes over the same session: training and scoring
//! - Rubric-based argument evaluation in scoring mode
//! - A synthesized final report when the user ends a scored debate

pub mod debate;
pub mod gemini;
pub mod session;

use async_trait::async_trait;

pub use debate::{ChatReply, DebateError, DebateService, EvaluationRecord, Mode};
pub use gemini::{GeminiClient, GeminiConfig};
pub use session::{Role, SessionStore, Turn};

/// Single-call text generation boundary.
///
/// The orchestrator only ever needs `prompt in, text out`; keeping this a
/// trait lets tests substitute a scripted generator for the live client.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}
