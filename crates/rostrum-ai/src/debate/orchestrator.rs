//! Two-mode request orchestration over the session store.

use rostrum_common::SessionId;
use tracing::debug;

use crate::session::{SessionStore, Turn};
use crate::{AiError, TextGenerator};

use super::evaluate::EvaluationRecord;
use super::{prompts, report};

/// How many trailing turns are rendered into each generation prompt.
pub const CONTEXT_TURNS: usize = 10;

/// Messages that end a scored debate and trigger the final report.
/// Matched case-insensitively against the whole message.
pub const TERMINAL_PHRASES: [&str; 3] = ["fin du débat", "fin", "score"];

/// Conversation mode for a single request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Train,
    Score,
}

impl Mode {
    /// Parse a caller-supplied mode string. Anything other than exactly
    /// `"score"` falls through to training; unknown modes are not rejected.
    pub fn parse(mode: &str) -> Self {
        if mode == "score" {
            Self::Score
        } else {
            Self::Train
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Score => "score",
        }
    }
}

/// Reply from a single orchestrated request.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub text: String,
    pub session_id: SessionId,
}

#[derive(Debug, thiserror::Error)]
pub enum DebateError {
    #[error("response generation failed: {0}")]
    Generation(#[from] AiError),
}

/// Orchestrates debate requests: resolves the session, branches on mode,
/// calls the generator, and records both sides of the exchange.
///
/// The generator client is passed per call so tests can script it; the
/// store is owned and can be injected pre-seeded via
/// [`with_store`](Self::with_store).
pub struct DebateService {
    store: SessionStore,
}

impl DebateService {
    pub fn new() -> Self {
        Self::with_store(SessionStore::new())
    }

    pub fn with_store(store: SessionStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Handle one user message in the given mode.
    ///
    /// In scoring mode a non-terminal message is first evaluated against
    /// the rubric, then answered like any other message; a terminal phrase
    /// returns the synthesized final report instead of calling the model.
    /// On generation failure the already-recorded user turn stays in the
    /// history.
    pub async fn generate_response(
        &mut self,
        client: &dyn TextGenerator,
        message: &str,
        mode: Mode,
        session_id: Option<&SessionId>,
    ) -> Result<ChatReply, DebateError> {
        let session_id = self.store.ensure(session_id);
        self.store.append_turn(&session_id, Turn::user(message));

        let terminal = mode == Mode::Score && is_terminal(message);

        if mode == Mode::Score && !terminal {
            let record = self.evaluate_argument(client, message).await?;
            self.store.push_evaluation(&session_id, record);
        }

        if terminal {
            let report = report::final_report(self.store.evaluations(&session_id));
            self.store
                .append_turn(&session_id, Turn::assistant(report.clone()));
            return Ok(ChatReply {
                text: report,
                session_id,
            });
        }

        let context = self.store.recent_context(&session_id, CONTEXT_TURNS);
        let prompt = prompts::debate_prompt(mode.label(), &context, message);

        debug!(session = %session_id, mode = mode.label(), "generating debate response");
        let text = client.generate(&prompt).await?;

        self.store
            .append_turn(&session_id, Turn::assistant(text.clone()));
        Ok(ChatReply { text, session_id })
    }

    /// Ask the model for a rubric evaluation of one argument. The reply is
    /// resolved into a record here; only a failed model call is an error.
    async fn evaluate_argument(
        &self,
        client: &dyn TextGenerator,
        message: &str,
    ) -> Result<EvaluationRecord, DebateError> {
        let prompt = prompts::evaluation_prompt(message);
        let reply = client.generate(&prompt).await?;
        Ok(EvaluationRecord::from_model_reply(&reply))
    }

    /// Drop a session's history and evaluations. Unknown ids are a no-op.
    pub fn clear_session(&mut self, session_id: &SessionId) {
        self.store.clear(session_id);
    }
}

impl Default for DebateService {
    fn default() -> Self {
        Self::new()
    }
}

pub(super) fn is_terminal(message: &str) -> bool {
    let normalized = message.to_lowercase();
    TERMINAL_PHRASES.contains(&normalized.as_str())
}
