//! In-memory store keyed by session id.

use std::collections::HashMap;

use rostrum_common::SessionId;

use crate::debate::EvaluationRecord;

use super::types::Turn;

/// Per-session conversation history plus scoring-mode evaluation records.
///
/// A session's turn list and evaluation list are created together by
/// [`ensure`](Self::ensure) and removed together by [`clear`](Self::clear).
/// The store has no interior synchronization; callers serialize access
/// per session id.
#[derive(Debug, Default)]
pub struct SessionStore {
    turns: HashMap<SessionId, Vec<Turn>>,
    evaluations: HashMap<SessionId, Vec<EvaluationRecord>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a session id, creating empty state for unseen ids.
    ///
    /// With no id supplied, a fresh one is generated. Idempotent for ids
    /// that already exist.
    pub fn ensure(&mut self, session_id: Option<&SessionId>) -> SessionId {
        let id = session_id.cloned().unwrap_or_default();
        self.turns.entry(id.clone()).or_default();
        self.evaluations.entry(id.clone()).or_default();
        id
    }

    pub fn append_turn(&mut self, session_id: &SessionId, turn: Turn) {
        self.turns.entry(session_id.clone()).or_default().push(turn);
    }

    /// Render the last `n` turns as `User:` / `Assistant:` lines, oldest
    /// first, one turn per line.
    pub fn recent_context(&self, session_id: &SessionId, n: usize) -> String {
        let turns = self.turns(session_id);
        let start = turns.len().saturating_sub(n);

        let mut context = String::new();
        for turn in &turns[start..] {
            context.push_str(turn.role.context_label());
            context.push_str(": ");
            context.push_str(&turn.content);
            context.push('\n');
        }
        context
    }

    pub fn turns(&self, session_id: &SessionId) -> &[Turn] {
        self.turns.get(session_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn push_evaluation(&mut self, session_id: &SessionId, record: EvaluationRecord) {
        self.evaluations
            .entry(session_id.clone())
            .or_default()
            .push(record);
    }

    pub fn evaluations(&self, session_id: &SessionId) -> &[EvaluationRecord] {
        self.evaluations
            .get(session_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Remove a session's history and evaluations. Unknown ids are a no-op.
    pub fn clear(&mut self, session_id: &SessionId) {
        self.turns.remove(session_id);
        self.evaluations.remove(session_id);
    }
}
