//! Debate-training orchestration.
//!
//! `DebateService` runs each user message through the two-mode flow:
//! training chats against the DebateMaster prompt, scoring additionally
//! collects rubric evaluations and synthesizes a final report when the
//! user ends the debate.

mod evaluate;
mod orchestrator;
mod prompts;
mod report;


pub use evaluate::{ArgumentScores, EvaluationRecord};
pub use orchestrator::{
    ChatReply, DebateError, DebateService, Mode, CONTEXT_TURNS, TERMINAL_PHRASES,
};
pub use report::aggregate_score;
