//! Errors surfaced by the battle engine.

use crate::error::{ErrorSeverity, GameError};
use crate::state::MatchPhase;

/// Lifecycle violations. In-match rule failures never reach this type; the
/// dispatcher recovers them inside the tick.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    #[error("match has not started")]
    NotStarted,

    #[error("match cannot start from phase {}", .phase.as_str())]
    AlreadyStarted { phase: MatchPhase },

    #[error("match is finished")]
    MatchFinished,
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            EngineError::NotStarted => "ENGINE_NOT_STARTED",
            EngineError::AlreadyStarted { .. } => "ENGINE_ALREADY_STARTED",
            EngineError::MatchFinished => "ENGINE_MATCH_FINISHED",
        }
    }
}
