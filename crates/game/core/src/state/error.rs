//! Character mutation errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised by [`Character`](super::Character) mutation rules.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterError {
    /// Mana would become negative.
    #[error("insufficient mana: have {mp}, change {delta}")]
    InsufficientResource { mp: i32, delta: i32 },

    /// Character is already at its last evolution.
    #[error("cannot evolve past tier {max_evolutions}")]
    InvalidEvolution { max_evolutions: u8 },
}

impl GameError for CharacterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            CharacterError::InsufficientResource { .. } => ErrorSeverity::Recoverable,
            CharacterError::InvalidEvolution { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            CharacterError::InsufficientResource { .. } => "CHARACTER_INSUFFICIENT_RESOURCE",
            CharacterError::InvalidEvolution { .. } => "CHARACTER_INVALID_EVOLUTION",
        }
    }
}
