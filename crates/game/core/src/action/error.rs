//! Skill invocation errors.
//!
//! Every variant is recovered inside the tick: the intent is dropped and the
//! match continues.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{CharacterError, SkillSlot};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DispatchError {
    /// Invocation while the slot is cooling down.
    #[error("{slot} is not ready")]
    SkillNotReady { slot: SkillSlot },

    /// The mana cost exceeds the fighter's current mana.
    #[error("not enough mana for {slot}")]
    InsufficientResource {
        slot: SkillSlot,
        #[source]
        source: CharacterError,
    },

    /// The fighter has no skill bound to the slot.
    #[error("no skill bound to {slot}")]
    MissingSkill { slot: SkillSlot },
}

impl GameError for DispatchError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            DispatchError::SkillNotReady { .. } | DispatchError::InsufficientResource { .. } => {
                ErrorSeverity::Recoverable
            }
            DispatchError::MissingSkill { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::SkillNotReady { .. } => "DISPATCH_SKILL_NOT_READY",
            DispatchError::InsufficientResource { .. } => "DISPATCH_INSUFFICIENT_RESOURCE",
            DispatchError::MissingSkill { .. } => "DISPATCH_MISSING_SKILL",
        }
    }
}
