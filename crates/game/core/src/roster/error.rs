//! Configuration validation errors.
//!
//! Raised while turning character and skill configuration into a match. These
//! are the only errors that prevent a battle from becoming active.

use crate::error::{ErrorSeverity, GameError};

/// Malformed or missing character/skill configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ConfigError {
    /// No character with this canonical name exists in the roster.
    #[error("character '{name}' not found in roster")]
    UnknownCharacter { name: String },

    /// Two roster entries share the same canonical name.
    #[error("character '{name}' is defined more than once")]
    DuplicateCharacter { name: String },

    /// Canonical name is empty.
    #[error("character canonical name must not be empty")]
    EmptyName,

    /// The evolution ladder must hold the base form plus one name per tier.
    #[error("character '{character}' expects {expected} evolution names, found {found}")]
    EvolutionLadder {
        character: String,
        expected: usize,
        found: usize,
    },

    /// A character needs exactly one skill per slot.
    #[error("character '{character}' expects {expected} skills, found {found}")]
    SkillTable {
        character: String,
        expected: usize,
        found: usize,
    },

    /// A base stat or growth rate is out of range.
    #[error("character '{character}' has invalid {stat}: {value}")]
    InvalidStat {
        character: String,
        stat: &'static str,
        value: i32,
    },

    /// A skill has a negative damage/cost or a non-finite cooldown.
    #[error("skill '{skill}' of '{character}' has invalid {field}")]
    InvalidSkill {
        character: String,
        skill: String,
        field: &'static str,
    },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use ConfigError::*;
        match self {
            UnknownCharacter { .. } => "CONFIG_UNKNOWN_CHARACTER",
            DuplicateCharacter { .. } => "CONFIG_DUPLICATE_CHARACTER",
            EmptyName => "CONFIG_EMPTY_NAME",
            EvolutionLadder { .. } => "CONFIG_EVOLUTION_LADDER",
            SkillTable { .. } => "CONFIG_SKILL_TABLE",
            InvalidStat { .. } => "CONFIG_INVALID_STAT",
            InvalidSkill { .. } => "CONFIG_INVALID_SKILL",
        }
    }
}
