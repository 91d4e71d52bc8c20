//! Match context: both fighters, the match clock and the lifecycle.

use std::fmt;

use crate::config::GameConfig;
use crate::geometry::Facing;
use crate::roster::{CharacterTemplate, ConfigError};

use super::character::Character;
use super::fighter::Fighter;

/// Seat of a fighter. Player one starts on the left facing right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    pub const fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerSlot::One => f.write_str("player 1"),
            PlayerSlot::Two => f.write_str("player 2"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchPhase {
    #[default]
    Setup,
    Active,
    Finished,
}

impl MatchPhase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MatchPhase::Setup => "setup",
            MatchPhase::Active => "active",
            MatchPhase::Finished => "finished",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchOutcome {
    Winner(PlayerSlot),
    /// Both fighters fell on the same tick.
    Draw,
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::Winner(slot) => write!(f, "{slot} wins"),
            MatchOutcome::Draw => f.write_str("draw"),
        }
    }
}

/// Authoritative state of one match.
///
/// Constructed in [`MatchPhase::Setup`]; all mutation goes through
/// [`BattleEngine`](crate::engine::BattleEngine).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Battle {
    pub(crate) config: GameConfig,
    pub(crate) fighters: [Fighter; 2],
    pub(crate) phase: MatchPhase,
    pub(crate) outcome: Option<MatchOutcome>,
    pub(crate) tick: u64,
    pub(crate) elapsed_ms: u64,
}

impl Battle {
    /// Builds both fighters from their templates at the arena spawn points.
    pub fn setup(
        config: GameConfig,
        one: &CharacterTemplate,
        two: &CharacterTemplate,
    ) -> Result<Self, ConfigError> {
        let arena = config.arena;
        let fighters = [
            Fighter::new(
                PlayerSlot::One,
                Character::from_template(one, &config)?,
                arena.spawn_one,
                Facing::Right,
            ),
            Fighter::new(
                PlayerSlot::Two,
                Character::from_template(two, &config)?,
                arena.spawn_two,
                Facing::Left,
            ),
        ];

        Ok(Self {
            config,
            fighters,
            phase: MatchPhase::Setup,
            outcome: None,
            tick: 0,
            elapsed_ms: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn fighter(&self, slot: PlayerSlot) -> &Fighter {
        &self.fighters[slot.index()]
    }

    pub(crate) fn fighter_mut(&mut self, slot: PlayerSlot) -> &mut Fighter {
        &mut self.fighters[slot.index()]
    }

    pub fn fighters(&self) -> &[Fighter; 2] {
        &self.fighters
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Match clock in milliseconds: `tick × tick_ms`.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn is_finished(&self) -> bool {
        self.phase == MatchPhase::Finished
    }
}
