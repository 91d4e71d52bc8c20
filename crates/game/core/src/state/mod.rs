//! Canonical match state.
//!
//! `state` owns the data that the engine mutates: characters with their
//! skills, fighters placed in the arena, in-flight projectiles and the match
//! context that ties them to the clock.
mod battle;
mod character;
mod error;
mod fighter;
mod projectile;
mod skill;

pub use battle::{Battle, MatchOutcome, MatchPhase, PlayerSlot};
pub use character::Character;
pub use error::CharacterError;
pub use fighter::{Fighter, FighterFlags};
pub use projectile::{
    FAR_LEFT, FAR_RIGHT, GROUND_Y, MotionProfile, Progress, Projectile, ProjectilePhase,
};
pub use skill::{Cooldown, Skill, SkillSlot};
