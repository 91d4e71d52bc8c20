//! Deterministic combat rules shared by the runtime and offline tools.
//!
//! `game-core` defines the canonical rules (fighters, skills, projectiles,
//! intent dispatch, collisions) and exposes pure APIs driven by a simulated
//! match clock. All state mutation flows through [`engine::BattleEngine`],
//! and supporting crates depend on the types re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod geometry;
pub mod roster;
pub mod snapshot;
pub mod state;

pub use action::{ActionDispatcher, Direction, DispatchError, Dispatched, Intents};
pub use combat::CollisionResolver;
pub use config::{ArenaBounds, GameConfig};
pub use engine::{BattleEngine, EngineError, TickReport};
pub use error::{ErrorSeverity, GameError};
pub use events::CombatEvent;
pub use geometry::{Facing, Point, Rect};
pub use roster::{CharacterTemplate, ConfigError, Roster, SkillDefinition};
pub use snapshot::{BattleSnapshot, FighterSnapshot, ProjectileSnapshot, SkillSnapshot};
pub use state::{
    Battle, Character, CharacterError, Cooldown, Fighter, FighterFlags, MatchOutcome, MatchPhase,
    MotionProfile, PlayerSlot, Projectile, ProjectilePhase, Skill, SkillSlot,
};
