use crate::geometry::Point;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Fixed period of one simulation tick, in milliseconds.
    pub tick_ms: u64,
    /// Aura gained per tick while aura-hold is active.
    pub aura_per_tick: i32,
    /// Mana gained per tick while aura-hold is active.
    pub aura_mana_per_tick: i32,
    /// Minimum spacing between two mana notifications for the same player.
    pub mana_notice_window_ms: u64,
    /// Increase of the aura ceiling on every evolution.
    pub evolution_aura_step: i32,
    /// Playable area for fighter movement.
    pub arena: ArenaBounds,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Skill slots per fighter: punch, energyball, special, ultimate.
    pub const MAX_SKILLS: usize = 4;
    /// Slots that launch projectiles (every skill except punch).
    pub const MAX_PROJECTILES: usize = 3;
    /// Side length of the square fighter and projectile sprites.
    pub const SPRITE_SIZE: i32 = 100;
    /// Aura value after a reset and at match start.
    pub const BASE_AURA: i32 = 1;
    /// Aura ceiling before the first evolution.
    pub const BASE_MAX_AURA: i32 = 100;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TICK_MS: u64 = 30;
    pub const DEFAULT_AURA_PER_TICK: i32 = 1;
    pub const DEFAULT_AURA_MANA_PER_TICK: i32 = 4;
    pub const DEFAULT_MANA_NOTICE_WINDOW_MS: u64 = 1_000;
    pub const DEFAULT_EVOLUTION_AURA_STEP: i32 = 40;

    pub fn new() -> Self {
        Self {
            tick_ms: Self::DEFAULT_TICK_MS,
            aura_per_tick: Self::DEFAULT_AURA_PER_TICK,
            aura_mana_per_tick: Self::DEFAULT_AURA_MANA_PER_TICK,
            mana_notice_window_ms: Self::DEFAULT_MANA_NOTICE_WINDOW_MS,
            evolution_aura_step: Self::DEFAULT_EVOLUTION_AURA_STEP,
            arena: ArenaBounds::default(),
        }
    }

    pub fn with_tick_ms(tick_ms: u64) -> Self {
        Self {
            tick_ms,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Movement limits and spawn points of the arena.
///
/// Bounds apply to the top-left corner of a fighter's body and are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
    pub spawn_one: Point,
    pub spawn_two: Point,
}

impl ArenaBounds {
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x && point.x <= self.max_x && point.y >= self.min_y && point.y <= self.max_y
    }
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            min_x: 100,
            max_x: 1160,
            min_y: 150,
            max_y: 600,
            spawn_one: Point::new(120, 400),
            spawn_two: Point::new(1060, 400),
        }
    }
}
