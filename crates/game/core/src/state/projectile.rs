//! Projectiles launched by the energyball, special and ultimate slots.
//!
//! A projectile spends a fixed windup charging in front of its caster, then
//! moves in fixed steps until it leaves the screen or its collision flag is
//! observed on a motion step. All deadlines are on the match clock.

use crate::config::GameConfig;
use crate::geometry::{Facing, Point, Rect};

use super::skill::SkillSlot;

/// Right edge past which rightward projectiles stop.
pub const FAR_RIGHT: i32 = 1200;
/// Left edge past which leftward projectiles stop.
pub const FAR_LEFT: i32 = 20;
/// Height at which a falling sphere hits the ground.
pub const GROUND_Y: i32 = 530;

/// Horizontal distance between caster and energyball sprite.
const ENERGYBALL_OFFSET: i32 = 30;
/// Gap between the caster's front edge and a rightward beam head.
const BEAM_HEAD_OFFSET: i32 = 45;
/// Distance from the caster's left edge back to a leftward beam head.
const BEAM_HEAD_OFFSET_LEFT: i32 = 130;
/// Beam head advance per motion step. The leftward beam is slower.
const BEAM_STEP_RIGHT: i32 = 31;
const BEAM_STEP_LEFT: i32 = 29;

/// Fixed timing of one projectile skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionProfile {
    pub windup_ms: u64,
    pub step_ms: u64,
    /// Caster regains control when the windup ends instead of at flight end.
    pub releases_busy_at_windup: bool,
}

impl MotionProfile {
    pub const ENERGYBALL: Self = Self {
        windup_ms: 600,
        step_ms: 40,
        releases_busy_at_windup: true,
    };
    pub const SPECIAL: Self = Self {
        windup_ms: 1_400,
        step_ms: 100,
        releases_busy_at_windup: false,
    };
    pub const ULTIMATE: Self = Self {
        windup_ms: 1_100,
        step_ms: 100,
        releases_busy_at_windup: false,
    };

    pub const fn for_slot(slot: SkillSlot) -> Option<Self> {
        match slot {
            SkillSlot::Punch => None,
            SkillSlot::Energyball => Some(Self::ENERGYBALL),
            SkillSlot::Special => Some(Self::SPECIAL),
            SkillSlot::Ultimate => Some(Self::ULTIMATE),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProjectilePhase {
    /// Charging; no hitbox yet.
    Windup { until_ms: u64 },
    /// Moving; the hitbox is live.
    Flight { next_step_ms: u64 },
}

/// What happened to a projectile while the clock advanced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    pub launched: bool,
    pub finished: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projectile {
    slot: SkillSlot,
    facing: Facing,
    phase: ProjectilePhase,
    /// Sprite top-left; for the beam, the top-left of its head.
    position: Point,
    /// Beam tail: the caster's front edge at launch.
    origin_x: i32,
    collided: bool,
}

impl Projectile {
    /// Starts the windup for `slot` in front of a caster at `caster`.
    ///
    /// Returns `None` for punch, which has no projectile.
    pub fn launch(slot: SkillSlot, caster: Point, facing: Facing, now_ms: u64) -> Option<Self> {
        let profile = MotionProfile::for_slot(slot)?;
        let size = GameConfig::SPRITE_SIZE;
        let sign = facing.sign();

        let (position, origin_x) = match slot {
            SkillSlot::Energyball => (caster.offset(ENERGYBALL_OFFSET * sign, 0), caster.x),
            SkillSlot::Special => {
                let origin_x = match facing {
                    Facing::Right => caster.x + size,
                    Facing::Left => caster.x,
                };
                let head_x = match facing {
                    Facing::Right => origin_x + BEAM_HEAD_OFFSET,
                    Facing::Left => caster.x - BEAM_HEAD_OFFSET_LEFT,
                };
                (Point::new(head_x, caster.y), origin_x)
            }
            SkillSlot::Ultimate => (caster.offset(0, -size), caster.x),
            SkillSlot::Punch => return None,
        };

        Some(Self {
            slot,
            facing,
            phase: ProjectilePhase::Windup {
                until_ms: now_ms + profile.windup_ms,
            },
            position,
            origin_x,
            collided: false,
        })
    }

    pub fn slot(&self) -> SkillSlot {
        self.slot
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn phase(&self) -> ProjectilePhase {
        self.phase
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn collided(&self) -> bool {
        self.collided
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.phase, ProjectilePhase::Flight { .. })
    }

    /// In flight and not yet consumed by a collision.
    pub fn is_live(&self) -> bool {
        self.is_in_flight() && !self.collided
    }

    pub(crate) fn mark_collided(&mut self) {
        self.collided = true;
    }

    /// Collision rectangle for the current position.
    pub fn hitbox(&self) -> Rect {
        let size = GameConfig::SPRITE_SIZE;
        match self.slot {
            SkillSlot::Energyball => Rect::sprite(self.position, size).shrink(40, 40),
            SkillSlot::Special => match self.facing {
                Facing::Right => Rect::new(
                    self.origin_x,
                    self.position.y,
                    self.position.x + size - self.origin_x,
                    size,
                ),
                Facing::Left => Rect::new(
                    self.position.x,
                    self.position.y,
                    self.origin_x - self.position.x,
                    size,
                ),
            },
            SkillSlot::Ultimate | SkillSlot::Punch => Rect::sprite(self.position, size),
        }
    }

    /// Runs windup and motion deadlines up to `now_ms`.
    pub(crate) fn advance(&mut self, now_ms: u64) -> Progress {
        let mut progress = Progress::default();
        let Some(profile) = MotionProfile::for_slot(self.slot) else {
            progress.finished = true;
            return progress;
        };

        if let ProjectilePhase::Windup { until_ms } = self.phase {
            if now_ms < until_ms {
                return progress;
            }
            self.phase = ProjectilePhase::Flight {
                next_step_ms: until_ms,
            };
            progress.launched = true;
        }

        while let ProjectilePhase::Flight { next_step_ms } = self.phase {
            if next_step_ms > now_ms {
                break;
            }
            if self.collided || !self.in_range() {
                progress.finished = true;
                break;
            }
            self.step();
            self.phase = ProjectilePhase::Flight {
                next_step_ms: next_step_ms + profile.step_ms,
            };
        }

        progress
    }

    fn in_range(&self) -> bool {
        match self.slot {
            SkillSlot::Ultimate => self.position.y < GROUND_Y,
            _ => match self.facing {
                Facing::Right => self.position.x < FAR_RIGHT,
                Facing::Left => self.position.x > FAR_LEFT,
            },
        }
    }

    fn step(&mut self) {
        let sign = self.facing.sign();
        self.position = match self.slot {
            SkillSlot::Energyball => self.position.offset(50 * sign, 0),
            SkillSlot::Special => match self.facing {
                Facing::Right => self.position.offset(BEAM_STEP_RIGHT, 0),
                Facing::Left => self.position.offset(-BEAM_STEP_LEFT, 0),
            },
            SkillSlot::Ultimate => self.position.offset(75 * sign, 50),
            SkillSlot::Punch => self.position,
        };
    }
}
