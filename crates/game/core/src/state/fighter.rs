//! A character placed in the arena.

use bitflags::bitflags;

use crate::action::Direction;
use crate::config::{ArenaBounds, GameConfig};
use crate::geometry::{Facing, Point, Rect};

use super::battle::PlayerSlot;
use super::character::Character;
use super::projectile::Projectile;
use super::skill::SkillSlot;

/// Inset applied on every side of the 100×100 body sprite.
const BODY_INSET: i32 = 20;
/// Movement speed is reduced by this amount per step.
const STEP_PENALTY: i32 = 2;

bitflags! {
    /// Control flags toggled by the dispatcher.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct FighterFlags: u8 {
        /// An animation owns the fighter; new aura/punch/skill starts are refused.
        const ANIMATION_BUSY = 1 << 0;
        const AURA_ACTIVE = 1 << 1;
        const PUNCH_ACTIVE = 1 << 2;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    slot: PlayerSlot,
    character: Character,
    position: Point,
    facing: Facing,
    flags: FighterFlags,
    projectiles: [Option<Projectile>; GameConfig::MAX_PROJECTILES],
    last_mana_notice_ms: Option<u64>,
}

impl Fighter {
    pub fn new(slot: PlayerSlot, character: Character, position: Point, facing: Facing) -> Self {
        Self {
            slot,
            character,
            position,
            facing,
            flags: FighterFlags::empty(),
            projectiles: [None, None, None],
            last_mana_notice_ms: None,
        }
    }

    pub fn slot(&self) -> PlayerSlot {
        self.slot
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub(crate) fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn flags(&self) -> FighterFlags {
        self.flags
    }

    pub fn is_busy(&self) -> bool {
        self.flags.contains(FighterFlags::ANIMATION_BUSY)
    }

    pub fn is_aura_active(&self) -> bool {
        self.flags.contains(FighterFlags::AURA_ACTIVE)
    }

    pub fn is_punch_active(&self) -> bool {
        self.flags.contains(FighterFlags::PUNCH_ACTIVE)
    }

    pub(crate) fn set_flag(&mut self, flag: FighterFlags, on: bool) {
        self.flags.set(flag, on);
    }

    /// Whether `slot` is currently in use: punch held or projectile alive.
    pub fn is_skill_active(&self, slot: SkillSlot) -> bool {
        match slot.projectile_index() {
            None => self.is_punch_active(),
            Some(index) => self.projectiles[index].is_some(),
        }
    }

    /// Any skill in use; blocks every new intent.
    pub fn any_skill_active(&self) -> bool {
        self.is_punch_active() || self.projectiles.iter().any(Option::is_some)
    }

    pub fn projectile(&self, slot: SkillSlot) -> Option<&Projectile> {
        slot.projectile_index()
            .and_then(|index| self.projectiles[index].as_ref())
    }

    pub(crate) fn projectile_mut(&mut self, slot: SkillSlot) -> Option<&mut Projectile> {
        slot.projectile_index()
            .and_then(|index| self.projectiles[index].as_mut())
    }

    pub fn projectiles(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter().flatten()
    }

    /// Starts a projectile for `slot`, replacing nothing if one is alive.
    pub(crate) fn launch(&mut self, slot: SkillSlot, now_ms: u64) -> bool {
        let Some(index) = slot.projectile_index() else {
            return false;
        };
        if self.projectiles[index].is_some() {
            return false;
        }
        self.projectiles[index] = Projectile::launch(slot, self.position, self.facing, now_ms);
        self.projectiles[index].is_some()
    }

    pub(crate) fn retire_projectile(&mut self, slot: SkillSlot) -> Option<Projectile> {
        slot.projectile_index()
            .and_then(|index| self.projectiles[index].take())
    }

    /// Body hitbox.
    pub fn body(&self) -> Rect {
        Rect::sprite(self.position, GameConfig::SPRITE_SIZE).shrink(BODY_INSET, BODY_INSET)
    }

    /// Moves one step; a step that would leave the arena is discarded.
    pub fn step(&mut self, direction: Direction, arena: &ArenaBounds) -> bool {
        let distance = self.character.speed() - STEP_PENALTY;
        let (dx, dy) = direction.delta();
        let next = self.position.offset(dx * distance, dy * distance);
        if arena.contains(next) {
            self.position = next;
            true
        } else {
            false
        }
    }

    /// Rate limiter for mana notifications: at most one per `window_ms`.
    pub(crate) fn take_mana_notice(&mut self, now_ms: u64, window_ms: u64) -> bool {
        match self.last_mana_notice_ms {
            Some(last) if now_ms.saturating_sub(last) < window_ms => false,
            _ => {
                self.last_mana_notice_ms = Some(now_ms);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::goku_template;

    fn fighter_at(position: Point) -> Fighter {
        let config = GameConfig::default();
        let character = Character::from_template(&goku_template(), &config).unwrap();
        Fighter::new(PlayerSlot::One, character, position, Facing::Right)
    }

    #[test]
    fn step_moves_speed_minus_two() {
        let arena = ArenaBounds::default();
        let mut fighter = fighter_at(Point::new(500, 400));
        assert!(fighter.step(Direction::Right, &arena));
        assert!(fighter.step(Direction::Up, &arena));
        assert_eq!(fighter.position(), Point::new(506, 394));
    }

    #[test]
    fn step_outside_arena_is_discarded() {
        let arena = ArenaBounds::default();
        let mut fighter = fighter_at(Point::new(104, 152));
        assert!(!fighter.step(Direction::Left, &arena));
        assert!(!fighter.step(Direction::Up, &arena));
        assert_eq!(fighter.position(), Point::new(104, 152));
    }

    #[test]
    fn body_is_inset_sprite() {
        let fighter = fighter_at(Point::new(120, 400));
        assert_eq!(fighter.body(), Rect::new(140, 420, 60, 60));
    }

    #[test]
    fn one_projectile_per_slot() {
        let mut fighter = fighter_at(Point::new(120, 400));
        assert!(!fighter.any_skill_active());
        assert!(fighter.launch(SkillSlot::Energyball, 0));
        assert!(!fighter.launch(SkillSlot::Energyball, 30));
        assert!(!fighter.launch(SkillSlot::Punch, 30));
        assert!(fighter.is_skill_active(SkillSlot::Energyball));
        assert!(fighter.any_skill_active());

        assert!(fighter.retire_projectile(SkillSlot::Energyball).is_some());
        assert!(!fighter.any_skill_active());
    }

    #[test]
    fn mana_notice_is_rate_limited() {
        let mut fighter = fighter_at(Point::new(120, 400));
        assert!(fighter.take_mana_notice(30, 1_000));
        assert!(!fighter.take_mana_notice(60, 1_000));
        assert!(!fighter.take_mana_notice(1_020, 1_000));
        assert!(fighter.take_mana_notice(1_030, 1_000));
    }
}
