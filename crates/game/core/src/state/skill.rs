//! Skill instances and their cooldown state machine.

use strum::{Display, EnumIter, IntoStaticStr};

use crate::roster::SkillDefinition;

/// Fixed skill slots. The discriminant is the index into a skill table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SkillSlot {
    Punch = 0,
    Energyball = 1,
    Special = 2,
    Ultimate = 3,
}

impl SkillSlot {
    pub const ALL: [SkillSlot; 4] = [
        SkillSlot::Punch,
        SkillSlot::Energyball,
        SkillSlot::Special,
        SkillSlot::Ultimate,
    ];

    /// Slots that launch a projectile, in collision-check order.
    pub const PROJECTILES: [SkillSlot; 3] = [SkillSlot::Energyball, SkillSlot::Special, SkillSlot::Ultimate];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Index into a fighter's projectile table, `None` for punch.
    pub const fn projectile_index(self) -> Option<usize> {
        match self {
            SkillSlot::Punch => None,
            SkillSlot::Energyball => Some(0),
            SkillSlot::Special => Some(1),
            SkillSlot::Ultimate => Some(2),
        }
    }
}

/// Binary cooldown with a deadline on the match clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cooldown {
    #[default]
    Ready,
    Cooling {
        until_ms: u64,
    },
}

impl Cooldown {
    pub const fn is_ready(&self) -> bool {
        matches!(self, Cooldown::Ready)
    }

    /// Transitions to `Ready` once the deadline has passed.
    ///
    /// Returns `true` only on the transition itself.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match *self {
            Cooldown::Cooling { until_ms } if now_ms >= until_ms => {
                *self = Cooldown::Ready;
                true
            }
            _ => false,
        }
    }
}

/// A skill owned by a character.
///
/// `damage_dealt` is derived from the owner's attack and must be refreshed
/// through [`Skill::recompute_damage`] whenever that attack changes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    name: String,
    base_damage: i32,
    mana_cost: i32,
    cooldown_ms: u64,
    damage_dealt: i32,
    cooldown: Cooldown,
}

impl Skill {
    pub fn new(definition: &SkillDefinition, owner_atk: i32) -> Self {
        Self {
            name: definition.name.clone(),
            base_damage: definition.base_damage,
            mana_cost: definition.mana_cost,
            cooldown_ms: definition.cooldown_ms(),
            damage_dealt: definition.base_damage + owner_atk,
            cooldown: Cooldown::Ready,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_damage(&self) -> i32 {
        self.base_damage
    }

    pub fn mana_cost(&self) -> i32 {
        self.mana_cost
    }

    pub fn cooldown_ms(&self) -> u64 {
        self.cooldown_ms
    }

    pub fn damage_dealt(&self) -> i32 {
        self.damage_dealt
    }

    pub fn cooldown(&self) -> Cooldown {
        self.cooldown
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown.is_ready()
    }

    pub fn recompute_damage(&mut self, owner_atk: i32) {
        self.damage_dealt = self.base_damage + owner_atk;
    }

    /// Ready → Cooling with deadline `now + cooldown`.
    pub(crate) fn start_cooldown(&mut self, now_ms: u64) {
        self.cooldown = Cooldown::Cooling {
            until_ms: now_ms.saturating_add(self.cooldown_ms),
        };
    }

    pub(crate) fn poll_cooldown(&mut self, now_ms: u64) -> bool {
        self.cooldown.poll(now_ms)
    }
}
