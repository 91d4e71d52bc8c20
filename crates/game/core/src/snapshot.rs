//! BattleSnapshot - read-only view of a match for presentation layers.
//!
//! Snapshots are owned copies taken between ticks. Renderers, intent
//! providers and logs read them without holding a borrow on the
//! authoritative [`Battle`].

use crate::geometry::{Facing, Point, Rect};
use crate::state::{
    Battle, Fighter, MatchOutcome, MatchPhase, PlayerSlot, Projectile, ProjectilePhase, Skill,
    SkillSlot,
};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSnapshot {
    pub tick: u64,
    pub elapsed_ms: u64,
    pub phase: MatchPhase,
    /// Present once the match is finished.
    pub outcome: Option<MatchOutcome>,
    pub fighters: [FighterSnapshot; 2],
}

impl BattleSnapshot {
    pub fn fighter(&self, slot: PlayerSlot) -> &FighterSnapshot {
        &self.fighters[slot.index()]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterSnapshot {
    pub slot: PlayerSlot,
    pub canonical_name: String,
    pub evolution_name: String,
    pub evolution_index: u8,
    pub hp: i32,
    pub max_hp: i32,
    /// Bar scale: max HP at the last tier.
    pub hp_ceiling: i32,
    pub mp: i32,
    pub max_mp: i32,
    pub mp_ceiling: i32,
    pub aura: i32,
    pub max_aura: i32,
    pub position: Point,
    pub facing: Facing,
    pub busy: bool,
    pub aura_active: bool,
    pub punch_active: bool,
    pub skills: Vec<SkillSnapshot>,
    pub projectiles: Vec<ProjectileSnapshot>,
}

impl FighterSnapshot {
    pub fn skill(&self, slot: SkillSlot) -> Option<&SkillSnapshot> {
        self.skills.iter().find(|skill| skill.slot == slot)
    }

    pub fn projectile(&self, slot: SkillSlot) -> Option<&ProjectileSnapshot> {
        self.projectiles
            .iter()
            .find(|projectile| projectile.slot == slot)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSnapshot {
    pub slot: SkillSlot,
    pub name: String,
    pub mana_cost: i32,
    pub damage_dealt: i32,
    pub ready: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectileSnapshot {
    pub slot: SkillSlot,
    pub hitbox: Rect,
    pub phase: ProjectilePhase,
    pub collided: bool,
}

impl From<&Battle> for BattleSnapshot {
    fn from(battle: &Battle) -> Self {
        let [one, two] = battle.fighters();
        Self {
            tick: battle.tick(),
            elapsed_ms: battle.elapsed_ms(),
            phase: battle.phase(),
            outcome: battle.outcome(),
            fighters: [one.into(), two.into()],
        }
    }
}

impl From<&Fighter> for FighterSnapshot {
    fn from(fighter: &Fighter) -> Self {
        let character = fighter.character();
        Self {
            slot: fighter.slot(),
            canonical_name: character.canonical_name().to_owned(),
            evolution_name: character.evolution_name().to_owned(),
            evolution_index: character.evolution_index(),
            hp: character.hp(),
            max_hp: character.max_hp(),
            hp_ceiling: character.hp_ceiling(),
            mp: character.mp(),
            max_mp: character.max_mp(),
            mp_ceiling: character.mp_ceiling(),
            aura: character.aura(),
            max_aura: character.max_aura(),
            position: fighter.position(),
            facing: fighter.facing(),
            busy: fighter.is_busy(),
            aura_active: fighter.is_aura_active(),
            punch_active: fighter.is_punch_active(),
            skills: character
                .skills()
                .iter()
                .zip(SkillSlot::ALL)
                .map(SkillSnapshot::new)
                .collect(),
            projectiles: fighter.projectiles().map(ProjectileSnapshot::from).collect(),
        }
    }
}

impl SkillSnapshot {
    fn new((skill, slot): (&Skill, SkillSlot)) -> Self {
        Self {
            slot,
            name: skill.name().to_owned(),
            mana_cost: skill.mana_cost(),
            damage_dealt: skill.damage_dealt(),
            ready: skill.is_ready(),
        }
    }
}

impl From<&Projectile> for ProjectileSnapshot {
    fn from(projectile: &Projectile) -> Self {
        Self {
            slot: projectile.slot(),
            hitbox: projectile.hitbox(),
            phase: projectile.phase(),
            collided: projectile.collided(),
        }
    }
}

impl Battle {
    pub fn snapshot(&self) -> BattleSnapshot {
        self.into()
    }
}
