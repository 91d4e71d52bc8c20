//! Character and skill templates.
//!
//! Templates are plain configuration records, deserialized from RON by the
//! content crate and turned into live [`Character`](crate::state::Character)
//! values at match setup.

use crate::config::GameConfig;

use super::ConfigError;

/// Largest accepted stat, growth rate, damage or mana cost.
pub const MAX_STAT: i32 = 1_000_000;
/// Longest accepted skill cooldown.
pub const MAX_COOLDOWN_SECS: f64 = 3_600.0;

/// Static definition of one skill slot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDefinition {
    pub name: String,
    pub base_damage: i32,
    pub mana_cost: i32,
    pub cooldown_secs: f64,
}

impl SkillDefinition {
    pub fn new(name: impl Into<String>, base_damage: i32, mana_cost: i32, cooldown_secs: f64) -> Self {
        Self {
            name: name.into(),
            base_damage,
            mana_cost,
            cooldown_secs,
        }
    }

    /// Cooldown rounded to whole milliseconds of match time.
    pub fn cooldown_ms(&self) -> u64 {
        (self.cooldown_secs * 1_000.0).round() as u64
    }

    fn validate(&self, character: &str) -> Result<(), ConfigError> {
        let invalid = |field| ConfigError::InvalidSkill {
            character: character.to_owned(),
            skill: self.name.clone(),
            field,
        };

        if !(0..=MAX_STAT).contains(&self.base_damage) {
            return Err(invalid("base_damage"));
        }
        if !(0..=MAX_STAT).contains(&self.mana_cost) {
            return Err(invalid("mana_cost"));
        }
        if !(0.0..=MAX_COOLDOWN_SECS).contains(&self.cooldown_secs) {
            return Err(invalid("cooldown_secs"));
        }
        Ok(())
    }
}

/// Base stats, growth rates and skill table of one archetype.
///
/// `mp` is the starting mana capacity; fighters enter the arena with zero
/// mana. `skills` is indexed by [`SkillSlot`](crate::state::SkillSlot).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterTemplate {
    pub canonical_name: String,
    pub evolution_names: Vec<String>,
    pub hp: i32,
    pub hp_increase_rate: i32,
    pub mp: i32,
    pub mp_increase_rate: i32,
    pub atk: i32,
    pub atk_increase_rate: i32,
    pub speed: i32,
    pub max_evolutions: u8,
    pub skills: Vec<SkillDefinition>,
}

impl CharacterTemplate {
    /// Checks the template can build a fighter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canonical_name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }

        let expected = usize::from(self.max_evolutions) + 1;
        if self.evolution_names.len() != expected {
            return Err(ConfigError::EvolutionLadder {
                character: self.canonical_name.clone(),
                expected,
                found: self.evolution_names.len(),
            });
        }

        let stats = [
            ("hp", self.hp, 1),
            ("hp_increase_rate", self.hp_increase_rate, 0),
            ("mp", self.mp, 0),
            ("mp_increase_rate", self.mp_increase_rate, 0),
            ("atk", self.atk, 0),
            ("atk_increase_rate", self.atk_increase_rate, 0),
            ("speed", self.speed, 0),
        ];
        if let Some((stat, value, _)) = stats
            .into_iter()
            .find(|(_, value, min)| !(*min..=MAX_STAT).contains(value))
        {
            return Err(ConfigError::InvalidStat {
                character: self.canonical_name.clone(),
                stat,
                value,
            });
        }

        if self.skills.len() != GameConfig::MAX_SKILLS {
            return Err(ConfigError::SkillTable {
                character: self.canonical_name.clone(),
                expected: GameConfig::MAX_SKILLS,
                found: self.skills.len(),
            });
        }
        for skill in &self.skills {
            skill.validate(&self.canonical_name)?;
        }

        Ok(())
    }
}
