//! Character stats, evolution and resource rules.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::roster::{CharacterTemplate, ConfigError, SkillDefinition};

use super::error::CharacterError;
use super::skill::{Skill, SkillSlot};

/// Combat stats of one fighter.
///
/// Mana and aura writes are guarded: mana only commits while it stays below
/// the current capacity, aura only while the character can still evolve and
/// the value does not exceed the aura ceiling. HP is never clamped, so a
/// negative value is what marks a defeat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    canonical_name: String,
    evolution_names: Vec<String>,
    evolution_index: u8,
    max_evolutions: u8,

    hp: i32,
    max_hp: i32,
    hp_increase_rate: i32,
    hp_ceiling: i32,

    mp: i32,
    max_mp: i32,
    mp_increase_rate: i32,
    mp_ceiling: i32,

    atk: i32,
    atk_increase_rate: i32,
    speed: i32,

    aura: i32,
    max_aura: i32,
    aura_step: i32,

    skills: ArrayVec<Skill, { GameConfig::MAX_SKILLS }>,
}

impl Character {
    /// Builds a character with every skill of its template.
    pub fn from_template(template: &CharacterTemplate, config: &GameConfig) -> Result<Self, ConfigError> {
        template.validate()?;

        let mut character = Self::new(template, config);
        for definition in &template.skills {
            character.add_skill(definition)?;
        }
        Ok(character)
    }

    /// Builds a character from base stats only, without skills.
    pub fn new(template: &CharacterTemplate, config: &GameConfig) -> Self {
        let tiers = i32::from(template.max_evolutions);
        Self {
            canonical_name: template.canonical_name.clone(),
            evolution_names: template.evolution_names.clone(),
            evolution_index: 0,
            max_evolutions: template.max_evolutions,
            hp: template.hp,
            max_hp: template.hp,
            hp_increase_rate: template.hp_increase_rate,
            hp_ceiling: template
                .hp
                .saturating_add(template.hp_increase_rate.saturating_mul(tiers)),
            mp: 0,
            max_mp: template.mp,
            mp_increase_rate: template.mp_increase_rate,
            mp_ceiling: template.mp_increase_rate.saturating_mul(tiers),
            atk: template.atk,
            atk_increase_rate: template.atk_increase_rate,
            speed: template.speed,
            aura: GameConfig::BASE_AURA,
            max_aura: GameConfig::BASE_MAX_AURA,
            aura_step: config.evolution_aura_step,
            skills: ArrayVec::new(),
        }
    }

    /// Appends a skill in the next free slot.
    pub fn add_skill(&mut self, definition: &SkillDefinition) -> Result<(), ConfigError> {
        let skill = Skill::new(definition, self.atk);
        self.skills
            .try_push(skill)
            .map_err(|_| ConfigError::SkillTable {
                character: self.canonical_name.clone(),
                expected: GameConfig::MAX_SKILLS,
                found: GameConfig::MAX_SKILLS + 1,
            })
    }

    // ===== rules =====

    /// Advances one evolution tier.
    ///
    /// Rejected at the last tier with every stat left untouched.
    pub fn evolve(&mut self) -> Result<(), CharacterError> {
        if self.is_max_evolution() {
            return Err(CharacterError::InvalidEvolution {
                max_evolutions: self.max_evolutions,
            });
        }

        self.evolution_index += 1;
        self.max_hp += self.hp_increase_rate;
        self.hp += self.hp_increase_rate;
        self.max_mp += self.mp_increase_rate;
        self.mp += self.mp_increase_rate;
        self.atk += self.atk_increase_rate;
        self.max_aura += self.aura_step;
        self.aura = GameConfig::BASE_AURA;

        let atk = self.atk;
        for skill in &mut self.skills {
            skill.recompute_damage(atk);
        }
        Ok(())
    }

    /// Applies a mana delta.
    ///
    /// Fails when the result would be negative. A non-negative result is
    /// committed only while it stays strictly below the mana capacity; a
    /// result at or above capacity is dropped silently.
    pub fn try_spend_or_gain_mana(&mut self, delta: i32) -> Result<(), CharacterError> {
        let next = self.mp + delta;
        if next < 0 {
            return Err(CharacterError::InsufficientResource { mp: self.mp, delta });
        }
        if next < self.max_mp {
            self.mp = next;
        }
        Ok(())
    }

    /// Sets aura if the character can still evolve and `value` fits the ceiling.
    pub fn set_aura(&mut self, value: i32) {
        if !self.is_max_evolution() && value <= self.max_aura {
            self.aura = value;
        }
    }

    pub fn gain_aura(&mut self, amount: i32) {
        self.set_aura(self.aura + amount);
    }

    pub fn reset_aura(&mut self) {
        self.aura = GameConfig::BASE_AURA;
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }

    /// HP strictly below zero; a character at exactly zero is still alive.
    pub fn is_defeated(&self) -> bool {
        self.hp < 0
    }

    pub fn is_max_evolution(&self) -> bool {
        self.evolution_index >= self.max_evolutions
    }

    /// Aura has reached the ceiling and another tier is available.
    pub fn is_ready_to_evolve(&self) -> bool {
        !self.is_max_evolution() && self.aura >= self.max_aura
    }

    // ===== accessors =====

    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }

    pub fn evolution_index(&self) -> u8 {
        self.evolution_index
    }

    pub fn max_evolutions(&self) -> u8 {
        self.max_evolutions
    }

    pub fn evolution_name(&self) -> &str {
        self.evolution_names
            .get(usize::from(self.evolution_index))
            .map_or(self.canonical_name.as_str(), String::as_str)
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    pub fn hp_increase_rate(&self) -> i32 {
        self.hp_increase_rate
    }

    /// Max HP at the last evolution tier.
    pub fn hp_ceiling(&self) -> i32 {
        self.hp_ceiling
    }

    pub fn mp(&self) -> i32 {
        self.mp
    }

    pub fn max_mp(&self) -> i32 {
        self.max_mp
    }

    pub fn mp_increase_rate(&self) -> i32 {
        self.mp_increase_rate
    }

    /// Mana gained over every evolution tier, used to scale mana bars.
    pub fn mp_ceiling(&self) -> i32 {
        self.mp_ceiling
    }

    pub fn atk(&self) -> i32 {
        self.atk
    }

    pub fn atk_increase_rate(&self) -> i32 {
        self.atk_increase_rate
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn aura(&self) -> i32 {
        self.aura
    }

    pub fn max_aura(&self) -> i32 {
        self.max_aura
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn skill(&self, slot: SkillSlot) -> Option<&Skill> {
        self.skills.get(slot.index())
    }

    pub(crate) fn skill_mut(&mut self, slot: SkillSlot) -> Option<&mut Skill> {
        self.skills.get_mut(slot.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::goku_template;

    fn goku() -> Character {
        Character::from_template(&goku_template(), &GameConfig::default()).unwrap()
    }

    fn skill_damages(character: &Character) -> Vec<i32> {
        character.skills().iter().map(Skill::damage_dealt).collect()
    }

    #[test]
    fn base_stats_come_from_template() {
        let goku = goku();
        assert_eq!(goku.canonical_name(), "goku");
        assert_eq!(goku.max_evolutions(), 5);
        assert_eq!(goku.hp(), 900);
        assert_eq!(goku.hp_increase_rate(), 210);
        assert_eq!(goku.max_mp(), 800);
        assert_eq!(goku.mp_increase_rate(), 150);
        assert_eq!(goku.atk(), 4);
        assert_eq!(goku.atk_increase_rate(), 3);
        assert_eq!(goku.speed(), 8);
        assert_eq!(goku.mp(), 0);
        assert_eq!(goku.aura(), 1);
        assert_eq!(goku.max_aura(), 100);
        assert_eq!(goku.hp_ceiling(), 900 + 210 * 5);
        assert_eq!(goku.mp_ceiling(), 150 * 5);
        assert_eq!(goku.evolution_name(), "Goku");
    }

    #[test]
    fn skill_damage_adds_owner_attack() {
        let mut character = Character::new(&goku_template(), &GameConfig::default());
        character
            .add_skill(&SkillDefinition::new("TestSkill", 50, 100, 20.0))
            .unwrap();
        assert_eq!(character.skills()[0].damage_dealt(), 54);
    }

    #[test]
    fn fifth_skill_is_rejected() {
        let mut character = goku();
        let err = character
            .add_skill(&SkillDefinition::new("Extra", 1, 1, 1.0))
            .unwrap_err();
        assert!(matches!(err, ConfigError::SkillTable { .. }));
        assert_eq!(character.skills().len(), GameConfig::MAX_SKILLS);
    }

    #[test]
    fn evolve_applies_growth_rates() {
        let mut goku = goku();
        goku.set_aura(60);
        goku.evolve().unwrap();

        assert_eq!(goku.evolution_index(), 1);
        assert_eq!(goku.evolution_name(), "Kaioken");
        assert_eq!(goku.hp(), 1110);
        assert_eq!(goku.max_hp(), 1110);
        assert_eq!(goku.mp(), 150);
        assert_eq!(goku.max_mp(), 950);
        assert_eq!(goku.atk(), 7);
        assert_eq!(goku.max_aura(), 140);
        assert_eq!(goku.aura(), 1);
        assert_eq!(skill_damages(&goku), vec![7, 37, 157, 307]);
    }

    #[test]
    fn evolve_at_last_tier_is_rejected_without_side_effects() {
        let mut goku = goku();
        for _ in 0..5 {
            goku.evolve().unwrap();
        }
        let before = goku.clone();

        assert_eq!(
            goku.evolve(),
            Err(CharacterError::InvalidEvolution { max_evolutions: 5 })
        );
        assert_eq!(goku, before);
        assert_eq!(goku.evolution_name(), "Super Saiyan Blue");
    }

    #[test]
    fn negative_mana_is_rejected() {
        let mut goku = goku();
        goku.try_spend_or_gain_mana(40).unwrap();

        let err = goku.try_spend_or_gain_mana(-75).unwrap_err();
        assert_eq!(err, CharacterError::InsufficientResource { mp: 40, delta: -75 });
        assert_eq!(goku.mp(), 40);

        goku.try_spend_or_gain_mana(-40).unwrap();
        assert_eq!(goku.mp(), 0);
    }

    #[test]
    fn mana_never_reaches_capacity() {
        let mut goku = goku();
        goku.try_spend_or_gain_mana(799).unwrap();
        assert_eq!(goku.mp(), 799);

        // Landing exactly on capacity is dropped, not clamped.
        goku.try_spend_or_gain_mana(1).unwrap();
        assert_eq!(goku.mp(), 799);
        goku.try_spend_or_gain_mana(4).unwrap();
        assert_eq!(goku.mp(), 799);
    }

    #[test]
    fn aura_gain_and_reset() {
        let mut goku = goku();
        goku.set_aura(49);
        goku.gain_aura(1);
        assert_eq!(goku.aura(), 50);
        goku.reset_aura();
        assert_eq!(goku.aura(), 1);
    }

    #[test]
    fn aura_respects_ceiling_and_last_tier() {
        let mut goku = goku();
        goku.set_aura(100);
        assert!(goku.is_ready_to_evolve());
        goku.gain_aura(1);
        assert_eq!(goku.aura(), 100);

        for _ in 0..5 {
            goku.evolve().unwrap();
        }
        goku.gain_aura(10);
        assert_eq!(goku.aura(), 1);
        assert!(!goku.is_ready_to_evolve());

        goku.set_aura(30);
        goku.reset_aura();
        assert_eq!(goku.aura(), 1);
    }

    #[test]
    fn defeat_requires_negative_hp() {
        let mut goku = goku();
        goku.take_damage(900);
        assert_eq!(goku.hp(), 0);
        assert!(!goku.is_defeated());
        goku.take_damage(1);
        assert!(goku.is_defeated());
    }
}
