//! Playable archetypes and their static skill tables.
//!
//! A [`Roster`] is validated once when it is built, so every template handed
//! out by [`Roster::get`] is guaranteed to construct a fighter.

mod error;
mod template;

pub use error::ConfigError;
pub use template::{CharacterTemplate, MAX_COOLDOWN_SECS, MAX_STAT, SkillDefinition};

/// Validated collection of character templates keyed by canonical name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    characters: Vec<CharacterTemplate>,
}

impl Roster {
    /// Validates every template and rejects duplicate canonical names.
    pub fn new(characters: Vec<CharacterTemplate>) -> Result<Self, ConfigError> {
        for (index, template) in characters.iter().enumerate() {
            template.validate()?;
            if characters[..index]
                .iter()
                .any(|other| other.canonical_name == template.canonical_name)
            {
                return Err(ConfigError::DuplicateCharacter {
                    name: template.canonical_name.clone(),
                });
            }
        }
        Ok(Self { characters })
    }

    pub fn get(&self, canonical_name: &str) -> Result<&CharacterTemplate, ConfigError> {
        self.characters
            .iter()
            .find(|template| template.canonical_name == canonical_name)
            .ok_or_else(|| ConfigError::UnknownCharacter {
                name: canonical_name.to_owned(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.characters
            .iter()
            .map(|template| template.canonical_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::test_utils::{freezer_template, goku_template};

    #[test]
    fn roster_lookup_by_canonical_name() {
        let roster = Roster::new(vec![goku_template(), freezer_template()]).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get("freezer").unwrap().speed, freezer_template().speed);
        assert_eq!(
            roster.get("cell"),
            Err(ConfigError::UnknownCharacter {
                name: "cell".to_owned()
            })
        );
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = Roster::new(vec![goku_template(), goku_template()]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateCharacter {
                name: "goku".to_owned()
            }
        );
    }

    #[test]
    fn evolution_ladder_must_cover_every_tier() {
        let mut template = goku_template();
        template.evolution_names.pop();
        let err = template.validate().unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_EVOLUTION_LADDER");
        assert_eq!(err.severity(), crate::error::ErrorSeverity::Fatal);
    }

    #[test]
    fn skill_table_must_fill_every_slot() {
        let mut template = freezer_template();
        template.skills.truncate(3);
        assert!(matches!(
            template.validate(),
            Err(ConfigError::SkillTable {
                expected: 4,
                found: 3,
                ..
            })
        ));
    }

    #[test]
    fn negative_values_are_rejected() {
        let mut template = goku_template();
        template.atk = -1;
        assert!(matches!(
            template.validate(),
            Err(ConfigError::InvalidStat { stat: "atk", .. })
        ));

        let mut template = goku_template();
        template.skills[2].cooldown_secs = f64::NAN;
        assert!(matches!(
            template.validate(),
            Err(ConfigError::InvalidSkill {
                field: "cooldown_secs",
                ..
            })
        ));
    }

    #[test]
    fn oversized_values_are_rejected() {
        let mut template = goku_template();
        template.skills[1].cooldown_secs = 1e18;
        template.skills[1].mana_cost = 0;
        assert!(matches!(
            template.validate(),
            Err(ConfigError::InvalidSkill {
                field: "cooldown_secs",
                ..
            })
        ));

        let mut template = goku_template();
        template.skills[1].cooldown_secs = MAX_COOLDOWN_SECS;
        assert!(template.validate().is_ok());

        let mut template = goku_template();
        template.skills[3].base_damage = i32::MAX;
        assert!(matches!(
            template.validate(),
            Err(ConfigError::InvalidSkill {
                field: "base_damage",
                ..
            })
        ));

        let mut template = goku_template();
        template.hp_increase_rate = i32::MAX;
        assert!(matches!(
            template.validate(),
            Err(ConfigError::InvalidStat {
                stat: "hp_increase_rate",
                value: i32::MAX,
                ..
            })
        ));

        let mut template = goku_template();
        template.mp = MAX_STAT + 1;
        assert!(matches!(
            template.validate(),
            Err(ConfigError::InvalidStat { stat: "mp", .. })
        ));
    }
}
