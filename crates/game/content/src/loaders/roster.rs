//! Character roster loader.

use std::path::Path;

use anyhow::Context;

use game_core::{CharacterTemplate, Roster};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// On-disk layout of `roster.ron`.
#[derive(Debug, Deserialize)]
struct RosterFile {
    characters: Vec<CharacterTemplate>,
}

/// Loader for the character roster from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load and validate a roster from a RON file.
    ///
    /// RON format: `(characters: [CharacterTemplate, ...])`
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content)
            .with_context(|| format!("Invalid roster {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<Roster> {
        let file: RosterFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        let roster = Roster::new(file.characters)?;
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ConfigError, GameError};

    const MINIMAL: &str = r#"(
        characters: [
            (
                canonical_name: "trainee",
                evolution_names: ["Trainee", "Veteran"],
                hp: 100,
                hp_increase_rate: 10,
                mp: 200,
                mp_increase_rate: 20,
                atk: 1,
                atk_increase_rate: 1,
                speed: 5,
                max_evolutions: 1,
                skills: [
                    (name: "Jab", base_damage: 0, mana_cost: 0, cooldown_secs: 0.0),
                    (name: "Spark", base_damage: 5, mana_cost: 10, cooldown_secs: 0.5),
                    (name: "Beam", base_damage: 20, mana_cost: 50, cooldown_secs: 3.0),
                    (name: "Orb", base_damage: 40, mana_cost: 150, cooldown_secs: 6.0),
                ],
            ),
        ],
    )"#;

    #[test]
    fn parses_minimal_roster() {
        let roster = RosterLoader::parse(MINIMAL).unwrap();
        assert_eq!(roster.names().collect::<Vec<_>>(), vec!["trainee"]);

        let trainee = roster.get("trainee").unwrap();
        assert_eq!(trainee.skills[2].name, "Beam");
        assert_eq!(trainee.skills[1].cooldown_ms(), 500);
    }

    #[test]
    fn invalid_template_is_a_config_error() {
        let broken = MINIMAL.replace(r#""Trainee", "Veteran""#, r#""Trainee""#);
        let err = RosterLoader::parse(&broken).unwrap_err();

        let config_error = err.downcast_ref::<ConfigError>().unwrap();
        assert_eq!(config_error.error_code(), "CONFIG_EVOLUTION_LADDER");
    }

    #[test]
    fn syntax_errors_are_reported() {
        let err = RosterLoader::parse("(characters: [").unwrap_err();
        assert!(err.to_string().contains("Failed to parse roster RON"));
    }
}
