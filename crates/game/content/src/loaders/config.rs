//! Game configuration loader.

use std::path::Path;

use anyhow::Context;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`GameConfig::default`] value.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        anyhow::ensure!(config.tick_ms > 0, "tick_ms must be positive");
        anyhow::ensure!(
            config.arena.min_x <= config.arena.max_x && config.arena.min_y <= config.arena.max_y,
            "arena bounds are inverted"
        );
        anyhow::ensure!(
            config.arena.contains(config.arena.spawn_one)
                && config.arena.contains(config.arena.spawn_two),
            "spawn points must lie inside the arena"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("tick_ms = 16\n").unwrap();
        assert_eq!(config.tick_ms, 16);
        assert_eq!(config.aura_mana_per_tick, GameConfig::DEFAULT_AURA_MANA_PER_TICK);
        assert_eq!(config.arena, GameConfig::default().arena);
    }

    #[test]
    fn zero_tick_is_rejected() {
        let err = ConfigLoader::parse("tick_ms = 0\n").unwrap_err();
        assert!(err.to_string().contains("tick_ms"));
    }

    #[test]
    fn spawn_outside_arena_is_rejected() {
        let content = "[arena]\nspawn_one = { x = 10, y = 400 }\n";
        assert!(ConfigLoader::parse(content).is_err());
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = ConfigLoader::parse("tick_ms = \"fast\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
