//! Content factory for building match inputs from data files.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, Roster};

use crate::loaders::{ConfigLoader, LoadResult, RosterLoader};

const BUNDLED_CONFIG: &str = include_str!("../../data/config.toml");
const BUNDLED_ROSTER: &str = include_str!("../../data/roster.ron");

/// Content factory that loads all match content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── roster.ron
/// ```
pub struct ContentFactory {
    data_dir: Option<PathBuf>,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
        }
    }

    /// Creates a factory serving the content compiled into this crate.
    pub fn bundled() -> Self {
        Self { data_dir: None }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        match &self.data_dir {
            Some(dir) => ConfigLoader::load(&dir.join("config.toml")),
            None => ConfigLoader::parse(BUNDLED_CONFIG),
        }
    }

    /// Load the character roster from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        match &self.data_dir {
            Some(dir) => RosterLoader::load(&dir.join("roster.ron")),
            None => RosterLoader::parse(BUNDLED_ROSTER),
        }
    }

    /// Returns the data directory path, `None` for bundled content.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Some(Path::new("/tmp/data")));
        assert_eq!(ContentFactory::bundled().data_dir(), None);
    }

    #[test]
    fn bundled_content_is_valid() {
        let factory = ContentFactory::bundled();
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());

        let roster = factory.load_roster().unwrap();
        assert_eq!(roster.len(), 2);

        let goku = roster.get("goku").unwrap();
        assert_eq!(goku.hp, 900);
        assert_eq!(goku.skills[2].name, "Kamehameha");
        assert_eq!(roster.get("freezer").unwrap().skills[3].mana_cost, 700);
    }

    #[test]
    fn loads_from_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "tick_ms = 20\n").unwrap();
        std::fs::write(dir.path().join("roster.ron"), BUNDLED_ROSTER).unwrap();

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap().tick_ms, 20);
        assert!(factory.load_roster().unwrap().get("freezer").is_ok());
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentFactory::new(dir.path()).load_roster().unwrap_err();
        assert!(err.to_string().contains("roster.ron"));
    }
}
