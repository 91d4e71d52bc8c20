//! CLI configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings for one headless match.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `config.toml` and `roster.ron`. Bundled data when unset.
    pub data_dir: Option<PathBuf>,
    pub player_one: String,
    pub player_two: String,
    pub max_ticks: Option<u64>,
    pub log_dir: Option<PathBuf>,
    /// Seed for the computer-controlled fighters. Entropy when unset.
    pub seed: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            player_one: "goku".to_owned(),
            player_two: "freezer".to_owned(),
            max_ticks: None,
            log_dir: None,
            seed: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_DATA_DIR` - Content directory (default: bundled content)
    /// - `BATTLE_PLAYER1` - Player one roster name (default: goku)
    /// - `BATTLE_PLAYER2` - Player two roster name (default: freezer)
    /// - `BATTLE_MAX_TICKS` - Abort after this many ticks (default: unbounded)
    /// - `BATTLE_SEED` - Seed for both fighters' random intents
    /// - `LOG_DIR` - Also write logs to `LOG_DIR/battle.log`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var_os("BATTLE_DATA_DIR").map(PathBuf::from);

        if let Ok(name) = env::var("BATTLE_PLAYER1") {
            config.player_one = name;
        }
        if let Ok(name) = env::var("BATTLE_PLAYER2") {
            config.player_two = name;
        }

        config.max_ticks = read_env::<u64>("BATTLE_MAX_TICKS").filter(|ticks| *ticks > 0);
        config.seed = read_env::<u64>("BATTLE_SEED");
        config.log_dir = env::var_os("LOG_DIR").map(PathBuf::from);

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
