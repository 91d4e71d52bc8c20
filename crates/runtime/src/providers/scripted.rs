//! Replays a fixed intent sequence, one entry per tick.

use async_trait::async_trait;
use game_core::{BattleSnapshot, Intents, PlayerSlot};

use crate::api::{IntentProvider, Result};

/// Plays back a script indexed by the match tick.
///
/// Entry `n` is used for the tick that follows snapshot tick `n`. Once the
/// script runs out the provider keeps returning `tail`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedIntentProvider {
    script: Vec<Intents>,
    tail: Intents,
}

impl ScriptedIntentProvider {
    pub fn new(script: Vec<Intents>) -> Self {
        Self {
            script,
            tail: Intents::empty(),
        }
    }

    /// Builds a script from `(intents, ticks)` runs.
    pub fn from_runs(runs: &[(Intents, usize)]) -> Self {
        let script = runs
            .iter()
            .flat_map(|&(intents, ticks)| std::iter::repeat_n(intents, ticks))
            .collect();
        Self::new(script)
    }

    /// Intents held forever after the script ends.
    pub fn then_hold(mut self, tail: Intents) -> Self {
        self.tail = tail;
        self
    }

    fn at(&self, tick: u64) -> Intents {
        usize::try_from(tick)
            .ok()
            .and_then(|index| self.script.get(index))
            .copied()
            .unwrap_or(self.tail)
    }
}

#[async_trait]
impl IntentProvider for ScriptedIntentProvider {
    async fn provide_intents(&self, _slot: PlayerSlot, snapshot: &BattleSnapshot) -> Result<Intents> {
        Ok(self.at(snapshot.tick))
    }
}
