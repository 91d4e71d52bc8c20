//! Asynchronous abstraction for sourcing per-tick player intents.
//!
//! Runtime users plug in [`IntentProvider`] implementations so the battle
//! can run with human input, scripted fixtures, or computer opponents.
use async_trait::async_trait;
use game_core::{BattleSnapshot, Intents, PlayerSlot};

use super::errors::Result;

/// Trait for providing intents based on the current battle snapshot.
///
/// Different implementations can handle:
/// - Player input (keyboard, network)
/// - Computer-controlled opponents
/// - Scripted/replayed input
/// - Testing fixtures
#[async_trait]
pub trait IntentProvider: Send + Sync {
    /// Provide the intents of `slot` for the next tick.
    ///
    /// # Arguments
    /// * `slot` - The player that needs input
    /// * `snapshot` - Read-only view of the match before the tick
    async fn provide_intents(&self, slot: PlayerSlot, snapshot: &BattleSnapshot)
    -> Result<Intents>;
}

/// A provider that never presses anything.
/// Useful for testing or as a fallback.
pub struct IdleIntentProvider;

#[async_trait]
impl IntentProvider for IdleIntentProvider {
    async fn provide_intents(
        &self,
        _slot: PlayerSlot,
        _snapshot: &BattleSnapshot,
    ) -> Result<Intents> {
        Ok(Intents::empty())
    }
}
