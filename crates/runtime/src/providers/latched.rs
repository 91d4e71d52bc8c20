//! Intents latched from an external input source.
//!
//! A UI or network task writes the currently held keys into an
//! [`IntentLatch`]; the runtime samples the latest value once per tick.

use async_trait::async_trait;
use game_core::{BattleSnapshot, Intents, PlayerSlot};
use tokio::sync::watch;

use crate::api::{IntentProvider, Result};

/// Write side of a latched provider.
#[derive(Debug, Clone)]
pub struct IntentLatch {
    tx: watch::Sender<Intents>,
}

impl IntentLatch {
    /// Replaces the held intents.
    pub fn set(&self, intents: Intents) {
        self.tx.send_replace(intents);
    }

    pub fn press(&self, intents: Intents) {
        self.tx.send_modify(|held| held.insert(intents));
    }

    pub fn release(&self, intents: Intents) {
        self.tx.send_modify(|held| held.remove(intents));
    }

    pub fn clear(&self) {
        self.set(Intents::empty());
    }
}

/// Read side: returns whatever the latch holds at sampling time.
#[derive(Debug, Clone)]
pub struct LatchedIntentProvider {
    rx: watch::Receiver<Intents>,
}

impl LatchedIntentProvider {
    pub fn channel() -> (IntentLatch, Self) {
        let (tx, rx) = watch::channel(Intents::empty());
        (IntentLatch { tx }, Self { rx })
    }
}

#[async_trait]
impl IntentProvider for LatchedIntentProvider {
    async fn provide_intents(&self, _slot: PlayerSlot, _snapshot: &BattleSnapshot) -> Result<Intents> {
        // A dropped latch leaves the last value held.
        Ok(*self.rx.borrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Battle, GameConfig};

    fn snapshot() -> BattleSnapshot {
        let roster = game_content::ContentFactory::bundled().load_roster().unwrap();
        Battle::setup(
            GameConfig::default(),
            roster.get("goku").unwrap(),
            roster.get("freezer").unwrap(),
        )
        .unwrap()
        .snapshot()
    }

    #[tokio::test]
    async fn samples_latest_held_keys() {
        let (latch, provider) = LatchedIntentProvider::channel();
        let snapshot = snapshot();

        latch.press(Intents::LEFT);
        latch.press(Intents::AURA);
        latch.release(Intents::LEFT);
        assert_eq!(
            provider.provide_intents(PlayerSlot::One, &snapshot).await.unwrap(),
            Intents::AURA
        );

        latch.clear();
        drop(latch);
        assert_eq!(
            provider.provide_intents(PlayerSlot::One, &snapshot).await.unwrap(),
            Intents::empty()
        );
    }
}
