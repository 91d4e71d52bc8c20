//! Seeded computer opponent.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use game_core::{BattleSnapshot, FighterSnapshot, Intents, PlayerSlot, SkillSlot};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::api::{IntentProvider, Result};

/// Horizontal gap under which the opponent is in punch range.
const PUNCH_RANGE_X: i32 = 70;
const PUNCH_RANGE_Y: i32 = 50;
/// Preferred horizontal distance when not punching.
const KEEP_DISTANCE_X: i32 = 250;
/// Vertical slack before lining up with the opponent.
const ALIGN_SLACK_Y: i32 = 12;

/// Picks plausible intents at random: lines up with the opponent, charges
/// aura, punches at close range and fires affordable skills.
///
/// The generator is seeded, so a match between two seeded providers is
/// reproducible.
pub struct RandomIntentProvider {
    rng: Mutex<StdRng>,
    aggression: f64,
}

impl RandomIntentProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            aggression: 0.35,
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            aggression: 0.35,
        }
    }

    /// Probability of firing an affordable skill on a given tick.
    pub fn with_aggression(mut self, aggression: f64) -> Self {
        self.aggression = aggression.clamp(0.0, 1.0);
        self
    }

    fn choose(&self, me: &FighterSnapshot, foe: &FighterSnapshot) -> Intents {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        // Keep charging until the mana bar is nearly full.
        if me.aura_active && me.mp + 8 < me.max_mp && rng.gen_bool(0.92) {
            return Intents::AURA;
        }

        let affordable: Vec<SkillSlot> = SkillSlot::PROJECTILES
            .into_iter()
            .filter(|slot| {
                me.skill(*slot)
                    .is_some_and(|skill| skill.ready && skill.mana_cost <= me.mp)
            })
            .collect();
        if let Some(&slot) = affordable.choose(&mut *rng)
            && rng.gen_bool(self.aggression)
        {
            return Intents::for_skill(slot);
        }

        let dx = foe.position.x - me.position.x;
        let dy = foe.position.y - me.position.y;

        if dx.abs() < PUNCH_RANGE_X && dy.abs() < PUNCH_RANGE_Y {
            return Intents::PUNCH;
        }

        if rng.gen_bool(0.15) {
            return Intents::AURA;
        }

        let mut intents = Intents::empty();
        if dy.abs() > ALIGN_SLACK_Y {
            intents |= if dy > 0 { Intents::DOWN } else { Intents::UP };
        }
        if dx.abs() > KEEP_DISTANCE_X || rng.gen_bool(0.1) {
            intents |= if dx > 0 { Intents::RIGHT } else { Intents::LEFT };
        }
        intents
    }
}

#[async_trait]
impl IntentProvider for RandomIntentProvider {
    async fn provide_intents(&self, slot: PlayerSlot, snapshot: &BattleSnapshot) -> Result<Intents> {
        let me = snapshot.fighter(slot);
        let foe = snapshot.fighter(slot.opponent());
        Ok(self.choose(me, foe))
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
    async fn same_seed_same_choices() {
        let snapshot = snapshot();
        let a = RandomIntentProvider::new(7);
        let b = RandomIntentProvider::new(7);

        for _ in 0..50 {
            assert_eq!(
                a.provide_intents(PlayerSlot::One, &snapshot).await.unwrap(),
                b.provide_intents(PlayerSlot::One, &snapshot).await.unwrap()
            );
        }
    }

    #[tokio::test]
    async fn never_fires_without_mana() {
        let snapshot = snapshot();
        let provider = RandomIntentProvider::new(3).with_aggression(1.0);
        let skills = Intents::ENERGYBALL | Intents::SPECIAL | Intents::ULTIMATE;

        for _ in 0..100 {
            let intents = provider.provide_intents(PlayerSlot::Two, &snapshot).await.unwrap();
            assert!(!intents.intersects(skills));
        }
    }
}
