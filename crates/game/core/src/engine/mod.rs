//! Fixed-step battle scheduler.
//!
//! The [`BattleEngine`] is the only writer of a [`Battle`]. Each call to
//! [`BattleEngine::step`] advances the match clock by one tick and applies the
//! rules in strict order: clock deadlines, intents for both players,
//! collisions, evolution, death check.

mod clock;
mod errors;

pub use errors::EngineError;

use tracing::{debug, info};

use crate::action::{ActionDispatcher, Intents};
use crate::combat::CollisionResolver;
use crate::events::CombatEvent;
use crate::state::{Battle, Fighter, FighterFlags, MatchOutcome, MatchPhase, PlayerSlot};

/// Everything one tick produced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    pub tick: u64,
    pub elapsed_ms: u64,
    /// Events in the order the rules produced them.
    pub events: Vec<CombatEvent>,
    /// Set on the tick the match finished.
    pub outcome: Option<MatchOutcome>,
}

impl TickReport {
    pub fn is_final(&self) -> bool {
        self.outcome.is_some()
    }
}

pub struct BattleEngine<'a> {
    battle: &'a mut Battle,
}

impl<'a> BattleEngine<'a> {
    pub fn new(battle: &'a mut Battle) -> Self {
        Self { battle }
    }

    /// Setup → Active.
    pub fn start(&mut self) -> Result<(), EngineError> {
        match self.battle.phase {
            MatchPhase::Setup => {
                self.battle.phase = MatchPhase::Active;
                info!(
                    player_one = self.battle.fighters[0].character().canonical_name(),
                    player_two = self.battle.fighters[1].character().canonical_name(),
                    "match started"
                );
                Ok(())
            }
            phase => Err(EngineError::AlreadyStarted { phase }),
        }
    }

    /// Runs one tick with the intents of player one and player two.
    ///
    /// Rejected outside [`MatchPhase::Active`] without touching any state.
    pub fn step(&mut self, intents: [Intents; 2]) -> Result<TickReport, EngineError> {
        match self.battle.phase {
            MatchPhase::Setup => return Err(EngineError::NotStarted),
            MatchPhase::Finished => return Err(EngineError::MatchFinished),
            MatchPhase::Active => {}
        }

        let battle = &mut *self.battle;
        battle.tick += 1;
        battle.elapsed_ms = battle.tick * battle.config.tick_ms;
        let now_ms = battle.elapsed_ms;

        let mut events = Vec::new();

        for fighter in &mut battle.fighters {
            clock::advance(fighter, now_ms, &mut events);
        }

        let dispatcher = ActionDispatcher::new(&battle.config, now_ms);
        for (fighter, intents) in battle.fighters.iter_mut().zip(intents) {
            dispatcher.dispatch(fighter, intents, &mut events);
        }

        CollisionResolver::resolve(&mut battle.fighters, &mut events);

        for fighter in &mut battle.fighters {
            Self::evolve_if_ready(fighter, &mut events);
        }

        let outcome = Self::check_defeat(&battle.fighters);
        if let Some(outcome) = outcome {
            battle.phase = MatchPhase::Finished;
            battle.outcome = Some(outcome);
            info!(tick = battle.tick, %outcome, "match finished");
            events.push(CombatEvent::MatchFinished { outcome });
        }

        Ok(TickReport {
            tick: battle.tick,
            elapsed_ms: now_ms,
            events,
            outcome,
        })
    }

    fn evolve_if_ready(fighter: &mut Fighter, events: &mut Vec<CombatEvent>) {
        if !fighter.character().is_ready_to_evolve() {
            return;
        }

        let character = fighter.character_mut();
        if let Err(error) = character.evolve() {
            debug!(player = %fighter.slot(), %error, "evolution rejected");
            return;
        }

        fighter.set_flag(FighterFlags::ANIMATION_BUSY, false);
        let character = fighter.character();
        debug!(
            player = %fighter.slot(),
            tier = character.evolution_index(),
            form = character.evolution_name(),
            "evolved"
        );
        events.push(CombatEvent::Evolved {
            player: fighter.slot(),
            evolution_index: character.evolution_index(),
            evolution_name: character.evolution_name().to_owned(),
        });
    }

    fn check_defeat(fighters: &[Fighter; 2]) -> Option<MatchOutcome> {
        let [one, two] = fighters;
        match (one.character().is_defeated(), two.character().is_defeated()) {
            (true, true) => Some(MatchOutcome::Draw),
            (true, false) => Some(MatchOutcome::Winner(PlayerSlot::Two)),
            (false, true) => Some(MatchOutcome::Winner(PlayerSlot::One)),
            (false, false) => None,
        }
    }
}
