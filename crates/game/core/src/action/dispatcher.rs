//! Per-tick intent resolution for one fighter.
//!
//! The dispatcher applies at most one category of intent per tick, in fixed
//! priority: diagonal moves, single moves, aura charge, punch, energyball,
//! special, ultimate. Nothing new starts while any skill is active.

use tracing::debug;

use crate::config::GameConfig;
use crate::events::CombatEvent;
use crate::state::{CharacterError, Fighter, FighterFlags, SkillSlot};

use super::error::DispatchError;
use super::intents::{Direction, Intents};

/// What the dispatcher did with a fighter's intents this tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatched {
    /// A skill is active; intents were ignored.
    Locked,
    /// No intent applied.
    Idle,
    /// Movement was requested; steps that left the arena were dropped.
    Moved(Intents),
    AuraCharged,
    Punch,
    Invoked(SkillSlot),
    Rejected(DispatchError),
}

pub struct ActionDispatcher<'a> {
    config: &'a GameConfig,
    now_ms: u64,
}

impl<'a> ActionDispatcher<'a> {
    pub fn new(config: &'a GameConfig, now_ms: u64) -> Self {
        Self { config, now_ms }
    }

    pub fn dispatch(
        &self,
        fighter: &mut Fighter,
        intents: Intents,
        events: &mut Vec<CombatEvent>,
    ) -> Dispatched {
        Self::release(fighter, intents);

        if fighter.any_skill_active() {
            return Dispatched::Locked;
        }

        if !fighter.is_aura_active()
            && let Some(moved) = self.movement(fighter, intents)
        {
            return moved;
        }

        if intents.contains(Intents::AURA) {
            return self.charge_aura(fighter, events);
        }

        if intents.contains(Intents::PUNCH) {
            return self.punch(fighter, events);
        }

        for slot in SkillSlot::PROJECTILES {
            if intents.contains(Intents::for_skill(slot)) {
                return match self.invoke(fighter, slot, events) {
                    Ok(()) => Dispatched::Invoked(slot),
                    Err(error) => self.reject(fighter, error, events),
                };
            }
        }

        Dispatched::Idle
    }

    /// Releasing aura-hold or punch ends the animation.
    fn release(fighter: &mut Fighter, intents: Intents) {
        if fighter.is_aura_active() && !intents.contains(Intents::AURA) {
            fighter.set_flag(FighterFlags::AURA_ACTIVE | FighterFlags::ANIMATION_BUSY, false);
        }
        if fighter.is_punch_active() && !intents.contains(Intents::PUNCH) {
            fighter.set_flag(FighterFlags::PUNCH_ACTIVE | FighterFlags::ANIMATION_BUSY, false);
        }
    }

    fn movement(&self, fighter: &mut Fighter, intents: Intents) -> Option<Dispatched> {
        let arena = &self.config.arena;

        if let Some(&(horizontal, vertical)) = Direction::DIAGONALS
            .iter()
            .find(|(h, v)| intents.holds(*h) && intents.holds(*v))
        {
            fighter.step(horizontal, arena);
            fighter.step(vertical, arena);
            return Some(Dispatched::Moved(
                Intents::for_direction(horizontal) | Intents::for_direction(vertical),
            ));
        }

        let direction = Direction::SINGLES
            .into_iter()
            .find(|direction| intents.holds(*direction))?;
        fighter.step(direction, arena);
        Some(Dispatched::Moved(Intents::for_direction(direction)))
    }

    fn charge_aura(&self, fighter: &mut Fighter, events: &mut Vec<CombatEvent>) -> Dispatched {
        if !fighter.is_busy() && !fighter.is_aura_active() {
            fighter.set_flag(FighterFlags::ANIMATION_BUSY | FighterFlags::AURA_ACTIVE, true);
            events.push(CombatEvent::AuraCharging {
                player: fighter.slot(),
            });
        }

        let character = fighter.character_mut();
        character.gain_aura(self.config.aura_per_tick);
        // Gain-only path; a full mana bar simply drops the gain.
        let _ = character.try_spend_or_gain_mana(self.config.aura_mana_per_tick);
        Dispatched::AuraCharged
    }

    fn punch(&self, fighter: &mut Fighter, events: &mut Vec<CombatEvent>) -> Dispatched {
        if !fighter.is_busy() {
            if let Err(error) = self.pay(fighter, SkillSlot::Punch, events) {
                return self.reject(fighter, error, events);
            }
            fighter.set_flag(FighterFlags::ANIMATION_BUSY, true);
        }
        fighter.set_flag(FighterFlags::PUNCH_ACTIVE, true);
        Dispatched::Punch
    }

    fn invoke(
        &self,
        fighter: &mut Fighter,
        slot: SkillSlot,
        events: &mut Vec<CombatEvent>,
    ) -> Result<(), DispatchError> {
        let skill = fighter
            .character()
            .skill(slot)
            .ok_or(DispatchError::MissingSkill { slot })?;
        if !skill.is_ready() {
            return Err(DispatchError::SkillNotReady { slot });
        }

        self.pay(fighter, slot, events)?;
        fighter.set_flag(FighterFlags::ANIMATION_BUSY, true);
        fighter.launch(slot, self.now_ms);
        if let Some(skill) = fighter.character_mut().skill_mut(slot) {
            skill.start_cooldown(self.now_ms);
        }
        Ok(())
    }

    /// Charges the slot's mana cost.
    fn pay(
        &self,
        fighter: &mut Fighter,
        slot: SkillSlot,
        events: &mut Vec<CombatEvent>,
    ) -> Result<(), DispatchError> {
        let cost = fighter
            .character()
            .skill(slot)
            .map(|skill| skill.mana_cost())
            .ok_or(DispatchError::MissingSkill { slot })?;

        fighter
            .character_mut()
            .try_spend_or_gain_mana(-cost)
            .map_err(|source| DispatchError::InsufficientResource { slot, source })?;

        events.push(CombatEvent::SkillInvoked {
            player: fighter.slot(),
            slot,
            mana_spent: cost,
        });
        Ok(())
    }

    fn reject(
        &self,
        fighter: &mut Fighter,
        error: DispatchError,
        events: &mut Vec<CombatEvent>,
    ) -> Dispatched {
        if let DispatchError::InsufficientResource {
            slot,
            source: CharacterError::InsufficientResource { mp, delta },
        } = &error
            && fighter.take_mana_notice(self.now_ms, self.config.mana_notice_window_ms)
        {
            events.push(CombatEvent::ManaNotification {
                player: fighter.slot(),
                slot: *slot,
                mana: *mp,
                required: -*delta,
            });
        }

        debug!(player = %fighter.slot(), %error, "invocation rejected");
        Dispatched::Rejected(error)
    }
}
