//! Deadline processing against the match clock.

use strum::IntoEnumIterator;

use crate::events::CombatEvent;
use crate::state::{Fighter, FighterFlags, MotionProfile, SkillSlot};

/// Expires cooldowns, then releases windups and steps projectiles whose
/// deadlines are due at `now_ms`.
pub(super) fn advance(fighter: &mut Fighter, now_ms: u64, events: &mut Vec<CombatEvent>) {
    let player = fighter.slot();

    for slot in SkillSlot::iter() {
        let ready = fighter
            .character_mut()
            .skill_mut(slot)
            .is_some_and(|skill| skill.poll_cooldown(now_ms));
        if ready {
            events.push(CombatEvent::CooldownReady { player, slot });
        }
    }

    for slot in SkillSlot::PROJECTILES {
        let Some(profile) = MotionProfile::for_slot(slot) else {
            continue;
        };
        let Some(projectile) = fighter.projectile_mut(slot) else {
            continue;
        };

        let progress = projectile.advance(now_ms);
        if progress.launched {
            events.push(CombatEvent::ProjectileLaunched { player, slot });
            if profile.releases_busy_at_windup {
                fighter.set_flag(FighterFlags::ANIMATION_BUSY, false);
            }
        }

        if progress.finished {
            let collided = fighter
                .retire_projectile(slot)
                .is_some_and(|projectile| projectile.collided());
            if !profile.releases_busy_at_windup {
                fighter.set_flag(FighterFlags::ANIMATION_BUSY, false);
            }
            events.push(CombatEvent::ProjectileFinished {
                player,
                slot,
                collided,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::geometry::{Facing, Point};
    use crate::state::{Character, PlayerSlot};
    use crate::test_utils::goku_template;

    fn fighter() -> Fighter {
        let config = GameConfig::default();
        let character = Character::from_template(&goku_template(), &config).unwrap();
        Fighter::new(PlayerSlot::One, character, Point::new(500, 400), Facing::Right)
    }

    #[test]
    fn energyball_releases_busy_at_windup() {
        let mut fighter = fighter();
        fighter.set_flag(FighterFlags::ANIMATION_BUSY, true);
        assert!(fighter.launch(SkillSlot::Energyball, 0));

        let mut events = Vec::new();
        advance(&mut fighter, 570, &mut events);
        assert!(fighter.is_busy());
        assert!(events.is_empty());

        advance(&mut fighter, 600, &mut events);
        assert!(!fighter.is_busy());
        assert!(fighter.is_skill_active(SkillSlot::Energyball));
        assert_eq!(
            events,
            vec![CombatEvent::ProjectileLaunched {
                player: PlayerSlot::One,
                slot: SkillSlot::Energyball,
            }]
        );
    }

    #[test]
    fn beam_holds_busy_until_flight_ends() {
        let mut fighter = fighter();
        fighter.set_flag(FighterFlags::ANIMATION_BUSY, true);
        assert!(fighter.launch(SkillSlot::Special, 0));

        let mut events = Vec::new();
        advance(&mut fighter, 1_400, &mut events);
        assert!(fighter.is_busy());

        // Head walks from x=645 to past the right edge in 31px steps.
        advance(&mut fighter, 60_000, &mut events);
        assert!(!fighter.is_busy());
        assert!(!fighter.is_skill_active(SkillSlot::Special));
        assert_eq!(
            events.last(),
            Some(&CombatEvent::ProjectileFinished {
                player: PlayerSlot::One,
                slot: SkillSlot::Special,
                collided: false,
            })
        );
    }

    #[test]
    fn collided_projectile_ends_on_next_step() {
        let mut fighter = fighter();
        assert!(fighter.launch(SkillSlot::Energyball, 0));
        advance(&mut fighter, 600, &mut Vec::new());
        fighter
            .projectile_mut(SkillSlot::Energyball)
            .unwrap()
            .mark_collided();

        let mut events = Vec::new();
        advance(&mut fighter, 640, &mut events);
        assert!(fighter.projectile(SkillSlot::Energyball).is_none());
        assert_eq!(
            events,
            vec![CombatEvent::ProjectileFinished {
                player: PlayerSlot::One,
                slot: SkillSlot::Energyball,
                collided: true,
            }]
        );
    }

    #[test]
    fn cooldown_expiry_is_reported_once() {
        let mut fighter = fighter();
        let skill = fighter.character_mut().skill_mut(SkillSlot::Energyball).unwrap();
        skill.start_cooldown(0);
        let cooldown = skill.cooldown_ms();

        let mut events = Vec::new();
        advance(&mut fighter, cooldown - 1, &mut events);
        assert!(events.is_empty());

        advance(&mut fighter, cooldown, &mut events);
        advance(&mut fighter, cooldown + 30, &mut events);
        assert_eq!(
            events,
            vec![CombatEvent::CooldownReady {
                player: PlayerSlot::One,
                slot: SkillSlot::Energyball,
            }]
        );
    }
}
