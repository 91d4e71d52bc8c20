//! Hit detection between fighters and projectiles.

use tracing::debug;

use crate::events::CombatEvent;
use crate::geometry::Rect;
use crate::state::{Fighter, Projectile, SkillSlot};

/// Extra horizontal reach when two energyballs meet.
const ENERGYBALL_CLASH_REACH: i32 = 10;

/// Stateless resolver run once per tick after the dispatcher.
///
/// Order: player one attacks, player two attacks, then projectile clashes.
/// Each of the three passes applies at most its first matching rule.
pub struct CollisionResolver;

impl CollisionResolver {
    pub fn resolve(fighters: &mut [Fighter; 2], events: &mut Vec<CombatEvent>) {
        let [one, two] = fighters;

        Self::attack(one, two, events);
        Self::attack(two, one, events);

        if one.any_skill_active() && two.any_skill_active() {
            Self::clash(one, two, events);
        }
    }

    /// Punch, then energyball, special and ultimate against the defender's body.
    fn attack(attacker: &mut Fighter, defender: &mut Fighter, events: &mut Vec<CombatEvent>) -> Option<SkillSlot> {
        let target = defender.body();

        // Punches repeat every tick the bodies overlap.
        if attacker.is_punch_active() && attacker.body().intersects(&target) {
            Self::hit(attacker, defender, SkillSlot::Punch, events);
            return Some(SkillSlot::Punch);
        }

        for slot in SkillSlot::PROJECTILES {
            let Some(projectile) = attacker.projectile_mut(slot) else {
                continue;
            };
            if !projectile.is_live() || !projectile.hitbox().intersects(&target) {
                continue;
            }
            projectile.mark_collided();
            Self::hit(attacker, defender, slot, events);
            events.push(CombatEvent::CollisionSound);
            return Some(slot);
        }

        None
    }

    fn hit(attacker: &Fighter, defender: &mut Fighter, slot: SkillSlot, events: &mut Vec<CombatEvent>) {
        let damage = attacker
            .character()
            .skill(slot)
            .map_or(0, |skill| skill.damage_dealt());
        defender.character_mut().take_damage(damage);

        events.push(CombatEvent::DamageApplied {
            attacker: attacker.slot(),
            slot,
            damage,
            remaining_hp: defender.character().hp(),
        });
    }

    fn clash(one: &mut Fighter, two: &mut Fighter, events: &mut Vec<CombatEvent>) {
        let ball_one = live_hitbox(one, SkillSlot::Energyball);
        let ball_two = live_hitbox(two, SkillSlot::Energyball);

        if let (Some(a), Some(b)) = (ball_one, ball_two)
            && a.grow(ENERGYBALL_CLASH_REACH, 0)
                .intersects(&b.grow(ENERGYBALL_CLASH_REACH, 0))
        {
            Self::neutralize(one, SkillSlot::Energyball, events);
            Self::neutralize(two, SkillSlot::Energyball, events);
            events.push(CombatEvent::CollisionSound);
            return;
        }

        // A heavy skill swallows an energyball and keeps going.
        if let Some(ball) = ball_one
            && hits_heavy(&ball, two)
        {
            Self::neutralize(one, SkillSlot::Energyball, events);
            events.push(CombatEvent::CollisionSound);
            return;
        }
        if let Some(ball) = ball_two
            && hits_heavy(&ball, one)
        {
            Self::neutralize(two, SkillSlot::Energyball, events);
            events.push(CombatEvent::CollisionSound);
            return;
        }

        for slot in [SkillSlot::Special, SkillSlot::Ultimate] {
            if let (Some(a), Some(b)) = (live_hitbox(one, slot), live_hitbox(two, slot))
                && a.intersects(&b)
            {
                Self::neutralize(one, slot, events);
                Self::neutralize(two, slot, events);
                events.push(CombatEvent::CollisionSound);
                return;
            }
        }
    }

    fn neutralize(fighter: &mut Fighter, slot: SkillSlot, events: &mut Vec<CombatEvent>) {
        if let Some(projectile) = fighter.projectile_mut(slot) {
            projectile.mark_collided();
        }
        debug!(player = %fighter.slot(), %slot, "projectile neutralized");
        events.push(CombatEvent::ProjectileNeutralized {
            player: fighter.slot(),
            slot,
        });
    }
}

fn live_hitbox(fighter: &Fighter, slot: SkillSlot) -> Option<Rect> {
    fighter
        .projectile(slot)
        .filter(|projectile| projectile.is_live())
        .map(Projectile::hitbox)
}

/// Whether `ball` touches the opponent's special or ultimate in flight.
fn hits_heavy(ball: &Rect, opponent: &Fighter) -> bool {
    [SkillSlot::Special, SkillSlot::Ultimate].into_iter().any(|slot| {
        opponent
            .projectile(slot)
            .is_some_and(|heavy| heavy.is_in_flight() && ball.intersects(&heavy.hitbox()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::geometry::{Facing, Point};
    use crate::state::{Character, FighterFlags, PlayerSlot};
    use crate::test_utils::{freezer_template, goku_template};

    fn fighters(one: Point, two: Point) -> [Fighter; 2] {
        let config = GameConfig::default();
        [
            Fighter::new(
                PlayerSlot::One,
                Character::from_template(&goku_template(), &config).unwrap(),
                one,
                Facing::Right,
            ),
            Fighter::new(
                PlayerSlot::Two,
                Character::from_template(&freezer_template(), &config).unwrap(),
                two,
                Facing::Left,
            ),
        ]
    }

    /// Launches `slot` at t=0 and runs its clock to `now_ms`.
    fn fly(fighter: &mut Fighter, slot: SkillSlot, now_ms: u64) {
        assert!(fighter.launch(slot, 0));
        fighter.projectile_mut(slot).unwrap().advance(now_ms);
    }

    fn hp(fighters: &[Fighter; 2], slot: PlayerSlot) -> i32 {
        fighters[slot.index()].character().hp()
    }

    #[test]
    fn punch_repeats_while_bodies_overlap() {
        let mut fighters = fighters(Point::new(500, 400), Point::new(550, 400));
        fighters[0].set_flag(FighterFlags::PUNCH_ACTIVE, true);
        let start = hp(&fighters, PlayerSlot::Two);

        let mut events = Vec::new();
        CollisionResolver::resolve(&mut fighters, &mut events);
        CollisionResolver::resolve(&mut fighters, &mut events);

        // Punch deals base 0 + atk 4 on every tick.
        assert_eq!(hp(&fighters, PlayerSlot::Two), start - 8);
        assert!(!events.contains(&CombatEvent::CollisionSound));
    }

    #[test]
    fn touching_bodies_do_not_punch() {
        let mut fighters = fighters(Point::new(500, 400), Point::new(560, 400));
        fighters[0].set_flag(FighterFlags::PUNCH_ACTIVE, true);
        let start = hp(&fighters, PlayerSlot::Two);

        CollisionResolver::resolve(&mut fighters, &mut Vec::new());
        assert_eq!(hp(&fighters, PlayerSlot::Two), start);
    }

    #[test]
    fn projectile_damages_once() {
        let mut fighters = fighters(Point::new(120, 400), Point::new(200, 400));
        fly(&mut fighters[0], SkillSlot::Energyball, 600);
        let start = hp(&fighters, PlayerSlot::Two);

        let mut events = Vec::new();
        CollisionResolver::resolve(&mut fighters, &mut events);
        assert_eq!(hp(&fighters, PlayerSlot::Two), start - 34);
        assert_eq!(
            events,
            vec![
                CombatEvent::DamageApplied {
                    attacker: PlayerSlot::One,
                    slot: SkillSlot::Energyball,
                    damage: 34,
                    remaining_hp: start - 34,
                },
                CombatEvent::CollisionSound,
            ]
        );

        for _ in 0..5 {
            CollisionResolver::resolve(&mut fighters, &mut Vec::new());
        }
        assert_eq!(hp(&fighters, PlayerSlot::Two), start - 34);
        assert!(fighters[0].projectile(SkillSlot::Energyball).unwrap().collided());
    }

    #[test]
    fn projectile_in_windup_is_harmless() {
        let mut fighters = fighters(Point::new(120, 400), Point::new(150, 400));
        assert!(fighters[0].launch(SkillSlot::Ultimate, 0));
        let start = hp(&fighters, PlayerSlot::Two);

        CollisionResolver::resolve(&mut fighters, &mut Vec::new());
        assert_eq!(hp(&fighters, PlayerSlot::Two), start);
    }

    #[test]
    fn punch_takes_precedence_over_projectiles() {
        let mut fighters = fighters(Point::new(120, 400), Point::new(170, 400));
        fly(&mut fighters[0], SkillSlot::Energyball, 600);
        fighters[0].set_flag(FighterFlags::PUNCH_ACTIVE, true);
        let start = hp(&fighters, PlayerSlot::Two);

        CollisionResolver::resolve(&mut fighters, &mut Vec::new());
        assert_eq!(hp(&fighters, PlayerSlot::Two), start - 4);
        assert!(fighters[0].projectile(SkillSlot::Energyball).unwrap().is_live());
    }

    #[test]
    fn energyballs_neutralize_each_other() {
        let mut fighters = fighters(Point::new(400, 400), Point::new(550, 400));
        fly(&mut fighters[0], SkillSlot::Energyball, 600);
        fly(&mut fighters[1], SkillSlot::Energyball, 600);

        let mut events = Vec::new();
        CollisionResolver::resolve(&mut fighters, &mut events);

        assert!(fighters[0].projectile(SkillSlot::Energyball).unwrap().collided());
        assert!(fighters[1].projectile(SkillSlot::Energyball).unwrap().collided());
        assert_eq!(
            events,
            vec![
                CombatEvent::ProjectileNeutralized {
                    player: PlayerSlot::One,
                    slot: SkillSlot::Energyball,
                },
                CombatEvent::ProjectileNeutralized {
                    player: PlayerSlot::Two,
                    slot: SkillSlot::Energyball,
                },
                CombatEvent::CollisionSound,
            ]
        );
    }

    #[test]
    fn beam_swallows_energyball() {
        let mut fighters = fighters(Point::new(200, 400), Point::new(900, 400));
        fly(&mut fighters[0], SkillSlot::Energyball, 960);
        fly(&mut fighters[1], SkillSlot::Special, 1_400);

        CollisionResolver::resolve(&mut fighters, &mut Vec::new());

        assert!(fighters[0].projectile(SkillSlot::Energyball).unwrap().collided());
        assert!(fighters[1].projectile(SkillSlot::Special).unwrap().is_live());
        assert_eq!(hp(&fighters, PlayerSlot::One), 900);
    }

    #[test]
    fn beams_neutralize_each_other() {
        let mut fighters = fighters(Point::new(200, 400), Point::new(900, 400));
        fly(&mut fighters[0], SkillSlot::Special, 2_300);
        fly(&mut fighters[1], SkillSlot::Special, 1_400);

        let mut events = Vec::new();
        CollisionResolver::resolve(&mut fighters, &mut events);

        assert!(fighters[0].projectile(SkillSlot::Special).unwrap().collided());
        assert!(fighters[1].projectile(SkillSlot::Special).unwrap().collided());
        assert_eq!(events.last(), Some(&CombatEvent::CollisionSound));
    }

    #[test]
    fn first_live_projectile_hits_alone() {
        let mut fighters = fighters(Point::new(120, 400), Point::new(200, 400));
        fly(&mut fighters[0], SkillSlot::Energyball, 600);
        fly(&mut fighters[0], SkillSlot::Special, 1_400);
        let start = hp(&fighters, PlayerSlot::Two);

        let mut events = Vec::new();
        CollisionResolver::resolve(&mut fighters, &mut events);
        assert_eq!(hp(&fighters, PlayerSlot::Two), start - 34);
        assert!(fighters[0].projectile(SkillSlot::Energyball).unwrap().collided());
        assert!(fighters[0].projectile(SkillSlot::Special).unwrap().is_live());
        assert_eq!(
            events
                .iter()
                .filter(|event| matches!(event, CombatEvent::DamageApplied { .. }))
                .count(),
            1
        );

        // The beam lands on the following tick: base 150 + atk 4.
        CollisionResolver::resolve(&mut fighters, &mut Vec::new());
        assert_eq!(hp(&fighters, PlayerSlot::Two), start - 34 - 154);
        assert!(fighters[0].projectile(SkillSlot::Special).unwrap().collided());
    }

    #[test]
    fn sphere_swallows_energyball() {
        let mut fighters = fighters(Point::new(200, 400), Point::new(450, 400));
        fly(&mut fighters[0], SkillSlot::Energyball, 680);
        fly(&mut fighters[1], SkillSlot::Ultimate, 1_100);

        let mut events = Vec::new();
        CollisionResolver::resolve(&mut fighters, &mut events);

        assert!(fighters[0].projectile(SkillSlot::Energyball).unwrap().collided());
        assert!(fighters[1].projectile(SkillSlot::Ultimate).unwrap().is_live());
        assert_eq!(
            events,
            vec![
                CombatEvent::ProjectileNeutralized {
                    player: PlayerSlot::One,
                    slot: SkillSlot::Energyball,
                },
                CombatEvent::CollisionSound,
            ]
        );
    }

    #[test]
    fn spheres_neutralize_each_other() {
        let mut fighters = fighters(Point::new(200, 400), Point::new(400, 400));
        fly(&mut fighters[0], SkillSlot::Ultimate, 1_100);
        fly(&mut fighters[1], SkillSlot::Ultimate, 1_100);

        let mut events = Vec::new();
        CollisionResolver::resolve(&mut fighters, &mut events);

        assert!(fighters[0].projectile(SkillSlot::Ultimate).unwrap().collided());
        assert!(fighters[1].projectile(SkillSlot::Ultimate).unwrap().collided());
        assert_eq!(
            events,
            vec![
                CombatEvent::ProjectileNeutralized {
                    player: PlayerSlot::One,
                    slot: SkillSlot::Ultimate,
                },
                CombatEvent::ProjectileNeutralized {
                    player: PlayerSlot::Two,
                    slot: SkillSlot::Ultimate,
                },
                CombatEvent::CollisionSound,
            ]
        );
        assert_eq!(hp(&fighters, PlayerSlot::One), 900);
        assert_eq!(hp(&fighters, PlayerSlot::Two), 1000);
    }

    #[test]
    fn clashes_need_both_sides_active() {
        let mut fighters = fighters(Point::new(200, 400), Point::new(900, 400));
        fly(&mut fighters[0], SkillSlot::Energyball, 960);

        let mut events = Vec::new();
        CollisionResolver::resolve(&mut fighters, &mut events);
        assert!(events.is_empty());
        assert!(fighters[0].projectile(SkillSlot::Energyball).unwrap().is_live());
    }
}
