//! Observable side effects of a tick.
//!
//! The engine appends [`CombatEvent`]s in the order rules are applied; the
//! runtime republishes them for presentation layers (sounds, HUD, logs).

use crate::state::{MatchOutcome, PlayerSlot, SkillSlot};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    /// Aura charging started (aura-hold accepted while idle).
    AuraCharging { player: PlayerSlot },

    /// A skill passed its gates; mana was spent and its cooldown started.
    SkillInvoked {
        player: PlayerSlot,
        slot: SkillSlot,
        mana_spent: i32,
    },

    /// An invocation was refused for lack of mana. Rate limited per player.
    ManaNotification {
        player: PlayerSlot,
        slot: SkillSlot,
        mana: i32,
        required: i32,
    },

    /// Windup finished; the projectile hitbox is live.
    ProjectileLaunched { player: PlayerSlot, slot: SkillSlot },

    /// The projectile left the screen or was consumed by a collision.
    ProjectileFinished {
        player: PlayerSlot,
        slot: SkillSlot,
        collided: bool,
    },

    CooldownReady { player: PlayerSlot, slot: SkillSlot },

    /// `attacker` hit the opposing fighter.
    DamageApplied {
        attacker: PlayerSlot,
        slot: SkillSlot,
        damage: i32,
        remaining_hp: i32,
    },

    /// A projectile was cancelled by an opposing projectile.
    ProjectileNeutralized { player: PlayerSlot, slot: SkillSlot },

    /// A projectile hit something.
    CollisionSound,

    Evolved {
        player: PlayerSlot,
        evolution_index: u8,
        evolution_name: String,
    },

    MatchFinished { outcome: MatchOutcome },
}

impl CombatEvent {
    /// Events meant for audio/visual cues rather than state tracking.
    pub fn is_notification(&self) -> bool {
        matches!(
            self,
            CombatEvent::ManaNotification { .. } | CombatEvent::CollisionSound
        )
    }

    pub fn player(&self) -> Option<PlayerSlot> {
        use CombatEvent::*;
        match self {
            AuraCharging { player }
            | SkillInvoked { player, .. }
            | ManaNotification { player, .. }
            | ProjectileLaunched { player, .. }
            | ProjectileFinished { player, .. }
            | CooldownReady { player, .. }
            | ProjectileNeutralized { player, .. }
            | Evolved { player, .. } => Some(*player),
            DamageApplied { attacker, .. } => Some(*attacker),
            CollisionSound | MatchFinished { .. } => None,
        }
    }
}
