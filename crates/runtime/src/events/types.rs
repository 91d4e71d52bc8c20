//! Event types for different topics.

use game_core::{CombatEvent, MatchOutcome, TickReport};
use serde::{Deserialize, Serialize};

/// A rule-level event stamped with the tick that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickEvent {
    pub tick: u64,
    pub elapsed_ms: u64,
    pub event: CombatEvent,
}

/// Match lifecycle events (lightweight)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Setup finished and the clock is running.
    Started {
        player_one: String,
        player_two: String,
    },

    /// The death check ended the match. Terminal.
    Finished {
        tick: u64,
        elapsed_ms: u64,
        outcome: MatchOutcome,
    },
}

impl TickEvent {
    /// Stamps every event of `report` except the final `MatchFinished`,
    /// which is republished as [`MatchEvent::Finished`].
    pub fn from_report(report: &TickReport) -> impl Iterator<Item = TickEvent> + '_ {
        report
            .events
            .iter()
            .filter(|event| !matches!(event, CombatEvent::MatchFinished { .. }))
            .map(|event| TickEvent {
                tick: report.tick,
                elapsed_ms: report.elapsed_ms,
                event: event.clone(),
            })
    }
}
