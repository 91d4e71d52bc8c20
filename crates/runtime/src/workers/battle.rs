//! Battle worker that owns the authoritative [`game_core::Battle`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), steps the
//! match via [`game_core::BattleEngine`], and publishes events to the EventBus.

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

use game_core::{Battle, BattleEngine, BattleSnapshot, Intents, MatchPhase, TickReport};

use crate::api::Result;
use crate::events::{Event, EventBus, MatchEvent, TickEvent};

/// Commands that can be sent to the battle worker
pub enum Command {
    /// Setup → Active.
    Start { reply: oneshot::Sender<Result<()>> },
    /// Run one tick with the intents of player one and player two.
    Step {
        intents: [Intents; 2],
        reply: oneshot::Sender<Result<TickReport>>,
    },
    /// Query the current match state (read-only).
    QuerySnapshot {
        reply: oneshot::Sender<BattleSnapshot>,
    },
}

/// Background task that processes battle commands.
///
/// The worker is a pure rules executor: it does not own providers or
/// timers. Tick pacing and intent collection live in the runtime.
pub struct BattleWorker {
    battle: Battle,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    phase_tx: watch::Sender<MatchPhase>,
}

impl BattleWorker {
    pub fn new(
        battle: Battle,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        phase_tx: watch::Sender<MatchPhase>,
    ) -> Self {
        debug!(
            target: "runtime::worker",
            phase = battle.phase().as_str(),
            "BattleWorker initialized"
        );

        Self {
            battle,
            command_rx,
            event_bus,
            phase_tx,
        }
    }

    /// Main worker loop. Exits once every command sender is dropped.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd);
                }
                else => break,
            }
        }
        debug!(target: "runtime::worker", "command channel closed, worker stopping");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Start { reply } => {
                let result = self.handle_start();
                if reply.send(result).is_err() {
                    debug!(target: "runtime::worker", "Start reply channel closed (caller dropped)");
                }
            }
            Command::Step { intents, reply } => {
                let result = self.handle_step(intents);
                if reply.send(result).is_err() {
                    debug!(target: "runtime::worker", "Step reply channel closed (caller dropped)");
                }
            }
            Command::QuerySnapshot { reply } => {
                if reply.send(self.battle.snapshot()).is_err() {
                    debug!(target: "runtime::worker", "QuerySnapshot reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_start(&mut self) -> Result<()> {
        BattleEngine::new(&mut self.battle).start()?;
        self.phase_tx.send_replace(MatchPhase::Active);

        let [one, two] = self.battle.fighters();
        info!(
            target: "runtime::worker",
            player_one = one.character().canonical_name(),
            player_two = two.character().canonical_name(),
            "match started"
        );
        self.event_bus.publish(Event::Match(MatchEvent::Started {
            player_one: one.character().canonical_name().to_owned(),
            player_two: two.character().canonical_name().to_owned(),
        }));
        Ok(())
    }

    fn handle_step(&mut self, intents: [Intents; 2]) -> Result<TickReport> {
        let report = BattleEngine::new(&mut self.battle)
            .step(intents)
            .inspect_err(|error| {
                warn!(target: "runtime::worker", %error, "tick rejected");
            })?;

        for event in TickEvent::from_report(&report) {
            self.event_bus.publish(Event::from_tick_event(event));
        }

        if let Some(outcome) = report.outcome {
            self.phase_tx.send_replace(MatchPhase::Finished);
            info!(
                target: "runtime::worker",
                tick = report.tick,
                elapsed_ms = report.elapsed_ms,
                %outcome,
                "match finished"
            );
            self.event_bus.publish(Event::Match(MatchEvent::Finished {
                tick: report.tick,
                elapsed_ms: report.elapsed_ms,
                outcome,
            }));
        }

        Ok(report)
    }
}
