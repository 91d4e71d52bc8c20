//! High-level runtime orchestrator.
//!
//! The runtime owns the battle worker, wires up command/event channels, and
//! exposes a builder-based API for clients to drive a match in real time.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use game_content::ContentFactory;
use game_core::{Battle, GameConfig, Intents, MatchOutcome, MatchPhase, PlayerSlot, Roster, TickReport};

use crate::api::{IntentProvider, Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::workers::{BattleWorker, Command};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Abort [`Runtime::run`] after this many ticks (default: unbounded)
    pub max_ticks: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
            max_ticks: None,
        }
    }
}

/// Main runtime that orchestrates one match
///
/// Design: Runtime owns the worker and paces ticks.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    // Shared handle (can be cloned for clients)
    handle: RuntimeHandle,
    config: RuntimeConfig,

    // Intent providers (injected by user), indexed by player slot
    providers: [Option<Box<dyn IntentProvider>>; 2],

    // Background worker
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Set the intent provider for one player
    pub fn set_provider(&mut self, slot: PlayerSlot, provider: impl IntentProvider + 'static) {
        self.providers[slot.index()] = Some(Box::new(provider));
    }

    /// Execute a single tick
    ///
    /// Requires both providers to be configured and the match to be active.
    pub async fn step(&mut self) -> Result<TickReport> {
        let [one, two] = &self.providers;
        let one = one.as_ref().ok_or(RuntimeError::ProviderNotSet {
            slot: PlayerSlot::One,
        })?;
        let two = two.as_ref().ok_or(RuntimeError::ProviderNotSet {
            slot: PlayerSlot::Two,
        })?;

        let snapshot = self.handle.query_snapshot().await?;
        let intents: [Intents; 2] = tokio::try_join!(
            one.provide_intents(PlayerSlot::One, &snapshot),
            two.provide_intents(PlayerSlot::Two, &snapshot),
        )
        .map(|(one, two)| [one, two])?;

        self.handle.step(intents).await
    }

    /// Run the match in real time until a fighter falls
    ///
    /// Starts the match if it is still in setup, then steps once per
    /// `tick_ms`. A late tick delays the following ones instead of bursting.
    pub async fn run(&mut self) -> Result<MatchOutcome> {
        if self.handle.phase() == MatchPhase::Setup {
            self.handle.start().await?;
        }

        let period = Duration::from_millis(self.config.game_config.tick_ms.max(1));
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut ticks = 0u64;
        loop {
            if let Some(limit) = self.config.max_ticks
                && ticks >= limit
            {
                return Err(RuntimeError::TickBudgetExhausted { ticks });
            }

            interval.tick().await;
            let report = self.step().await?;
            ticks += 1;

            if let Some(outcome) = report.outcome {
                info!(tick = report.tick, %outcome, "match over");
                return Ok(outcome);
            }
        }
    }

    /// Shutdown the runtime gracefully
    ///
    /// Other handle clones keep the worker alive until they are dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        drop(self.providers);

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)?;
        debug!("runtime shut down");
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    roster: Option<Roster>,
    fighters: Option<(String, String)>,
    providers: [Option<Box<dyn IntentProvider>>; 2],
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            roster: None,
            fighters: None,
            providers: [None, None],
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Character roster to pick fighters from (default: bundled roster)
    pub fn roster(mut self, roster: Roster) -> Self {
        self.roster = Some(roster);
        self
    }

    /// Canonical names of player one and player two
    pub fn fighters(mut self, one: impl Into<String>, two: impl Into<String>) -> Self {
        self.fighters = Some((one.into(), two.into()));
        self
    }

    /// Set the intent provider for one player (optional until [`Runtime::step`])
    pub fn provider(mut self, slot: PlayerSlot, provider: impl IntentProvider + 'static) -> Self {
        self.providers[slot.index()] = Some(Box::new(provider));
        self
    }

    /// Build the runtime
    ///
    /// Validates the fighters against the roster and spawns the worker with
    /// the match in setup. Configuration errors surface here, before any tick.
    pub async fn build(self) -> Result<Runtime> {
        let (one, two) = self.fighters.ok_or(RuntimeError::MissingFighters)?;
        let roster = match self.roster {
            Some(roster) => roster,
            None => ContentFactory::bundled()
                .load_roster()
                .map_err(RuntimeError::ContentLoad)?,
        };

        let battle = Battle::setup(
            self.config.game_config.clone(),
            roster.get(&one)?,
            roster.get(&two)?,
        )?;

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let (phase_tx, phase_rx) = watch::channel(battle.phase());
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone(), phase_rx);

        let worker = BattleWorker::new(battle, command_rx, event_bus, phase_tx);
        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle,
            config: self.config,
            providers: self.providers,
            worker_handle,
        })
    }
}
