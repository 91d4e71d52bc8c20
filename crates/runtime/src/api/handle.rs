//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! stepping the match or streaming events from specific topics.
use std::collections::HashMap;

use tokio::sync::{broadcast, mpsc, oneshot, watch};

use game_core::{BattleSnapshot, Intents, MatchPhase, TickReport};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
    phase_rx: watch::Receiver<MatchPhase>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_bus: EventBus,
        phase_rx: watch::Receiver<MatchPhase>,
    ) -> Self {
        Self {
            command_tx,
            event_bus,
            phase_rx,
        }
    }

    /// Start the match clock (Setup → Active)
    pub async fn start(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Start { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Run one tick with the intents of player one and player two
    pub async fn step(&self, intents: [Intents; 2]) -> Result<TickReport> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Step {
                intents,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Query the current match state (read-only snapshot)
    pub async fn query_snapshot(&self) -> Result<BattleSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QuerySnapshot { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Latest match phase published by the worker
    pub fn phase(&self) -> MatchPhase {
        *self.phase_rx.borrow()
    }

    /// Receiver that observes every phase transition
    pub fn watch_phase(&self) -> watch::Receiver<MatchPhase> {
        self.phase_rx.clone()
    }

    /// Resolves once the match is finished
    ///
    /// Fails with [`RuntimeError::CommandChannelClosed`] if the worker stops
    /// before the match ends.
    pub async fn finished(&self) -> Result<()> {
        let mut phase_rx = self.phase_rx.clone();
        phase_rx
            .wait_for(|phase| *phase == MatchPhase::Finished)
            .await
            .map(|_| ())
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Combat` - Damage, skills, projectiles, evolution
    /// - `Topic::Notification` - Mana warnings and collision sounds
    /// - `Topic::Match` - Match start and finish
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// // Only subscribe to lifecycle events
    /// let mut match_rx = handle.subscribe(Topic::Match);
    /// while let Ok(event) = match_rx.recv().await {
    ///     // Handle match events
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
