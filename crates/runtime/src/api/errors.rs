//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, match setup, and intent providers
//! so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{ConfigError, EngineError, PlayerSlot};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("intent provider for {slot} not set")]
    ProviderNotSet { slot: PlayerSlot },

    #[error("runtime requires two fighters to be selected before building")]
    MissingFighters,

    #[error("battle worker command channel closed")]
    CommandChannelClosed,

    #[error("battle worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("battle worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("invalid match configuration")]
    ConfigLoadFailure(#[from] ConfigError),

    #[error("failed to load content: {0:#}")]
    ContentLoad(anyhow::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("match still running after {ticks} ticks")]
    TickBudgetExhausted { ticks: u64 },
}
