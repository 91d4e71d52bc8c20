//! Worker tasks that back the runtime orchestration.
//!
//! The battle worker is the single owner of match state; everything else
//! talks to it through commands and the event bus.

mod battle;

pub use battle::{BattleWorker, Command};
