//! Runtime orchestration for the real-time battle simulation.
//!
//! This crate wires together the intent provider abstraction, the battle
//! worker, and the event bus into a cohesive runtime API. Consumers embed
//! [`Runtime`] to pace ticks, subscribe to events, and interact with the match
//! through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`providers`] ships ready-made intent sources
//! - `workers` keeps the battle task internal to the crate
pub mod api;
pub mod events;
pub mod providers;
pub mod runtime;

mod workers;

pub use api::{IdleIntentProvider, IntentProvider, Result, RuntimeError, RuntimeHandle};
pub use events::{Event, EventBus, MatchEvent, TickEvent, Topic};
pub use providers::{IntentLatch, LatchedIntentProvider, RandomIntentProvider, ScriptedIntentProvider};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
