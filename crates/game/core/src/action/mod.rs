//! Player intents and their translation into state mutations.
//!
//! # Module Structure
//!
//! - `intents`: per-tick input flags and movement directions
//! - `dispatcher`: priority chain, busy/exclusive gating and resource checks
//! - `error`: invocation failures (`DispatchError`)

mod dispatcher;
mod error;
mod intents;

pub use dispatcher::{ActionDispatcher, Dispatched};
pub use error::DispatchError;
pub use intents::{Direction, Intents};
