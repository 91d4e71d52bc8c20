//! Intent provider implementations for different input sources.

pub mod latched;
pub mod random;
pub mod scripted;

pub use latched::{IntentLatch, LatchedIntentProvider};
pub use random::RandomIntentProvider;
pub use scripted::ScriptedIntentProvider;
