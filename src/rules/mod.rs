//! Quiz rules: the round engine.
//!
//! The engine owns every transition of a `GameState`:
//! - starting a game from a catalog
//! - resolving a choice into an outcome and the next snapshot
//! - discarding a game and starting over
//!
//! It never renders, waits, or schedules anything.

pub mod engine;

pub use engine::{RoundEngine, RoundResult};
