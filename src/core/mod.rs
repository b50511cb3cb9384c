//! Core quiz types: catalog, questions, state snapshots, RNG, configuration.
//!
//! Everything here is plain data. Transitions live in `rules`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod question;
pub mod rng;
pub mod state;

pub use catalog::{Catalog, DEFAULT_COUNTRIES};
pub use config::{
    QuizConfig, DEFAULT_FEEDBACK_DELAY, DEFAULT_OPTIONS_PER_QUESTION, DEFAULT_ROUNDS_PER_GAME,
};
pub use error::{ConfigError, InvalidChoiceError, QuizError, SnapshotError};
pub use question::Question;
pub use rng::{QuizRng, QuizRngState};
pub use state::{GameState, Outcome, Phase, RoundRecord};
