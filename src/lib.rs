//! # flag-quiz
//!
//! Round and scoring engine for a guess-the-flag quiz: the player sees a
//! country name and three flags, picks one, and is scored over an
//! eight-round game.
//!
//! ## Design Principles
//!
//! 1. **Immutable Snapshots**: Every transition returns a new `GameState`.
//!    Nothing is edited in place, so a failed call never leaves a
//!    half-updated game behind.
//!
//! 2. **No Hidden Globals**: The catalog is passed in explicitly and the
//!    RNG position travels inside each snapshot.
//!
//! 3. **Timing Belongs to the Caller**: The engine never waits. Feedback
//!    carries the delay a surface should apply before revealing it.
//!
//! ## Modules
//!
//! - `core`: Catalog, questions, state snapshots, RNG, configuration, errors
//! - `rules`: `RoundEngine`, the only thing that transitions a game
//! - `surface`: Feedback composition and the `QuizSession` input lock

pub mod core;
pub mod rules;
pub mod surface;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Catalog, ConfigError, GameState, InvalidChoiceError, Outcome, Phase, Question, QuizConfig,
    QuizError, QuizRng, QuizRngState, RoundRecord, SnapshotError,
};

pub use crate::rules::{RoundEngine, RoundResult};

pub use crate::surface::{Feedback, FeedbackAction, QuizSession};
