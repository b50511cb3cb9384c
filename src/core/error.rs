//! Error types for the quiz engine.
//!
//! Both engine errors are contract violations, not transient failures:
//! nothing here is ever retried. Every failing call leaves its input
//! untouched.

use thiserror::Error;

/// The engine cannot be set up with the given catalog or configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The catalog holds fewer identifiers than a question needs.
    #[error("catalog has {size} entries, need at least {required} distinct options")]
    CatalogTooSmall { size: usize, required: usize },

    /// A question must offer a real choice.
    #[error("a question needs at least 2 options, got {0}")]
    TooFewOptions(usize),

    /// A game must have at least one round.
    #[error("a game needs at least one round")]
    NoRounds,
}

/// A choice was submitted that the engine refuses to resolve.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidChoiceError {
    /// The index does not name one of the current question's options.
    #[error("choice {index} is out of range for {options} options")]
    OutOfRange { index: usize, options: usize },

    /// The game already ended; only a new game accepts choices.
    #[error("the game is over, start a new game first")]
    GameOver,

    /// The snapshot cannot supply another question. Snapshots built by the
    /// engine or decoded through `GameState::from_bytes` never hit this.
    #[error("the game state cannot draw another question")]
    Unplayable,
}

/// A snapshot could not be encoded or decoded.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Codec(#[from] bincode::Error),

    /// Decoded bytes describe a state the engine could never produce.
    #[error("corrupt snapshot: {0}")]
    Corrupt(&'static str),
}

/// Session-level error, wrapping everything a surface can run into.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    InvalidChoice(#[from] InvalidChoiceError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// Feedback for the previous round has not been acknowledged yet.
    #[error("feedback for the previous round is still pending")]
    FeedbackPending,

    /// The game-over prompt can only be dismissed by starting a new game.
    #[error("the game is over, acknowledge it by starting a new game")]
    GameOverPending,
}

impl QuizError {
    /// Returns `true` if the error comes from the caller acting out of turn
    /// rather than from bad setup.
    pub fn is_input_locked(&self) -> bool {
        matches!(self, QuizError::FeedbackPending | QuizError::GameOverPending)
    }
}
