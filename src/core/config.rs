//! Quiz configuration.
//!
//! Games configure the engine with a `QuizConfig` builder. The defaults
//! are the classic game: three flags per question, eight rounds, and a
//! 700ms pause before feedback is revealed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default number of options shown per question.
pub const DEFAULT_OPTIONS_PER_QUESTION: usize = 3;

/// Default number of rounds in one game.
pub const DEFAULT_ROUNDS_PER_GAME: u32 = 8;

/// Default pause between a choice and its feedback being revealed.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(700);

/// Configuration for a quiz game.
///
/// ## Example
///
/// ```
/// use flag_quiz::core::QuizConfig;
///
/// let config = QuizConfig::new()
///     .with_options_per_question(4)
///     .with_rounds_per_game(10);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.options_per_question, 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Options drawn per question (at least 2).
    pub options_per_question: usize,

    /// Rounds in one game; resolving the last one ends the game.
    pub rounds_per_game: u32,

    /// How long the surface should wait before revealing feedback.
    ///
    /// The engine never waits itself; this only travels with the result.
    pub feedback_delay: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            options_per_question: DEFAULT_OPTIONS_PER_QUESTION,
            rounds_per_game: DEFAULT_ROUNDS_PER_GAME,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
        }
    }
}

impl QuizConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of options per question.
    #[must_use]
    pub fn with_options_per_question(mut self, options: usize) -> Self {
        self.options_per_question = options;
        self
    }

    /// Set the number of rounds per game.
    #[must_use]
    pub fn with_rounds_per_game(mut self, rounds: u32) -> Self {
        self.rounds_per_game = rounds;
        self
    }

    /// Set the feedback reveal delay.
    #[must_use]
    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay = delay;
        self
    }

    /// Check the config on its own, before any catalog is involved.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.options_per_question < 2 {
            return Err(ConfigError::TooFewOptions(self.options_per_question));
        }
        if self.rounds_per_game == 0 {
            return Err(ConfigError::NoRounds);
        }
        Ok(())
    }

    /// Check that a catalog of `size` entries can fill a question.
    pub fn check_catalog_size(&self, size: usize) -> Result<(), ConfigError> {
        self.validate()?;
        if size < self.options_per_question {
            return Err(ConfigError::CatalogTooSmall {
                size,
                required: self.options_per_question,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QuizConfig::default();
        assert_eq!(config.options_per_question, 3);
        assert_eq!(config.rounds_per_game, 8);
        assert_eq!(config.feedback_delay, Duration::from_millis(700));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = QuizConfig::new()
            .with_options_per_question(5)
            .with_rounds_per_game(3)
            .with_feedback_delay(Duration::ZERO);

        assert_eq!(config.options_per_question, 5);
        assert_eq!(config.rounds_per_game, 3);
        assert_eq!(config.feedback_delay, Duration::ZERO);
    }

    #[test]
    fn test_invalid_configs() {
        assert_eq!(
            QuizConfig::new().with_options_per_question(1).validate(),
            Err(ConfigError::TooFewOptions(1))
        );
        assert_eq!(
            QuizConfig::new().with_rounds_per_game(0).validate(),
            Err(ConfigError::NoRounds)
        );
    }

    #[test]
    fn test_catalog_size() {
        let config = QuizConfig::default();
        assert!(config.check_catalog_size(3).is_ok());
        assert_eq!(
            config.check_catalog_size(2),
            Err(ConfigError::CatalogTooSmall { size: 2, required: 3 })
        );
    }
}
