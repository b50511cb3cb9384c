//! Feedback shown to the player after a round.
//!
//! Reveal timing: every result waits `feedback_delay` before showing,
//! except a correct answer on the final round, which shows the game-over
//! prompt immediately.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Outcome, QuizConfig};
use crate::rules::RoundResult;

/// The button the surface offers to dismiss feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackAction {
    /// Move on to the next question.
    Continue,
    /// Discard the finished game and start another.
    StartNewGame,
}

/// Text, timing, and follow-up action for one resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub outcome: Outcome,
    pub title: String,
    pub message: Option<String>,
    /// How long after the choice the surface should reveal this.
    pub delay: Duration,
    pub action: FeedbackAction,
}

impl Feedback {
    /// Compose feedback for a round result.
    #[must_use]
    pub fn for_round(result: &RoundResult, config: &QuizConfig) -> Self {
        let state = &result.state;
        let score = state.score();

        if result.ended_game() {
            let delay = match result.outcome {
                Outcome::Correct => Duration::ZERO,
                Outcome::Incorrect => config.feedback_delay,
            };
            return Self {
                outcome: result.outcome,
                title: game_over_title(score, state.rounds_per_game()),
                message: None,
                delay,
                action: FeedbackAction::StartNewGame,
            };
        }

        let title = match result.outcome {
            Outcome::Correct => "Correct".to_string(),
            Outcome::Incorrect => format!("Wrong! It's a flag of {}", result.chosen),
        };
        Self {
            outcome: result.outcome,
            title,
            message: Some(format!("Your score is {score}")),
            delay: config.feedback_delay,
            action: FeedbackAction::Continue,
        }
    }

    /// Check if this is the game-over prompt.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.action == FeedbackAction::StartNewGame
    }
}

fn game_over_title(score: u32, rounds: u32) -> String {
    format!("Game over, your score is {score} out of {rounds}")
}
