//! Session driver for a presentation surface.
//!
//! A `QuizSession` holds the state of record and the feedback that is
//! waiting to be dismissed. While feedback is pending, choices are refused;
//! this is the input lock a UI would otherwise implement by disabling its
//! buttons.

use tracing::{debug, warn};

use crate::core::{Catalog, GameState, QuizError};
use crate::rules::RoundEngine;

use super::feedback::Feedback;

/// One player's quiz, from the surface's point of view.
///
/// ## Example
///
/// ```
/// use flag_quiz::{Catalog, QuizSession, RoundEngine};
///
/// let mut session =
///     QuizSession::with_seed(RoundEngine::default(), Catalog::default(), 42).unwrap();
/// let feedback = session.choose(0).unwrap();
///
/// assert!(session.is_input_locked());
/// assert!(session.choose(1).is_err());
///
/// if !feedback.is_game_over() {
///     session.acknowledge().unwrap();
/// }
/// assert_eq!(session.state().rounds_played(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct QuizSession {
    engine: RoundEngine,
    catalog: Catalog,
    state: GameState,
    pending: Option<Feedback>,
}

impl QuizSession {
    /// Start a session with an entropy-seeded first game.
    pub fn new(engine: RoundEngine, catalog: Catalog) -> Result<Self, QuizError> {
        let state = engine.new_game(&catalog)?;
        Ok(Self::from_state(engine, catalog, state))
    }

    /// Start a session with a seeded first game.
    pub fn with_seed(engine: RoundEngine, catalog: Catalog, seed: u64) -> Result<Self, QuizError> {
        let state = engine.new_game_seeded(&catalog, seed)?;
        Ok(Self::from_state(engine, catalog, state))
    }

    /// Resume a session from a decoded snapshot.
    ///
    /// Restarts use the snapshot's catalog.
    pub fn resume(engine: RoundEngine, snapshot: &[u8]) -> Result<Self, QuizError> {
        let state = GameState::from_bytes(snapshot)?;
        let catalog = state.catalog().clone();
        Ok(Self::from_state(engine, catalog, state))
    }

    fn from_state(engine: RoundEngine, catalog: Catalog, state: GameState) -> Self {
        Self {
            engine,
            catalog,
            state,
            pending: None,
        }
    }

    /// The current state of record.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Feedback waiting to be dismissed, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&Feedback> {
        self.pending.as_ref()
    }

    /// Check if choices are currently refused.
    #[must_use]
    pub fn is_input_locked(&self) -> bool {
        self.pending.is_some() || self.state.is_game_over()
    }

    /// The country name the player is asked to find.
    #[must_use]
    pub fn prompt(&self) -> &str {
        self.state.target()
    }

    /// Score line shown under the flags.
    #[must_use]
    pub fn score_line(&self) -> String {
        format!("Score: {}/{}", self.state.score(), self.state.rounds_per_game())
    }

    /// Submit a choice for the current question.
    ///
    /// On success the new snapshot becomes the state of record and the
    /// returned feedback stays pending until dismissed.
    pub fn choose(&mut self, index: usize) -> Result<Feedback, QuizError> {
        if let Some(pending) = &self.pending {
            warn!(index, "choice refused, feedback pending");
            return Err(if pending.is_game_over() {
                QuizError::GameOverPending
            } else {
                QuizError::FeedbackPending
            });
        }

        let result = self.engine.submit_choice(&self.state, index).map_err(|e| {
            warn!(index, error = %e, "choice rejected");
            e
        })?;
        let feedback = Feedback::for_round(&result, self.engine.config());

        self.state = result.state;
        self.pending = Some(feedback.clone());
        Ok(feedback)
    }

    /// Dismiss round feedback and move on to the next question.
    ///
    /// Does nothing when no feedback is pending. The game-over prompt can
    /// only be dismissed with [`QuizSession::restart`].
    pub fn acknowledge(&mut self) -> Result<(), QuizError> {
        match &self.pending {
            Some(feedback) if feedback.is_game_over() => Err(QuizError::GameOverPending),
            _ => {
                self.pending = None;
                Ok(())
            }
        }
    }

    /// Discard the current game and start a new one.
    pub fn restart(&mut self) -> Result<(), QuizError> {
        let state = self.engine.start_new_game(&self.state, &self.catalog)?;
        self.replace(state);
        Ok(())
    }

    /// Seeded variant of [`QuizSession::restart`].
    pub fn restart_seeded(&mut self, seed: u64) -> Result<(), QuizError> {
        let state = self.engine.start_new_game_seeded(&self.state, &self.catalog, seed)?;
        self.replace(state);
        Ok(())
    }

    fn replace(&mut self, state: GameState) {
        debug!(target_name = state.target(), "session restarted");
        self.state = state;
        self.pending = None;
    }

    /// Encode the current state of record.
    pub fn snapshot(&self) -> Result<Vec<u8>, QuizError> {
        Ok(self.state.to_bytes()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InvalidChoiceError, QuizConfig};

    fn session() -> QuizSession {
        QuizSession::with_seed(RoundEngine::default(), Catalog::default(), 21).unwrap()
    }

    #[test]
    fn test_fresh_session() {
        let session = session();
        assert!(!session.is_input_locked());
        assert!(session.pending().is_none());
        assert_eq!(session.score_line(), "Score: 0/8");
        assert!(Catalog::default().contains(session.prompt()));
    }

    #[test]
    fn test_choice_locks_input_until_acknowledged() {
        let mut session = session();
        let correct = session.state().current().correct_index();

        let feedback = session.choose(correct).unwrap();
        assert_eq!(feedback.title, "Correct");
        assert_eq!(session.score_line(), "Score: 1/8");

        assert!(matches!(session.choose(0), Err(QuizError::FeedbackPending)));
        assert_eq!(session.state().rounds_played(), 1);

        session.acknowledge().unwrap();
        assert!(!session.is_input_locked());
        session.choose(0).unwrap();
        assert_eq!(session.state().rounds_played(), 2);
    }

    #[test]
    fn test_out_of_range_keeps_state() {
        let mut session = session();
        let before = session.state().clone();

        let err = session.choose(3).unwrap_err();
        assert!(matches!(
            err,
            QuizError::InvalidChoice(InvalidChoiceError::OutOfRange { index: 3, options: 3 })
        ));
        assert_eq!(session.state(), &before);
        assert!(session.pending().is_none());
    }

    #[test]
    fn test_game_over_requires_restart() {
        let engine = RoundEngine::new(QuizConfig::new().with_rounds_per_game(2));
        let mut session = QuizSession::with_seed(engine, Catalog::default(), 5).unwrap();

        session.choose(0).unwrap();
        session.acknowledge().unwrap();
        let last = session.choose(1).unwrap();
        assert!(last.is_game_over());

        assert!(matches!(session.acknowledge(), Err(QuizError::GameOverPending)));
        assert!(matches!(session.choose(0), Err(QuizError::GameOverPending)));

        session.restart_seeded(6).unwrap();
        assert_eq!(session.state().rounds_played(), 0);
        assert!(!session.is_input_locked());
    }

    #[test]
    fn test_acknowledge_without_pending() {
        let mut session = session();
        assert!(session.acknowledge().is_ok());
    }

    #[test]
    fn test_snapshot_resume() {
        let mut session = session();
        session.choose(1).unwrap();
        session.acknowledge().unwrap();

        let bytes = session.snapshot().unwrap();
        let resumed = QuizSession::resume(RoundEngine::default(), &bytes).unwrap();
        assert_eq!(resumed.state(), session.state());
        assert!(resumed.pending().is_none());
    }

    #[test]
    fn test_new_session_catalog_too_small() {
        let err = QuizSession::new(RoundEngine::default(), Catalog::new(["A", "B"])).unwrap_err();
        assert!(matches!(err, QuizError::Config(_)));
    }
}
