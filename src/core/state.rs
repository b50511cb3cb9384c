//! Game state snapshots.
//!
//! A `GameState` is an immutable value: the engine never edits one in
//! place, it returns a new snapshot from every transition. Snapshots hold
//! the catalog and round history in `im` persistent structures, so keeping
//! old snapshots around (undo, replay, UI diffing) costs O(1) per clone.
//!
//! The RNG position travels with the snapshot as a `QuizRngState`, which
//! makes the next question a pure function of the current snapshot.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::catalog::Catalog;
use super::error::SnapshotError;
use super::question::Question;
use super::rng::QuizRngState;

/// Result of resolving one choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    /// Check if the choice was correct.
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Outcome::Correct)
    }
}

/// Coarse game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Choices are accepted.
    InProgress,
    /// The final round was resolved; only a new game continues.
    GameOver,
}

/// A resolved round, kept in the snapshot's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number (starts at 1).
    pub round: u32,
    /// The question that was shown.
    pub question: Question,
    /// Index the player chose.
    pub chosen: usize,
    /// Whether the choice matched.
    pub outcome: Outcome,
}

impl RoundRecord {
    /// The identifier the player picked.
    #[must_use]
    pub fn chosen_name(&self) -> &str {
        self.question.option(self.chosen).unwrap_or_default()
    }
}

/// Immutable snapshot of one game.
///
/// Every decode path, serde or [`GameState::from_bytes`], checks the
/// snapshot's invariants before handing it out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr")]
pub struct GameState {
    pub(crate) rounds_played: u32,
    pub(crate) rounds_per_game: u32,
    pub(crate) score: u32,
    pub(crate) current: Question,
    pub(crate) game_over: bool,
    pub(crate) catalog: Catalog,
    pub(crate) rng: QuizRngState,
    pub(crate) history: Vector<RoundRecord>,
}

/// Unchecked wire form of a `GameState`.
#[derive(Deserialize)]
struct GameStateRepr {
    rounds_played: u32,
    rounds_per_game: u32,
    score: u32,
    current: Question,
    game_over: bool,
    catalog: Catalog,
    rng: QuizRngState,
    history: Vector<RoundRecord>,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = SnapshotError;

    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        let state = Self {
            rounds_played: repr.rounds_played,
            rounds_per_game: repr.rounds_per_game,
            score: repr.score,
            current: repr.current,
            game_over: repr.game_over,
            catalog: repr.catalog,
            rng: repr.rng,
            history: repr.history,
        };
        state.check_invariants()?;
        Ok(state)
    }
}

impl GameState {
    /// Rounds resolved so far.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Rounds this game lasts.
    #[must_use]
    pub fn rounds_per_game(&self) -> u32 {
        self.rounds_per_game
    }

    /// Correct answers so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The question on screen, or the last one shown once the game is over.
    #[must_use]
    pub fn current(&self) -> &Question {
        &self.current
    }

    /// Name of the country the player is asked to find.
    #[must_use]
    pub fn target(&self) -> &str {
        self.current.target()
    }

    /// Check if the final round has been resolved.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else {
            Phase::InProgress
        }
    }

    /// Rounds still to play.
    #[must_use]
    pub fn rounds_remaining(&self) -> u32 {
        self.rounds_per_game.saturating_sub(self.rounds_played)
    }

    /// The catalog this game draws from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolved rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    /// RNG position for the next draw.
    #[must_use]
    pub fn rng_state(&self) -> QuizRngState {
        self.rng
    }

    // === Snapshots ===

    /// Encode the snapshot with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot, rejecting states the engine could never produce.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let repr: GameStateRepr = bincode::deserialize(bytes)?;
        Self::try_from(repr)
    }

    pub(crate) fn check_invariants(&self) -> Result<(), SnapshotError> {
        if self.rounds_per_game == 0 || self.rounds_played > self.rounds_per_game {
            return Err(SnapshotError::Corrupt("round count out of range"));
        }
        if self.score > self.rounds_played {
            return Err(SnapshotError::Corrupt("score exceeds rounds played"));
        }
        if self.game_over != (self.rounds_played == self.rounds_per_game) {
            return Err(SnapshotError::Corrupt("game-over flag disagrees with round count"));
        }
        if !self.current.is_well_formed() {
            return Err(SnapshotError::Corrupt("malformed question"));
        }
        let in_catalog = self.current.options().iter().all(|o| self.catalog.contains(o));
        if !self.catalog.is_well_formed() || !in_catalog {
            return Err(SnapshotError::Corrupt("question options missing from catalog"));
        }
        if self.history.len() != self.rounds_played as usize {
            return Err(SnapshotError::Corrupt("history length disagrees with round count"));
        }
        if self.history.iter().any(|r| r.chosen >= r.question.len()) {
            return Err(SnapshotError::Corrupt("recorded choice out of range"));
        }
        let correct = self.history.iter().filter(|r| r.outcome.is_correct()).count();
        if correct != self.score as usize {
            return Err(SnapshotError::Corrupt("history disagrees with score"));
        }
        Ok(())
    }
}
