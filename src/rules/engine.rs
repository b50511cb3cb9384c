//! The round engine: new games, choice resolution, restarts.
//!
//! All transitions are synchronous and pure. Each takes a snapshot by
//! reference and returns a new one; on error nothing is produced and the
//! caller's snapshot remains the state of record.

use im::Vector;
use tracing::{debug, info};

use crate::core::{
    Catalog, ConfigError, GameState, InvalidChoiceError, Outcome, Question, QuizConfig, QuizRng,
    RoundRecord,
};

/// What resolving one choice produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundResult {
    /// Whether the choice matched the target.
    pub outcome: Outcome,
    /// Identifier of the option the player picked.
    pub chosen: String,
    /// The new state of record.
    pub state: GameState,
}

impl RoundResult {
    /// Check if this choice ended the game.
    #[must_use]
    pub fn ended_game(&self) -> bool {
        self.state.is_game_over()
    }
}

/// Round and scoring engine.
///
/// ## Example
///
/// ```
/// use flag_quiz::{Catalog, RoundEngine, Outcome};
///
/// let engine = RoundEngine::default();
/// let state = engine.new_game_seeded(&Catalog::default(), 42).unwrap();
///
/// let correct = state.current().correct_index();
/// let result = engine.submit_choice(&state, correct).unwrap();
///
/// assert_eq!(result.outcome, Outcome::Correct);
/// assert_eq!(result.state.score(), 1);
/// assert_eq!(state.score(), 0); // the old snapshot is untouched
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundEngine {
    config: QuizConfig,
}

impl RoundEngine {
    /// Create an engine with the given config.
    #[must_use]
    pub fn new(config: QuizConfig) -> Self {
        Self { config }
    }

    /// Get the engine configuration.
    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Start a game seeded from OS entropy.
    pub fn new_game(&self, catalog: &Catalog) -> Result<GameState, ConfigError> {
        self.start(catalog, QuizRng::from_entropy())
    }

    /// Start a game with a fixed seed. Same seed and same choices give the
    /// same game.
    pub fn new_game_seeded(&self, catalog: &Catalog, seed: u64) -> Result<GameState, ConfigError> {
        self.start(catalog, QuizRng::new(seed))
    }

    /// Discard `state` and start over. Score and round count are dropped
    /// unconditionally, whether or not the game had finished.
    pub fn start_new_game(
        &self,
        state: &GameState,
        catalog: &Catalog,
    ) -> Result<GameState, ConfigError> {
        debug!(
            rounds_played = state.rounds_played(),
            score = state.score(),
            "discarding game"
        );
        self.new_game(catalog)
    }

    /// Seeded variant of [`RoundEngine::start_new_game`].
    pub fn start_new_game_seeded(
        &self,
        state: &GameState,
        catalog: &Catalog,
        seed: u64,
    ) -> Result<GameState, ConfigError> {
        debug!(
            rounds_played = state.rounds_played(),
            score = state.score(),
            "discarding game"
        );
        self.new_game_seeded(catalog, seed)
    }

    fn start(&self, catalog: &Catalog, mut rng: QuizRng) -> Result<GameState, ConfigError> {
        self.config.check_catalog_size(catalog.len())?;
        let current = Question::draw(catalog, self.config.options_per_question, &mut rng)?;

        debug!(
            seed = rng.seed(),
            catalog = catalog.len(),
            rounds = self.config.rounds_per_game,
            "new game"
        );

        Ok(GameState {
            rounds_played: 0,
            rounds_per_game: self.config.rounds_per_game,
            score: 0,
            current,
            game_over: false,
            catalog: catalog.clone(),
            rng: rng.state(),
            history: Vector::new(),
        })
    }

    /// Resolve the player's choice for the current question.
    ///
    /// Every accepted choice plays one round. The choice that plays the
    /// last round ends the game and no further question is drawn; the
    /// final question stays as `current`.
    pub fn submit_choice(
        &self,
        state: &GameState,
        choice: usize,
    ) -> Result<RoundResult, InvalidChoiceError> {
        if state.game_over || state.rounds_played >= state.rounds_per_game {
            return Err(InvalidChoiceError::GameOver);
        }
        let question = &state.current;
        let chosen = question
            .option(choice)
            .ok_or(InvalidChoiceError::OutOfRange {
                index: choice,
                options: question.len(),
            })?
            .to_string();

        let outcome = if question.is_correct(choice) {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };

        let rounds_played = state.rounds_played + 1;
        let score = state.score + u32::from(outcome.is_correct());
        let game_over = rounds_played >= state.rounds_per_game;

        let (current, rng) = if game_over {
            (question.clone(), state.rng)
        } else {
            let mut rng = QuizRng::from_state(&state.rng);
            let next = Question::draw(&state.catalog, question.len(), &mut rng)
                .map_err(|_| InvalidChoiceError::Unplayable)?;
            (next, rng.state())
        };

        let mut history = state.history.clone();
        history.push_back(RoundRecord {
            round: rounds_played,
            question: question.clone(),
            chosen: choice,
            outcome,
        });

        debug!(round = rounds_played, score, ?outcome, "round resolved");
        if game_over {
            info!(score, rounds = rounds_played, "game over");
        }

        Ok(RoundResult {
            outcome,
            chosen,
            state: GameState {
                rounds_played,
                rounds_per_game: state.rounds_per_game,
                score,
                current,
                game_over,
                catalog: state.catalog.clone(),
                rng,
                history,
            },
        })
    }
}
