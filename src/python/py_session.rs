//! Session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Catalog, QuizConfig, QuizError};
use crate::rules::RoundEngine;
use crate::surface::{Feedback, QuizSession};

fn to_py_err(err: QuizError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for Feedback.
#[pyclass(name = "Feedback")]
#[derive(Clone, Debug)]
pub struct PyFeedback(pub Feedback);

#[pymethods]
impl PyFeedback {
    #[getter]
    fn title(&self) -> String {
        self.0.title.clone()
    }

    #[getter]
    fn message(&self) -> Option<String> {
        self.0.message.clone()
    }

    #[getter]
    fn correct(&self) -> bool {
        self.0.outcome.is_correct()
    }

    /// Seconds the UI should wait before revealing this feedback.
    #[getter]
    fn delay_secs(&self) -> f64 {
        self.0.delay.as_secs_f64()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.0.is_game_over()
    }

    fn __repr__(&self) -> String {
        format!("Feedback(title={:?}, delay={}s)", self.0.title, self.0.delay.as_secs_f64())
    }
}

/// Python wrapper for QuizSession.
#[pyclass(name = "QuizSession")]
pub struct PyQuizSession {
    session: QuizSession,
}

#[pymethods]
impl PyQuizSession {
    /// Create a new session.
    ///
    /// # Arguments
    /// - catalog: Country names to draw from (defaults to the built-in list)
    /// - options: Flags shown per question
    /// - rounds: Rounds per game
    /// - seed: RNG seed; `None` seeds from OS entropy
    #[new]
    #[pyo3(signature = (catalog = None, options = 3, rounds = 8, seed = None))]
    fn new(
        catalog: Option<Vec<String>>,
        options: usize,
        rounds: u32,
        seed: Option<u64>,
    ) -> PyResult<Self> {
        let catalog = catalog.map(Catalog::new).unwrap_or_default();
        let engine = RoundEngine::new(
            QuizConfig::new()
                .with_options_per_question(options)
                .with_rounds_per_game(rounds),
        );
        let session = match seed {
            Some(seed) => QuizSession::with_seed(engine, catalog, seed),
            None => QuizSession::new(engine, catalog),
        }
        .map_err(to_py_err)?;
        Ok(Self { session })
    }

    /// Submit a choice; returns the feedback to show.
    fn choose(&mut self, index: usize) -> PyResult<PyFeedback> {
        self.session.choose(index).map(PyFeedback).map_err(to_py_err)
    }

    /// Dismiss round feedback.
    fn acknowledge(&mut self) -> PyResult<()> {
        self.session.acknowledge().map_err(to_py_err)
    }

    /// Start a new game.
    #[pyo3(signature = (seed = None))]
    fn restart(&mut self, seed: Option<u64>) -> PyResult<()> {
        match seed {
            Some(seed) => self.session.restart_seeded(seed),
            None => self.session.restart(),
        }
        .map_err(to_py_err)
    }

    #[getter]
    fn prompt(&self) -> String {
        self.session.prompt().to_string()
    }

    #[getter]
    fn options(&self) -> Vec<String> {
        self.session.state().current().options().to_vec()
    }

    #[getter]
    fn score(&self) -> u32 {
        self.session.state().score()
    }

    #[getter]
    fn rounds_played(&self) -> u32 {
        self.session.state().rounds_played()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.session.state().is_game_over()
    }

    #[getter]
    fn input_locked(&self) -> bool {
        self.session.is_input_locked()
    }

    fn __repr__(&self) -> String {
        format!("QuizSession({})", self.session.score_line())
    }
}
