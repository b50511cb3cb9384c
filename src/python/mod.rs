//! Python bindings for the flag-quiz engine.
//!
//! Lets a Python front end drive a quiz session without reimplementing
//! the rules.
//!
//! # Quick Start
//!
//! ```python
//! import flag_quiz as fq
//!
//! session = fq.QuizSession(seed=42)
//! print(session.prompt, session.options)
//!
//! feedback = session.choose(0)
//! print(feedback.title, feedback.delay_secs)
//!
//! session.acknowledge()
//! ```

use pyo3::prelude::*;

mod py_session;

pub use py_session::*;

/// flag_quiz: round and scoring engine for a guess-the-flag quiz.
#[pymodule]
fn flag_quiz(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyFeedback>()?;
    m.add_class::<PyQuizSession>()?;

    Ok(())
}
