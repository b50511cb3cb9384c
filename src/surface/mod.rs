//! Surface-side helpers: what to show after a round, and when.
//!
//! Nothing here renders. A UI layer reads `Feedback` values, waits the
//! reported delay with its own timer, and calls back into `QuizSession`
//! when the player dismisses them.

mod feedback;
mod session;

pub use feedback::{Feedback, FeedbackAction};
pub use session::QuizSession;
