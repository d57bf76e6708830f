//! quizkit-session — Per-attempt state machine over one quiz definition.
//!
//! A session drives a single user's progress:
//! `NotStarted → InProgress → Completed`. Definitions stay immutable and
//! shared; all mutable progress lives here and is discarded on restart or
//! abandonment. Nothing is persisted.

pub mod session;

pub use session::{QuizSession, Reveal, SessionView};

use quizkit_catalog::Catalog;
use quizkit_core::error::QuizError;

/// Resolve a quiz through the catalog and start a session over it.
///
/// Fails with [`QuizError::NotFound`] when the id is unknown.
pub fn start_session(catalog: &Catalog, quiz_id: &str) -> Result<QuizSession, QuizError> {
    let definition = catalog.get(quiz_id)?;
    let mut session = QuizSession::new(definition);
    session.start()?;
    Ok(session)
}
