//! Shared error types.
//!
//! Defined in `quizkit-core` so the loader, catalog, and session crates
//! share one taxonomy and callers can classify failures without string
//! matching.

use thiserror::Error;

use crate::model::SessionState;

/// Errors surfaced by catalog lookups and session transitions.
#[derive(Debug, Clone, Error)]
pub enum QuizError {
    /// No quiz definition with the requested identifier.
    #[error("quiz not found: {0}")]
    NotFound(String),

    /// A session action invoked in a state that does not permit it.
    #[error("cannot {action} while the session is {state}")]
    InvalidTransition {
        action: &'static str,
        state: SessionState,
    },

    /// `reveal` called before any answer was selected for the current
    /// question.
    #[error("no answer selected for question '{question}'")]
    AnswerNotSelected { question: String },

    /// A selected option index outside the question's option list.
    #[error("option {index} out of range for question '{question}' ({options} options)")]
    OptionOutOfRange {
        question: String,
        index: usize,
        options: usize,
    },

    /// A session was started over a definition with no questions. Cannot
    /// happen for catalog-loaded definitions, which reject empty quizzes
    /// at validation time.
    #[error("quiz '{0}' has no questions")]
    EmptyQuiz(String),
}

impl QuizError {
    /// Returns `true` for errors that signal a defect in the calling UI
    /// rather than missing data. Usage errors are not retryable.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            QuizError::InvalidTransition { .. }
                | QuizError::AnswerNotSelected { .. }
                | QuizError::OptionOutOfRange { .. }
        )
    }
}

/// Failure report for one rejected quiz definition.
///
/// Non-fatal to the catalog as a whole: the offending quiz is excluded
/// and the failure retained so authors can fix the configuration without
/// blocking unrelated valid quizzes.
#[derive(Debug, Clone, Error)]
#[error("invalid quiz definition from {source_name}: {}", .issues.join("; "))]
pub struct ValidationFailure {
    /// Name of the record that failed (e.g. a file name).
    pub source_name: String,
    /// Quiz identifier, when parsing got far enough to know it.
    pub quiz_id: Option<String>,
    /// Every issue found, not just the first.
    pub issues: Vec<String>,
}
