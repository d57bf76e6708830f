//! quizkit-core — Quiz definition data model and error taxonomy.
//!
//! This crate defines the fundamental types that the entire quizkit system
//! builds on: quiz definitions, questions, session state tags, and the
//! shared error types.

pub mod error;
pub mod model;

pub use error::{QuizError, ValidationFailure};
pub use model::{
    Difficulty, DifficultyLevels, Icon, Question, QuizDefinition, QuizMetadata, QuizSummary,
    SessionState, Theme,
};
