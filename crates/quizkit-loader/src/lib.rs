//! quizkit-loader — Content sources, definition parsing, and validation.
//!
//! Reads raw quiz records from an injected [`ContentSource`], parses them
//! into [`quizkit_core::QuizDefinition`] values, validates them, and
//! isolates per-record failures so one bad file never blocks the rest.

pub mod loader;
pub mod parser;
pub mod source;
pub mod validate;

pub use loader::{LoadOutcome, Loader};
pub use source::{ContentSource, DirSource, MemorySource, RawRecord, RecordFormat};
