//! The loader: record → parse → validate → definition.
//!
//! A single bad record is isolated and reported as a
//! [`ValidationFailure`]; every other record continues to load.

use anyhow::Result;

use quizkit_core::error::{QuizError, ValidationFailure};
use quizkit_core::model::QuizDefinition;

use crate::parser::parse_definition;
use crate::source::{ContentSource, RawRecord};
use crate::validate::validate_definition;

/// Loads quiz definitions from an injected content source.
pub struct Loader {
    source: Box<dyn ContentSource>,
}

/// The partitioned result of one full load pass.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Definitions that parsed, validated, and normalized cleanly.
    pub definitions: Vec<QuizDefinition>,
    /// Per-record failures, in source order.
    pub failures: Vec<ValidationFailure>,
}

impl Loader {
    pub fn new(source: impl ContentSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Lazily parse and validate every record from the source.
    ///
    /// Restartable: each call re-reads the source. Only the enumeration
    /// itself can fail; per-record problems surface as `Err` items.
    pub fn list_all(
        &self,
    ) -> Result<impl Iterator<Item = Result<QuizDefinition, ValidationFailure>>> {
        let records = self.source.records()?;
        Ok(records.into_iter().map(load_record))
    }

    /// Load everything, partitioning definitions from failures and
    /// logging each failure.
    pub fn load_all(&self) -> Result<LoadOutcome> {
        let mut outcome = LoadOutcome::default();
        for item in self.list_all()? {
            match item {
                Ok(definition) => outcome.definitions.push(definition),
                Err(failure) => {
                    tracing::warn!("skipping {}: {}", failure.source_name, failure);
                    outcome.failures.push(failure);
                }
            }
        }
        Ok(outcome)
    }

    /// Find one definition by id, scanning the source.
    ///
    /// Fails with [`QuizError::NotFound`] when no valid definition has the
    /// identifier. Callers that look up repeatedly should go through the
    /// catalog instead.
    pub fn get_by_id(&self, id: &str) -> Result<QuizDefinition> {
        for item in self.list_all()? {
            if let Ok(definition) = item {
                if definition.id == id {
                    return Ok(definition);
                }
            }
        }
        Err(QuizError::NotFound(id.to_string()).into())
    }
}

fn load_record(record: RawRecord) -> Result<QuizDefinition, ValidationFailure> {
    let definition = parse_definition(&record).map_err(|e| ValidationFailure {
        source_name: record.name.clone(),
        quiz_id: None,
        issues: vec![format!("{e:#}")],
    })?;

    let issues = validate_definition(&definition);
    if !issues.is_empty() {
        return Err(ValidationFailure {
            source_name: record.name,
            quiz_id: Some(definition.id),
            issues,
        });
    }
    Ok(definition)
}
