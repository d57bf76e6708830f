//! quizkit-catalog — Aggregated, queryable view over loaded definitions.
//!
//! The catalog loads once and serves reads for the process lifetime, or
//! until an explicit [`Catalog::reload`]. The internal snapshot is built
//! completely before it is published, so concurrent readers never observe
//! a partially populated catalog.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use anyhow::Result;
use chrono::{DateTime, Utc};

use quizkit_core::error::{QuizError, ValidationFailure};
use quizkit_core::model::{QuizDefinition, QuizSummary};
use quizkit_loader::Loader;

/// Immutable snapshot of one load cycle.
struct CatalogInner {
    by_id: HashMap<String, Arc<QuizDefinition>>,
    /// Summaries sorted by category, then title.
    summaries: Vec<QuizSummary>,
    failures: Vec<ValidationFailure>,
    loaded_at: DateTime<Utc>,
}

/// Aggregated store of all successfully loaded quiz definitions.
pub struct Catalog {
    inner: RwLock<Arc<CatalogInner>>,
}

impl Catalog {
    /// Run one full load pass and publish the result.
    pub fn load(loader: &Loader) -> Result<Self> {
        let inner = build_snapshot(loader)?;
        Ok(Self {
            inner: RwLock::new(Arc::new(inner)),
        })
    }

    /// Rebuild the snapshot from the loader and swap it in atomically.
    /// Readers keep whichever snapshot they already cloned.
    pub fn reload(&self, loader: &Loader) -> Result<()> {
        let inner = build_snapshot(loader)?;
        *self.inner.write().expect("catalog lock poisoned") = Arc::new(inner);
        Ok(())
    }

    fn snapshot(&self) -> Arc<CatalogInner> {
        Arc::clone(&self.inner.read().expect("catalog lock poisoned"))
    }

    /// Summaries of every loaded quiz, sorted by category then title.
    pub fn metadata(&self) -> Vec<QuizSummary> {
        self.snapshot().summaries.clone()
    }

    /// Distinct category names, in summary order.
    pub fn categories(&self) -> Vec<String> {
        let snapshot = self.snapshot();
        let mut categories: Vec<String> = Vec::new();
        for summary in &snapshot.summaries {
            if categories.last() != Some(&summary.category) {
                categories.push(summary.category.clone());
            }
        }
        categories
    }

    /// Look up one definition by id.
    pub fn get(&self, id: &str) -> Result<Arc<QuizDefinition>, QuizError> {
        self.snapshot()
            .by_id
            .get(id)
            .cloned()
            .ok_or_else(|| QuizError::NotFound(id.to_string()))
    }

    /// Validation failures from the most recent load cycle.
    pub fn failures(&self) -> Vec<ValidationFailure> {
        self.snapshot().failures.clone()
    }

    /// When the current snapshot was loaded.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.snapshot().loaded_at
    }

    pub fn len(&self) -> usize {
        self.snapshot().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn build_snapshot(loader: &Loader) -> Result<CatalogInner> {
    let outcome = loader.load_all()?;
    let mut by_id: HashMap<String, Arc<QuizDefinition>> = HashMap::new();
    let mut summaries = Vec::new();
    let mut failures = outcome.failures;

    for definition in outcome.definitions {
        if by_id.contains_key(&definition.id) {
            // Quiz ids must be unique within the catalog; later records
            // lose and are reported like any other invalid definition.
            let failure = ValidationFailure {
                source_name: definition.id.clone(),
                quiz_id: Some(definition.id.clone()),
                issues: vec![format!("duplicate quiz id: {}", definition.id)],
            };
            tracing::warn!("excluding duplicate quiz '{}'", definition.id);
            failures.push(failure);
            continue;
        }
        summaries.push(definition.summary());
        by_id.insert(definition.id.clone(), Arc::new(definition));
    }

    summaries.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.title.cmp(&b.title))
    });

    tracing::debug!(
        quizzes = by_id.len(),
        failures = failures.len(),
        "catalog snapshot built"
    );

    Ok(CatalogInner {
        by_id,
        summaries,
        failures,
        loaded_at: Utc::now(),
    })
}
