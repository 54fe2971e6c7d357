//! Sequential seeding of the catalog.
//!
//! A [`SeedPlan`] is an ordered task list. Tasks run one at a time, each
//! awaited before the next starts, and the first failure halts the plan so a
//! failure always belongs to a known prefix. Records created before the
//! failure stay created.

use crate::catalog::{CatalogClient, CatalogError, CatalogResult};
use crate::types::AttractionRecord;

/// The create that stopped a seed run.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedFailure {
    /// Zero-based position in the plan.
    pub index: usize,
    pub total: usize,
    pub name: String,
    pub error: CatalogError,
}

impl SeedFailure {
    pub fn message(&self) -> String {
        format!(
            "Failed to create '{}' ({} of {}): {}",
            self.name,
            self.index + 1,
            self.total,
            self.error.display_message()
        )
    }
}

/// What happened to each task of a plan.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeedProgress {
    pub created: Vec<String>,
    pub failure: Option<SeedFailure>,
    pub skipped: Vec<String>,
}

/// Ordered create tasks.
#[derive(Debug, Clone)]
pub struct SeedPlan<'a> {
    tasks: Vec<&'a AttractionRecord>,
}

impl<'a> SeedPlan<'a> {
    pub fn new(records: &'a [AttractionRecord]) -> Self {
        Self {
            tasks: records.iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Run every task in order, halting at the first failure.
    pub async fn run<C: CatalogClient>(&self, client: &C) -> SeedProgress {
        let total = self.tasks.len();
        let mut progress = SeedProgress::default();

        for (index, record) in self.tasks.iter().enumerate() {
            match client.create_attraction(record).await {
                Ok(()) => progress.created.push(record.name.clone()),
                Err(error) => {
                    tracing::warn!("seeding halted at '{}': {error}", record.name);
                    progress.failure = Some(SeedFailure {
                        index,
                        total,
                        name: record.name.clone(),
                        error,
                    });
                    progress.skipped = self.tasks[index + 1..]
                        .iter()
                        .map(|r| r.name.clone())
                        .collect();
                    break;
                }
            }
        }

        progress
    }
}

/// Outcome of a seed-and-refresh call.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedReport {
    pub progress: SeedProgress,
    /// Result of the refresh search that always follows the creates.
    pub refresh: CatalogResult<Vec<AttractionRecord>>,
}

impl SeedReport {
    /// True when every create and the refresh succeeded.
    pub fn is_success(&self) -> bool {
        self.progress.failure.is_none() && self.refresh.is_ok()
    }

    /// The message to surface, preferring the create failure.
    pub fn failure_message(&self) -> Option<String> {
        if let Some(failure) = &self.progress.failure {
            return Some(failure.message());
        }
        self.refresh.as_ref().err().map(CatalogError::display_message)
    }
}
