//! Scripted in-memory catalog for controller tests.

use std::collections::{HashMap, VecDeque};

use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::types::{AttractionRecord, SearchCriteria};

use super::{CatalogClient, CatalogError, CatalogResult};

/// One observable event at the catalog boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogCall {
    Search(SearchCriteria),
    CreateStarted(String),
    CreateFinished(String),
}

/// A fake catalog with canned responses and an ordered call log.
///
/// Searches pop scripted responses in call order and fall back to the stored
/// items. Creates append to the stored items unless a failure is scripted for
/// that record name. A search or a create can be held open until the test
/// releases it.
#[derive(Default)]
pub struct FakeCatalog {
    items: Mutex<Vec<AttractionRecord>>,
    search_responses: Mutex<VecDeque<CatalogResult<Vec<AttractionRecord>>>>,
    create_failures: Mutex<HashMap<String, CatalogError>>,
    search_gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    create_gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    calls: Mutex<Vec<CatalogCall>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with these records stored.
    pub fn with_items(items: Vec<AttractionRecord>) -> Self {
        let fake = Self::new();
        *fake.items.lock() = items;
        fake
    }

    /// Queue a response for the next unscripted search.
    pub fn push_search_response(&self, response: CatalogResult<Vec<AttractionRecord>>) {
        self.search_responses.lock().push_back(response);
    }

    /// Make creating the named record fail.
    pub fn fail_create(&self, name: &str, error: CatalogError) {
        self.create_failures.lock().insert(name.to_string(), error);
    }

    /// Hold the next search open until the returned sender fires.
    pub fn hold_next_search(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.search_gates.lock().push_back(rx);
        tx
    }

    /// Hold the next create open until the returned sender fires.
    pub fn hold_next_create(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.create_gates.lock().push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<CatalogCall> {
        self.calls.lock().clone()
    }

    pub fn search_calls(&self) -> Vec<SearchCriteria> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                CatalogCall::Search(criteria) => Some(criteria.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn created_names(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                CatalogCall::CreateStarted(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn stored_items(&self) -> Vec<AttractionRecord> {
        self.items.lock().clone()
    }
}

impl CatalogClient for FakeCatalog {
    async fn search_attractions(
        &self,
        criteria: &SearchCriteria,
    ) -> CatalogResult<Vec<AttractionRecord>> {
        self.calls.lock().push(CatalogCall::Search(criteria.clone()));
        let scripted = self.search_responses.lock().pop_front();
        let gate = self.search_gates.lock().pop_front();

        if let Some(gate) = gate {
            let _ = gate.await;
        }

        match scripted {
            Some(response) => response,
            None => Ok(self.items.lock().clone()),
        }
    }

    async fn create_attraction(&self, record: &AttractionRecord) -> CatalogResult<()> {
        self.calls
            .lock()
            .push(CatalogCall::CreateStarted(record.name.clone()));
        let gate = self.create_gates.lock().pop_front();
        match gate {
            Some(gate) => {
                let _ = gate.await;
            }
            None => tokio::task::yield_now().await,
        }

        let failure = self.create_failures.lock().get(&record.name).cloned();
        self.calls
            .lock()
            .push(CatalogCall::CreateFinished(record.name.clone()));

        match failure {
            Some(error) => Err(error),
            None => {
                let mut stored = record.clone();
                let mut items = self.items.lock();
                stored.id = Some(format!("fake-{}", items.len() + 1));
                items.push(stored);
                Ok(())
            }
        }
    }
}
