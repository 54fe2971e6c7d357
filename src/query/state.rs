//! State shape owned by the query controller.

use std::fmt;

use serde::Serialize;

use crate::catalog::CatalogError;
use crate::types::{AttractionRecord, SearchCriteria};

use super::seed::SeedFailure;

/// Where the controller is in its request cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Idle => write!(f, "idle"),
            Status::Loading => write!(f, "loading"),
            Status::Error => write!(f, "error"),
        }
    }
}

/// The typed cause behind `QueryState::error_message`.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryFailure {
    Search(CatalogError),
    Seed(SeedFailure),
}

impl QueryFailure {
    pub fn message(&self) -> String {
        match self {
            QueryFailure::Search(error) => error.display_message(),
            QueryFailure::Seed(failure) => failure.message(),
        }
    }
}

/// Everything the presentation layer renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    /// Last successful search result, in server order.
    pub items: Vec<AttractionRecord>,
    pub status: Status,
    /// Meaningful only when `status` is `Error`.
    pub error_message: String,
    pub failure: Option<QueryFailure>,
    /// Draft criteria, read when a search is dispatched.
    pub filters: SearchCriteria,
}

impl QueryState {
    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    pub fn is_error(&self) -> bool {
        self.status == Status::Error
    }

    /// No results while settled: the cue to offer seeding.
    pub fn is_empty_state(&self) -> bool {
        self.items.is_empty() && self.status == Status::Idle
    }

    pub(crate) fn begin(&mut self) {
        self.status = Status::Loading;
        self.error_message.clear();
        self.failure = None;
    }

    pub(crate) fn fail(&mut self, failure: QueryFailure) {
        self.status = Status::Error;
        self.error_message = failure.message();
        self.failure = Some(failure);
    }

    pub(crate) fn settle(&mut self, items: Vec<AttractionRecord>) {
        self.items = items;
        self.status = Status::Idle;
    }
}
