//! Query state controller.
//!
//! Owns the filter draft, the result set and the request status, and talks to
//! the catalog through a [`CatalogClient`]. Operations take `&self` so several
//! may be in flight at once; the state lock is never held across an await.
//!
//! Every search or seed dispatch takes a ticket from a monotonically
//! increasing counter. Only the completion holding the latest ticket may
//! write `items` and `status`; older completions are discarded and only
//! reported back to their own caller.
//!
//! While a seed is still creating records the status stays `Loading`, even
//! when a newer search completes in the meantime.

pub mod seed;
pub mod state;

use parking_lot::Mutex;

use crate::catalog::{CatalogClient, CatalogResult};
use crate::types::{AttractionRecord, FilterField, SEARCH_LIMIT, SearchCriteria};

pub use seed::{SeedFailure, SeedPlan, SeedProgress, SeedReport};
pub use state::{QueryFailure, QueryState, Status};

/// Dispatch counter value. Higher is newer.
type Ticket = u64;

#[derive(Debug, Default)]
struct Inner {
    state: QueryState,
    latest_ticket: Ticket,
    /// Seeds whose creates have not finished yet.
    seeding: usize,
}

impl Inner {
    /// Claim the state for a new dispatch: loading, error cleared, new ticket.
    fn dispatch(&mut self) -> Ticket {
        self.latest_ticket += 1;
        self.state.begin();
        self.latest_ticket
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket == self.latest_ticket
    }
}

/// Drives searches and seeding against a catalog.
pub struct QueryController<C> {
    client: C,
    inner: Mutex<Inner>,
}

impl<C: CatalogClient> QueryController<C> {
    /// Create a controller in the idle state without touching the network.
    pub fn new(client: C) -> Self {
        Self {
            client,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Create a controller and run the initial unfiltered search once.
    pub async fn mount(client: C) -> Self {
        let controller = Self::new(client);
        // Failures land in the state; the caller renders them.
        let _ = controller.search().await;
        controller
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Edit one field of the draft criteria. Never performs I/O.
    pub fn update_filter(&self, field: FilterField, value: Option<&str>) {
        self.inner.lock().state.filters.set(field, value);
    }

    /// Reset every filter to "no filter".
    pub fn clear_filters(&self) {
        let mut inner = self.inner.lock();
        for field in FilterField::ALL {
            inner.state.filters.set(field, None);
        }
    }

    /// Search with the current draft and the fixed result cap.
    ///
    /// On success the result set is replaced wholesale; on failure the
    /// previous items stay and the status becomes `Error`. Either way the
    /// outcome is returned to the caller, even when a newer dispatch has
    /// superseded this one.
    pub async fn search(&self) -> CatalogResult<Vec<AttractionRecord>> {
        let (outcome, _) = self.dispatch_search(false).await;
        outcome
    }

    /// Create each record of `seed_set` in order, then refresh.
    ///
    /// Creates run strictly one after another and stop at the first failure.
    /// The refresh search runs regardless. A create failure wins over the
    /// refresh outcome when deciding the final status.
    pub async fn seed_and_refresh(&self, seed_set: &[AttractionRecord]) -> SeedReport {
        let ticket = {
            let mut inner = self.inner.lock();
            inner.seeding += 1;
            inner.dispatch()
        };
        tracing::debug!(ticket, count = seed_set.len(), "seeding catalog");

        let progress = SeedPlan::new(seed_set).run(&self.client).await;
        let (refresh, applied) = self.dispatch_search(true).await;

        if applied && let Some(failure) = &progress.failure {
            self.inner
                .lock()
                .state
                .fail(QueryFailure::Seed(failure.clone()));
        }

        SeedReport { progress, refresh }
    }

    /// Run one search; the flag says whether its outcome reached the state.
    ///
    /// `ends_seed` marks the refresh that closes a seed's create phase.
    async fn dispatch_search(
        &self,
        ends_seed: bool,
    ) -> (CatalogResult<Vec<AttractionRecord>>, bool) {
        let (ticket, criteria) = {
            let mut inner = self.inner.lock();
            if ends_seed {
                inner.seeding = inner.seeding.saturating_sub(1);
            }
            let ticket = inner.dispatch();
            let criteria = inner.state.filters.clone().with_limit(SEARCH_LIMIT);
            (ticket, criteria)
        };
        tracing::debug!(ticket, ?criteria, "dispatching search");

        let outcome = self.client.search_attractions(&criteria).await;

        let mut inner = self.inner.lock();
        if !inner.is_current(ticket) {
            tracing::debug!(
                ticket,
                latest = inner.latest_ticket,
                "discarding stale search response"
            );
            return (outcome, false);
        }

        let seeding = inner.seeding > 0;
        match &outcome {
            // A seed is still creating: show the fresh items, stay loading.
            Ok(items) if seeding => inner.state.items = items.clone(),
            Ok(items) => inner.state.settle(items.clone()),
            Err(error) if seeding => {
                tracing::warn!("search failed while seeding: {error}");
            }
            Err(error) => {
                tracing::warn!("search failed: {error}");
                inner.state.fail(QueryFailure::Search(error.clone()));
            }
        }
        (outcome, true)
    }

    /// A copy of the full state for rendering.
    pub fn snapshot(&self) -> QueryState {
        self.inner.lock().state.clone()
    }

    pub fn status(&self) -> Status {
        self.inner.lock().state.status
    }

    pub fn items(&self) -> Vec<AttractionRecord> {
        self.inner.lock().state.items.clone()
    }

    pub fn error_message(&self) -> String {
        self.inner.lock().state.error_message.clone()
    }

    pub fn filters(&self) -> SearchCriteria {
        self.inner.lock().state.filters.clone()
    }

    pub fn is_empty_state(&self) -> bool {
        self.inner.lock().state.is_empty_state()
    }
}
