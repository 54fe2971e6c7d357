//! Remote attraction catalog.
//!
//! The catalog is an opaque search oracle with two operations: search by
//! criteria and create one record. [`CatalogClient`] is the seam the query
//! controller depends on; [`HttpCatalog`] is the production implementation.

pub mod config;
pub mod error;
pub mod http;

#[cfg(test)]
pub mod testing;

use std::future::Future;

use crate::types::{AttractionRecord, SearchCriteria};

pub use config::{CatalogConfig, DEFAULT_BACKEND_URL};
pub use error::{CatalogError, CatalogResult};
pub use http::HttpCatalog;

/// Operations the controller needs from the catalog.
pub trait CatalogClient: Send + Sync {
    /// Search with the full criteria. Returns records in server order.
    fn search_attractions(
        &self,
        criteria: &SearchCriteria,
    ) -> impl Future<Output = CatalogResult<Vec<AttractionRecord>>> + Send;

    /// Persist one record. The assigned id is not returned; a later search
    /// observes it.
    fn create_attraction(
        &self,
        record: &AttractionRecord,
    ) -> impl Future<Output = CatalogResult<()>> + Send;
}

impl<C: CatalogClient> CatalogClient for &C {
    fn search_attractions(
        &self,
        criteria: &SearchCriteria,
    ) -> impl Future<Output = CatalogResult<Vec<AttractionRecord>>> + Send {
        (**self).search_attractions(criteria)
    }

    fn create_attraction(
        &self,
        record: &AttractionRecord,
    ) -> impl Future<Output = CatalogResult<()>> + Send {
        (**self).create_attraction(record)
    }
}
