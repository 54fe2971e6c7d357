pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod paths;
pub mod query;
pub mod seed;
pub mod types;

#[cfg(test)]
pub(crate) mod test_guards;

pub use catalog::{CatalogClient, CatalogConfig, CatalogError, CatalogResult, HttpCatalog};
pub use config::Config;
pub use error::{Result, SightseeError};
pub use query::{QueryController, QueryState, SeedReport, Status};
pub use seed::default_seed_set;
pub use types::{AttractionRecord, FilterField, Rating, SearchCriteria};
