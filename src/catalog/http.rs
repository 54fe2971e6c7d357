//! reqwest-backed catalog client.
//!
//! Both routes are JSON POSTs. Any non-2xx status is a `RemoteStatus` failure;
//! everything that stops a request from producing a readable response is a
//! `Transport` failure. No retries happen here.

use reqwest::Client;
use reqwest::header;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, SightseeError};
use crate::types::{AttractionRecord, SearchCriteria};

use super::{CatalogClient, CatalogConfig, CatalogError, CatalogResult};

const SEARCH_PATH: &str = "api/attractions/search";
const CREATE_PATH: &str = "api/attractions";

/// Response body of the search route. `items` may be missing or null.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Option<Vec<AttractionRecord>>,
}

/// Catalog client speaking the attractions HTTP contract.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    search_url: Url,
    create_url: Url,
}

impl HttpCatalog {
    /// Build a client from explicit configuration.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let base = parse_base_url(&config.base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            search_url: base.join(SEARCH_PATH)?,
            create_url: base.join(CREATE_PATH)?,
        })
    }

    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    pub fn create_url(&self) -> &Url {
        &self.create_url
    }

    async fn post_json<B>(&self, url: &Url, body: &B) -> CatalogResult<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .client
            .post(url.as_str())
            .header(
                header::CONTENT_TYPE,
                header::HeaderValue::from_static("application/json"),
            )
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("request to {url} failed: {e}");
                CatalogError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{url} responded with {status}");
            return Err(CatalogError::RemoteStatus {
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

/// Parse the configured base URL so that route joins land beneath its path.
///
/// `http://host/prefix` and `http://host/prefix/` both resolve
/// `api/attractions` to `http://host/prefix/api/attractions`.
fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SightseeError::Config("backend URL is empty".to_string()));
    }

    let mut url = Url::parse(trimmed)?;
    if url.cannot_be_a_base() {
        return Err(SightseeError::Config(format!(
            "backend URL '{trimmed}' cannot be used as a base"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

impl CatalogClient for HttpCatalog {
    async fn search_attractions(
        &self,
        criteria: &SearchCriteria,
    ) -> CatalogResult<Vec<AttractionRecord>> {
        tracing::debug!(?criteria, "searching catalog");
        let response = self.post_json(&self.search_url, criteria).await?;

        let body: SearchResponse = response.json().await.map_err(|e| {
            tracing::warn!("unreadable search response: {e}");
            CatalogError::transport(e.to_string())
        })?;

        let items = body.items.unwrap_or_default();
        tracing::debug!(count = items.len(), "search returned");
        Ok(items)
    }

    async fn create_attraction(&self, record: &AttractionRecord) -> CatalogResult<()> {
        tracing::debug!(name = %record.name, "creating attraction");
        self.post_json(&self.create_url, &record.as_new()).await?;
        Ok(())
    }
}
