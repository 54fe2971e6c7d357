mod browse;
mod config;
mod options;
mod search;
mod seed;

pub use browse::{BrowseCommand, cmd_browse, parse_browse_line};
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use options::cmd_options;
pub use search::{SearchOptions, cmd_search};
pub use seed::cmd_seed;

use serde_json::Value;

use crate::catalog::HttpCatalog;
use crate::config::Config;
use crate::error::Result;

/// Command result with a JSON form and an optional human form.
///
/// Without text, the JSON is pretty-printed in both modes.
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        CommandOutput { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn print(self, as_json: bool) -> Result<()> {
        match self.text {
            Some(text) if !as_json => println!("{text}"),
            _ => println!("{}", serde_json::to_string_pretty(&self.json)?),
        }
        Ok(())
    }
}

/// Build the HTTP client from saved config plus the `--backend-url` override
pub fn open_catalog(backend_url: Option<&str>) -> Result<HttpCatalog> {
    let config = Config::load()?;
    let resolved = config.catalog_config(backend_url);
    tracing::debug!(base_url = %resolved.base_url, "opening catalog");
    HttpCatalog::new(&resolved)
}
