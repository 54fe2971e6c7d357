//! One-shot search: apply the flags as filters, search once, print.

use serde_json::json;

use super::{CommandOutput, open_catalog};
use crate::display::format_state;
use crate::error::{Result, SightseeError};
use crate::query::QueryController;
use crate::types::FilterField;

/// Filters and output mode for `sightsee search`
#[derive(Debug, Default)]
pub struct SearchOptions {
    pub q: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub json: bool,
}

pub async fn cmd_search(options: SearchOptions, backend_url: Option<&str>) -> Result<()> {
    let controller = QueryController::new(open_catalog(backend_url)?);
    controller.update_filter(FilterField::Q, options.q.as_deref());
    controller.update_filter(FilterField::Category, options.category.as_deref());
    controller.update_filter(FilterField::Location, options.location.as_deref());

    let items = controller
        .search()
        .await
        .map_err(|e| SightseeError::Other(e.display_message()))?;

    let state = controller.snapshot();
    let json_output = json!({
        "criteria": &state.filters,
        "count": items.len(),
        "items": &items,
    });

    CommandOutput::new(json_output)
        .with_text(format_state(&state))
        .print(options.json)
}
