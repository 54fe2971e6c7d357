use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::error::Result;
use crate::types::{CATEGORIES, LOCATIONS};

/// List the suggested filter values
pub fn cmd_options(as_json: bool) -> Result<()> {
    let json_output = json!({
        "categories": CATEGORIES,
        "locations": LOCATIONS,
    });

    let text = format!(
        "{}\n  {}\n\n{}\n  {}",
        "Categories:".cyan().bold(),
        CATEGORIES.join(", "),
        "Locations:".cyan().bold(),
        LOCATIONS.join(", "),
    );

    CommandOutput::new(json_output).with_text(text).print(as_json)
}
