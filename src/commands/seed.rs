//! Create the built-in sample attractions, then refresh the listing.

use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, open_catalog};
use crate::display::format_state;
use crate::error::{Result, SightseeError};
use crate::query::{QueryController, QueryState, SeedReport};
use crate::seed::default_seed_set;

/// Seed the catalog. Without `force` the catalog is searched first and
/// seeding only proceeds when it came back empty.
pub async fn cmd_seed(backend_url: Option<&str>, as_json: bool, force: bool) -> Result<()> {
    let catalog = open_catalog(backend_url)?;
    let controller = if force {
        QueryController::new(catalog)
    } else {
        let controller = QueryController::mount(catalog).await;
        ensure_seedable(&controller.snapshot())?;
        controller
    };
    let seed_set = default_seed_set();

    let report = controller.seed_and_refresh(&seed_set).await;

    let json_output = seed_report_json(&report);
    let mut text = format_seed_progress(&report);
    text.push('\n');
    text.push_str(&format_state(&controller.snapshot()));

    CommandOutput::new(json_output).with_text(text).print(as_json)?;

    match report.failure_message() {
        Some(message) => Err(SightseeError::Other(message)),
        None => Ok(()),
    }
}

/// Seeding is only offered from the empty state.
pub(crate) fn ensure_seedable(state: &QueryState) -> Result<()> {
    if state.is_error() {
        return Err(SightseeError::Other(state.error_message.clone()));
    }
    if !state.is_empty_state() {
        let count = state.items.len();
        let noun = if count == 1 { "attraction" } else { "attractions" };
        return Err(SightseeError::Other(format!(
            "catalog already lists {count} {noun}; pass --force to seed anyway"
        )));
    }
    Ok(())
}

pub(crate) fn seed_report_json(report: &SeedReport) -> serde_json::Value {
    json!({
        "action": "seed",
        "success": report.is_success(),
        "created": report.progress.created,
        "failed": report.progress.failure.as_ref().map(|f| json!({
            "name": f.name,
            "position": f.index + 1,
            "error": f.error.display_message(),
        })),
        "skipped": report.progress.skipped,
        "refresh_error": report.refresh.as_ref().err().map(|e| e.display_message()),
        "count": report.refresh.as_ref().map(Vec::len).unwrap_or(0),
    })
}

/// One line per seed task: created, failed, or skipped
pub(crate) fn format_seed_progress(report: &SeedReport) -> String {
    let mut lines = Vec::new();
    for name in &report.progress.created {
        lines.push(format!("{} {name}", "Created".green()));
    }
    if let Some(failure) = &report.progress.failure {
        lines.push(format!("{} {}", "Failed".red().bold(), failure.message()));
    }
    for name in &report.progress.skipped {
        lines.push(format!("{} {name}", "Skipped".dimmed()));
    }
    lines.join("\n")
}
