use owo_colors::OwoColorize;

use crate::query::{QueryState, Status};
use crate::types::AttractionRecord;

use super::{DESCRIPTION_CLIP_CHARS, clip, image_or_fallback, rating_badge};

/// Shown when a settled search came back empty.
pub const EMPTY_STATE_HINT: &str =
    "No attractions yet. You can seed a few sample places to get started.";

/// Format one attraction as a multi-line card with colors
pub fn format_card(record: &AttractionRecord) -> String {
    let mut lines = Vec::new();

    let mut title = record.name.bold().to_string();
    if let Some(category) = &record.category {
        title = format!("{} {}", format!("[{category}]").cyan(), title);
    }
    lines.push(title);

    if let Some(description) = record.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("  {}", clip(description, DESCRIPTION_CLIP_CHARS)));
    }

    let mut chips = Vec::new();
    if let Some(location) = &record.location {
        chips.push(location.green().to_string());
    }
    if let Some(badge) = rating_badge(record) {
        chips.push(badge.yellow().to_string());
    }
    if !chips.is_empty() {
        lines.push(format!("  {}", chips.join("  ")));
    }

    lines.push(format!("  {}", image_or_fallback(record).dimmed()));
    lines.join("\n")
}

/// Format a result list, cards separated by blank lines
pub fn format_cards(records: &[AttractionRecord]) -> String {
    records
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Summary line describing where the controller stands
pub fn format_status_line(state: &QueryState) -> String {
    match state.status {
        Status::Loading => "Loading…".dimmed().to_string(),
        Status::Error => format!("{} {}", "error:".red().bold(), state.error_message),
        Status::Idle if state.items.is_empty() => EMPTY_STATE_HINT.dimmed().to_string(),
        Status::Idle => {
            let noun = if state.items.len() == 1 {
                "attraction"
            } else {
                "attractions"
            };
            format!("{} {noun}", state.items.len())
        }
    }
}

/// Render the whole state: status line, then cards unless loading
pub fn format_state(state: &QueryState) -> String {
    let mut out = format_status_line(state);
    if !state.is_loading() && !state.items.is_empty() {
        out.push_str("\n\n");
        out.push_str(&format_cards(&state.items));
    }
    out
}
