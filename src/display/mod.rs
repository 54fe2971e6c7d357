use crate::types::{AttractionRecord, FALLBACK_IMAGE_URL};

pub mod cards;

pub use cards::*;

/// Longest description shown on a card before it is clipped.
pub const DESCRIPTION_CLIP_CHARS: usize = 140;

/// Stable identity of a card across re-renders: the id, else the name.
pub fn card_key(record: &AttractionRecord) -> &str {
    record.id.as_deref().unwrap_or(&record.name)
}

/// `★ 4.7` for numeric ratings; nothing for missing or non-numeric ones.
pub fn rating_badge(record: &AttractionRecord) -> Option<String> {
    let rating = record.rating.as_ref()?.as_number()?;
    if !rating.is_finite() {
        return None;
    }
    Some(format!("★ {:.1}", round_half_away(rating)))
}

/// Resolve exact ties at the hundredths (x.x5) away from zero.
///
/// `{:.1}` rounds exact ties to even. The only binary values sitting exactly
/// on a tie are odd quarters (4.25, 4.75), so those are pre-rounded; every
/// other value is left to the formatter.
fn round_half_away(value: f64) -> f64 {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        (value * 10.0).round() / 10.0
    } else {
        value
    }
}

/// The record's image, or the shared fallback when it has none.
pub fn image_or_fallback(record: &AttractionRecord) -> &str {
    record
        .image_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(FALLBACK_IMAGE_URL)
}

/// Clip text to `max` characters, marking the cut with an ellipsis.
pub fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}
