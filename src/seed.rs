//! Built-in sample attractions used to bootstrap an empty catalog.

use crate::types::{AttractionRecord, Rating};

fn sample(
    name: &str,
    description: &str,
    category: &str,
    location: &str,
    image_url: &str,
    rating: f64,
    tags: &[&str],
) -> AttractionRecord {
    AttractionRecord {
        id: None,
        name: name.to_string(),
        description: Some(description.to_string()),
        category: Some(category.to_string()),
        location: Some(location.to_string()),
        image_url: Some(image_url.to_string()),
        rating: Some(Rating::Numeric(rating)),
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
    }
}

/// The fixed seed set, in creation order.
pub fn default_seed_set() -> Vec<AttractionRecord> {
    vec![
        sample(
            "Tarkarli Beach",
            "Pristine white sands, clear waters and scuba/snorkeling.",
            "Beach",
            "Tarkarli",
            "https://images.unsplash.com/photo-1501959915551-4e8d30928317?q=80&w=1200&auto=format&fit=crop",
            4.7,
            &["water sports", "snorkeling", "scuba"],
        ),
        sample(
            "Sindhudurg Fort",
            "Historic sea fort built by Chhatrapati Shivaji Maharaj on an island off Malvan.",
            "Fort",
            "Malvan",
            "https://images.unsplash.com/photo-1519681393784-d120267933ba?q=80&w=1200&auto=format&fit=crop",
            4.6,
            &["history", "sea fort"],
        ),
        sample(
            "Rock Garden",
            "Sunset point with rugged rocks and crashing waves by the shore.",
            "Activity",
            "Malvan",
            "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?q=80&w=1200&auto=format&fit=crop",
            4.3,
            &["sunset", "viewpoint"],
        ),
        sample(
            "Redi Ganesh Temple",
            "Ancient cave temple of Lord Ganesh near Vengurla-Redi border.",
            "Temple",
            "Vengurla",
            "https://images.unsplash.com/photo-1568342821492-45827d6e1fd5?q=80&w=1200&auto=format&fit=crop",
            4.5,
            &["pilgrimage", "heritage"],
        ),
    ]
}
