use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SightseeError;

/// Result cap sent with every search.
pub const SEARCH_LIMIT: u32 = 100;

/// Image shown on cards whose record has no `image_url`.
pub const FALLBACK_IMAGE_URL: &str = "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?q=80&w=1200&auto=format&fit=crop";

/// Categories offered by the filter picker. The catalog accepts any string.
pub const CATEGORIES: &[&str] = &["Beach", "Fort", "Temple", "Waterfall", "Activity"];

/// Locations offered by the filter picker. The catalog accepts any string.
pub const LOCATIONS: &[&str] = &["Malvan", "Tarkarli", "Vengurla", "Sawantwadi", "Kankavli"];

/// Stored rating of an attraction.
///
/// The catalog may hand back anything in the `rating` slot. Only genuine JSON
/// numbers count as a rating; everything else is kept verbatim so it
/// round-trips, but it is never displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    Numeric(f64),
    Other(serde_json::Value),
}

impl Rating {
    /// The numeric value, if the stored value is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Rating::Numeric(value) => Some(*value),
            Rating::Other(_) => None,
        }
    }
}

impl From<f64> for Rating {
    fn from(value: f64) -> Self {
        Rating::Numeric(value)
    }
}

/// An attraction as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttractionRecord {
    /// Server-assigned identifier. Absent on records not yet persisted.
    #[serde(
        default,
        deserialize_with = "deserialize_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl AttractionRecord {
    /// Create a record with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Borrow this record as a create payload (everything but `id`).
    pub fn as_new(&self) -> NewAttraction<'_> {
        NewAttraction {
            name: &self.name,
            description: self.description.as_deref(),
            category: self.category.as_deref(),
            location: self.location.as_deref(),
            image_url: self.image_url.as_deref(),
            rating: self.rating.as_ref(),
            tags: self.tags.as_deref(),
        }
    }
}

/// Identifiers come back as strings from most backends, but numeric ids are
/// accepted and stringified.
fn deserialize_record_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    }))
}

/// Body of a create request: one record without its identifier.
#[derive(Debug, Clone, Serialize)]
pub struct NewAttraction<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<&'a Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<&'a [String]>,
}

/// Search parameters sent to the catalog.
///
/// Absent filters serialize as explicit `null`s; the wire contract is
/// complete, never sparse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub q: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub limit: u32,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            q: None,
            category: None,
            location: None,
            limit: SEARCH_LIMIT,
        }
    }
}

impl SearchCriteria {
    /// Set one filter. Blank input clears the filter.
    pub fn set(&mut self, field: FilterField, value: Option<&str>) {
        let value = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);
        match field {
            FilterField::Q => self.q = value,
            FilterField::Category => self.category = value,
            FilterField::Location => self.location = value,
        }
    }

    /// Current value of one filter.
    pub fn get(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Q => self.q.as_deref(),
            FilterField::Category => self.category.as_deref(),
            FilterField::Location => self.location.as_deref(),
        }
    }

    /// True when no filter is set.
    pub fn is_unfiltered(&self) -> bool {
        self.q.is_none() && self.category.is_none() && self.location.is_none()
    }

    /// Return a copy carrying the given result cap.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// A user-editable filter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Q,
    Category,
    Location,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [FilterField::Q, FilterField::Category, FilterField::Location];
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterField::Q => write!(f, "q"),
            FilterField::Category => write!(f, "category"),
            FilterField::Location => write!(f, "location"),
        }
    }
}

impl FromStr for FilterField {
    type Err = SightseeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "q" | "query" | "text" => Ok(FilterField::Q),
            "category" | "cat" => Ok(FilterField::Category),
            "location" | "loc" => Ok(FilterField::Location),
            _ => Err(SightseeError::Other(format!(
                "unknown filter '{s}', expected q, category or location"
            ))),
        }
    }
}
