// src/catalog.rs

use crate::domain::property::PropertyRecord;
use thiserror::Error;

/// The pill that means "no category restriction".
pub const ALL_LABEL: &str = "All";

/// Pills shown above the listings, in display order.
pub const FILTERS: &[&str] = &[
    ALL_LABEL,
    "Luxury Villa",
    "Self Checkin",
    "Beachfront",
    "Pool",
    "Mountain View",
    "Pet Friendly",
    "City Center",
    "Safari",
];

pub const HERO_BG: &str = "https://example.com/hero-background.jpg";

const SAMPLE_JSON: &str = include_str!("../data/properties.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is invalid: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only listing source plus the pill labels that go with it.
#[derive(Debug, Clone)]
pub struct Catalog {
    properties: Vec<PropertyRecord>,
}

impl Catalog {
    pub fn new(properties: Vec<PropertyRecord>) -> Self {
        Self { properties }
    }

    /// The dataset bundled into the binary.
    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_json(SAMPLE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let properties: Vec<PropertyRecord> = serde_json::from_str(json)?;
        Ok(Self::new(properties))
    }

    pub fn properties(&self) -> &[PropertyRecord] {
        &self.properties
    }

    pub fn filters(&self) -> &'static [&'static str] {
        FILTERS
    }

    /// Maps whatever arrived in the URL onto one of the known pills.
    /// Comparison ignores case and surrounding whitespace; anything unknown is "All".
    pub fn resolve_label(&self, raw: Option<&str>) -> &'static str {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return ALL_LABEL;
        };

        match FILTERS.iter().find(|f| f.eq_ignore_ascii_case(raw)) {
            Some(label) => *label,
            None => {
                tracing::debug!(label = raw, "unknown filter label, falling back to All");
                ALL_LABEL
            }
        }
    }
}
