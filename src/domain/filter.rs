// src/domain/filter.rs

use crate::catalog::ALL_LABEL;
use crate::domain::property::PropertyRecord;

/// What the visitor currently has selected: one pill and whatever is typed
/// in the search box. Built fresh from each request, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub label: String,
    pub query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            label: ALL_LABEL.to_string(),
            query: String::new(),
        }
    }
}

impl FilterState {
    pub fn new(label: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            query: query.into(),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.label == ALL_LABEL && normalize_query(&self.query).is_empty()
    }

    /// Keeps the records that satisfy both the pill and the query,
    /// in their original order.
    pub fn apply<'a>(&self, source: &'a [PropertyRecord]) -> Vec<&'a PropertyRecord> {
        filter_properties(source, self)
    }
}

/// Trims surrounding whitespace (including a stray byte-order mark) and lower-cases.
/// A query of only whitespace becomes empty and therefore matches everything.
pub fn normalize_query(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .to_lowercase()
}

/// The pill check. "All" lets everything through; any other label must appear
/// (case-insensitively) inside one of the record's tags or inside its name.
pub fn matches_category(property: &PropertyRecord, label: &str) -> bool {
    if label == ALL_LABEL {
        return true;
    }

    let label = label.to_lowercase();

    property
        .category
        .iter()
        .any(|tag| tag.to_lowercase().contains(&label))
        || property.name.to_lowercase().contains(&label)
}

/// The search box check. Expects an already normalized query.
pub fn matches_query(property: &PropertyRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let address = &property.address;

    [
        &property.name,
        &address.city,
        &address.state,
        &address.country,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query))
}

/// Whether `property` belongs in the result for this pill and raw query.
pub fn matches(property: &PropertyRecord, label: &str, raw_query: &str) -> bool {
    matches_category(property, label) && matches_query(property, &normalize_query(raw_query))
}

/// Stable filter over the catalog. The result borrows from `source`.
pub fn filter_properties<'a>(
    source: &'a [PropertyRecord],
    state: &FilterState,
) -> Vec<&'a PropertyRecord> {
    let result: Vec<&PropertyRecord> = source
        .iter()
        .filter(|p| matches(p, &state.label, &state.query))
        .collect();

    tracing::debug!(
        label = %state.label,
        query = %state.query,
        matched = result.len(),
        total = source.len(),
        "filtered listings"
    );

    result
}
