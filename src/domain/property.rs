// src/domain/property.rs

use serde::Deserialize;

/// A single entry of the listing catalog, as shown on a property card.
/// Records are immutable once loaded; filtering only ever borrows them.
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct PropertyRecord {
    pub name: String,
    pub address: Address,
    pub rating: f32,
    /// Ordered tags, e.g. "Beachfront", "Pool". Matched against filter pills.
    pub category: Vec<String>,
    /// Price per night, whole currency units.
    pub price: u32,
    pub offers: Offers,
    pub image: String,
    /// Percentage off as text; empty when there is no discount.
    #[serde(default)]
    pub discount: String,
}

#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct Address {
    pub state: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct Offers {
    pub bed: String,
    pub shower: String,
    pub occupants: String,
}

impl PropertyRecord {
    /// Identity used for the card element: names repeat across cities.
    pub fn key(&self) -> String {
        format!("{}{}", self.name, self.address.city)
    }

    pub fn has_discount(&self) -> bool {
        !self.discount.trim().is_empty()
    }
}

impl Address {
    /// "City, State, Country"
    pub fn display(&self) -> String {
        format!("{}, {}, {}", self.city, self.state, self.country)
    }
}
