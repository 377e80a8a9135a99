use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VenueCategory {
    pub alias: String,
    pub title: String,
}

/// A business returned by the search provider.
///
/// Only the fields the planner looks at are typed. Everything else the
/// provider sends (address, coordinates, photos, price...) is kept in
/// `details` and serialized back out untouched.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Venue {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<VenueCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Venue {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            categories: Vec::new(),
            rating: None,
            details: Map::new(),
        }
    }

    pub fn with_category(mut self, alias: &str, title: &str) -> Self {
        self.categories.push(VenueCategory {
            alias: alias.to_string(),
            title: title.to_string(),
        });
        self
    }
}

/// The three deduplicated venue lists an itinerary is built from.
#[derive(Debug, Default, Clone)]
pub struct VenuePool {
    pub cafes: Vec<Venue>,
    pub restaurants: Vec<Venue>,
    pub points_of_interest: Vec<Venue>,
}

impl VenuePool {
    pub fn is_empty(&self) -> bool {
        self.cafes.is_empty() && self.restaurants.is_empty() && self.points_of_interest.is_empty()
    }
}
