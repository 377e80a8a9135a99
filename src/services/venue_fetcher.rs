use futures::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;

use crate::models::venue::{Venue, VenuePool};
use crate::services::yelp_service::SearchProvider;

pub const CAFE_CATEGORY: &str = "cafes";
pub const RESTAURANT_CATEGORY: &str = "restaurants";
/// Sub-categories whose union makes up the afternoon activities.
pub const POINT_OF_INTEREST_CATEGORIES: &[&str] =
    &["arts", "landmarks", "museums", "shopping", "parks"];

const DEFAULT_LIMIT: u32 = 10;

/// Pulls venues for a city from a search provider.
///
/// Provider failures never reach the caller: a failed category is logged and
/// treated as a category with no venues.
#[derive(Clone)]
pub struct VenueFetcher {
    provider: Arc<dyn SearchProvider>,
    limit: u32,
}

impl VenueFetcher {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            provider,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(provider: Arc<dyn SearchProvider>, limit: u32) -> Self {
        Self { provider, limit }
    }

    pub async fn fetch_category(&self, city: &str, category: &str, limit: u32) -> Vec<Venue> {
        match self.provider.search(city, category, limit).await {
            Ok(venues) => {
                log::debug!("Fetched {} '{}' venues for {}", venues.len(), category, city);
                venues
            }
            Err(e) => {
                log::warn!("Error fetching '{}' venues for {}: {}", category, city, e);
                Vec::new()
            }
        }
    }

    pub async fn fetch_points_of_interest(&self, city: &str) -> Vec<Venue> {
        let futures = POINT_OF_INTEREST_CATEGORIES
            .iter()
            .map(|category| self.fetch_category(city, category, self.limit));

        // join_all keeps input order, so the scan order survives concurrency
        let activities = join_all(futures).await.into_iter().flatten();
        dedup_by_id(activities)
    }

    pub async fn fetch_pool(&self, city: &str) -> VenuePool {
        let (cafes, restaurants, points_of_interest) = futures::join!(
            self.fetch_category(city, CAFE_CATEGORY, self.limit),
            self.fetch_category(city, RESTAURANT_CATEGORY, self.limit),
            self.fetch_points_of_interest(city),
        );

        let pool = VenuePool {
            cafes: dedup_by_id(cafes),
            restaurants: dedup_by_id(restaurants),
            points_of_interest,
        };

        log::info!(
            "Venue pool for {}: {} cafes, {} restaurants, {} points of interest",
            city,
            pool.cafes.len(),
            pool.restaurants.len(),
            pool.points_of_interest.len()
        );

        pool
    }
}

/// Drops every venue whose id was already seen, keeping first occurrences in order.
pub fn dedup_by_id(venues: impl IntoIterator<Item = Venue>) -> Vec<Venue> {
    let mut seen = HashSet::new();
    venues
        .into_iter()
        .filter(|venue| seen.insert(venue.id.clone()))
        .collect()
}
