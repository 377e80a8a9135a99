//! Itinerary Builder
//!
//! Turns the venue lists fetched for a city into a day-by-day plan. Every day
//! gets four slots (morning, lunch, afternoon, dinner), each with one top pick
//! and a few alternates.
//!
//! ## Rules
//! - Each venue list is shuffled once before the first day is planned
//! - A venue is used as a top pick at most once per category stream for the
//!   whole trip. Lunch and dinner draw from the same restaurant stream
//! - Dinner never repeats the same day's lunch
//! - Alternates are a random sample of the slot's list minus the top pick and
//!   may show up again on other slots or days
//! - Running out of venues leaves the slot without a top pick, it is never an error

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::models::itinerary::{DayPlan, Itinerary, Slot, SlotKind};
use crate::models::venue::{Venue, VenuePool};

const DEFAULT_MAX_ALTERNATES: usize = 3;

/// Source of the randomness used while planning.
pub trait Randomizer {
    fn shuffle(&mut self, venues: &mut [Venue]);

    /// Picks `amount` of `candidates` without replacement.
    fn sample(&mut self, candidates: &[&Venue], amount: usize) -> Vec<Venue>;
}

/// [`Randomizer`] backed by any `rand` generator.
pub struct RngRandomizer<R>(pub R);

impl RngRandomizer<ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl<R: Rng> Randomizer for RngRandomizer<R> {
    fn shuffle(&mut self, venues: &mut [Venue]) {
        venues.shuffle(&mut self.0);
    }

    fn sample(&mut self, candidates: &[&Venue], amount: usize) -> Vec<Venue> {
        candidates
            .choose_multiple(&mut self.0, amount)
            .map(|venue| (*venue).clone())
            .collect()
    }
}

#[derive(Clone, Debug)]
pub struct ItineraryConfig {
    pub max_alternates: usize,
}

impl Default for ItineraryConfig {
    fn default() -> Self {
        Self {
            max_alternates: DEFAULT_MAX_ALTERNATES,
        }
    }
}

/// One shuffled venue list plus the ids already handed out as top picks.
struct CategoryStream {
    venues: Vec<Venue>,
    used: HashSet<String>,
}

impl CategoryStream {
    fn new<Z: Randomizer + ?Sized>(mut venues: Vec<Venue>, randomizer: &mut Z) -> Self {
        randomizer.shuffle(&mut venues);
        Self {
            venues,
            used: HashSet::new(),
        }
    }

    fn pick_top(&mut self, exclude: Option<&str>) -> Option<Venue> {
        let top = self
            .venues
            .iter()
            .find(|venue| !self.used.contains(&venue.id) && Some(venue.id.as_str()) != exclude)?
            .clone();
        self.used.insert(top.id.clone());
        Some(top)
    }

    fn alternates<Z: Randomizer + ?Sized>(
        &self,
        top: &Venue,
        exclude: Option<&str>,
        max_alternates: usize,
        randomizer: &mut Z,
    ) -> Vec<Venue> {
        let candidates: Vec<&Venue> = self
            .venues
            .iter()
            .filter(|venue| venue.id != top.id && Some(venue.id.as_str()) != exclude)
            .collect();
        let amount = max_alternates.min(candidates.len());
        randomizer.sample(&candidates, amount)
    }

    /// Fills a slot. `exclude` is an id that may be neither the top pick nor an alternate.
    fn fill<Z: Randomizer + ?Sized>(
        &mut self,
        kind: SlotKind,
        exclude: Option<&str>,
        max_alternates: usize,
        randomizer: &mut Z,
    ) -> Slot {
        match self.pick_top(exclude) {
            Some(top) => {
                let alternates = self.alternates(&top, exclude, max_alternates, randomizer);
                Slot {
                    kind,
                    top: Some(top),
                    alternates,
                }
            }
            None => Slot::empty(kind),
        }
    }
}

pub struct ItineraryBuilder {
    config: ItineraryConfig,
}

impl Default for ItineraryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ItineraryBuilder {
    pub fn new() -> Self {
        Self {
            config: ItineraryConfig::default(),
        }
    }

    pub fn with_config(config: ItineraryConfig) -> Self {
        Self { config }
    }

    /// Build a plan for `day_count` days using the thread-local generator.
    pub fn build(&self, day_count: u32, pool: VenuePool) -> Itinerary {
        self.build_with(day_count, pool, &mut RngRandomizer::thread())
    }

    pub fn build_with<Z: Randomizer + ?Sized>(
        &self,
        day_count: u32,
        pool: VenuePool,
        randomizer: &mut Z,
    ) -> Itinerary {
        let max_alternates = self.config.max_alternates;

        let mut cafes = CategoryStream::new(pool.cafes, randomizer);
        let mut restaurants = CategoryStream::new(pool.restaurants, randomizer);
        let mut sights = CategoryStream::new(pool.points_of_interest, randomizer);

        let mut itinerary = Vec::with_capacity(day_count as usize);

        for day in 1..=day_count {
            let morning = cafes.fill(SlotKind::Morning, None, max_alternates, randomizer);
            let lunch = restaurants.fill(SlotKind::Lunch, None, max_alternates, randomizer);
            let afternoon = sights.fill(SlotKind::Afternoon, None, max_alternates, randomizer);
            // no lunch pick means nothing to keep dinner away from
            let dinner =
                restaurants.fill(SlotKind::Dinner, lunch.top_id(), max_alternates, randomizer);

            itinerary.push(DayPlan {
                day,
                slots: [morning, lunch, afternoon, dinner],
            });
        }

        log::debug!(
            "Built {} day itinerary with up to {} alternates per slot",
            itinerary.len(),
            max_alternates
        );

        itinerary
    }
}

/// Plans `day_count` days from the three venue lists.
pub fn build_itinerary(
    day_count: u32,
    cafes: Vec<Venue>,
    restaurants: Vec<Venue>,
    points_of_interest: Vec<Venue>,
    max_alternates: usize,
) -> Itinerary {
    let pool = VenuePool {
        cafes,
        restaurants,
        points_of_interest,
    };
    ItineraryBuilder::with_config(ItineraryConfig { max_alternates }).build(day_count, pool)
}
