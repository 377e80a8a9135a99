pub mod itinerary_builder;
pub mod venue_fetcher;
pub mod yelp_service;
