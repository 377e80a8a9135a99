pub mod itinerary;
pub mod venue;
