mod itinerary_client;

pub use itinerary_client::{ItineraryApi, ItineraryClient};
