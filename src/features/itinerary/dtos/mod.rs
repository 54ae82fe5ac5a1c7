mod itinerary_dto;

pub use itinerary_dto::{Attraction, Flight, ItineraryRequestDto, ItineraryResponseDto, TripPlan};
