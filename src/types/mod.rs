pub mod itinerary;
pub mod trip;

pub use itinerary::{DayItinerary, TimePeriod, TimeSection};
pub use trip::{TripLimits, TripRequest, TripRequestBuilder, TripResponse};
