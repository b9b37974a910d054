pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::{compose_search_query, PlacesClient, DEFAULT_LOCATION};
pub use error::PlacesError;
pub use normalize::{CharitySummary, DayHours, LatLng, PlaceDetail, Weekday, WeeklyHours};
