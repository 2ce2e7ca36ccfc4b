//! Weather for Meowing Morning
//!
//! Current conditions, UV and air quality via Open-Meteo, city names via
//! Nominatim, and location resolution with a timeout.

pub mod geocode;
pub mod location;
pub mod provider;
pub mod types;

pub use geocode::Geocoder;
pub use location::{resolve_location, FixedLocation, LocationSource, DEFAULT_LOCATION_TIMEOUT};
pub use provider::WeatherProvider;
pub use types::*;
