//! Reverse geocoding: convert coordinates to a city name.
//! Uses Nominatim (OpenStreetMap) - free, no API key required.

use crate::types::{Location, WeatherError};
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "MeowingMorning/0.1.0 (daily greeting terminal app)";

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    address: Option<NominatimAddress>,
}

#[derive(Debug, Deserialize)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    county: Option<String>,
}

impl NominatimAddress {
    /// city > town > village > county
    fn place(self) -> Option<String> {
        self.city
            .or(self.town)
            .or(self.village)
            .or(self.county)
            .filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct Geocoder {
    client: Arc<Client>,
    base_url: String,
}

impl Geocoder {
    pub fn new(base_url: &str) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Reverse geocode coordinates to a city name.
    ///
    /// `Ok(None)` means the service answered but named no city, town, village
    /// or county. A location that already carries a city name is returned
    /// without a request.
    #[instrument(skip(self), level = "debug")]
    pub async fn reverse(&self, location: &Location) -> Result<Option<String>, WeatherError> {
        if location.city_name.is_some() {
            return Ok(location.city_name.clone());
        }

        let url = format!(
            "{}/reverse?format=json&lat={}&lon={}&zoom=10",
            self.base_url, location.latitude, location.longitude
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            tracing::debug!("Reverse geocode returned status {}", response.status());
            return Err(WeatherError::Status(response.status().as_u16()));
        }

        let body: NominatimResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        let place = body.address.and_then(NominatimAddress::place);
        match &place {
            Some(p) => tracing::info!("Reverse geocoded to: {}", p),
            None => tracing::debug!("Reverse geocode found no named place"),
        }
        Ok(place)
    }
}
