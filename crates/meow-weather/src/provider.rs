//! Open-Meteo forecast and air-quality client.

use crate::geocode::Geocoder;
use crate::types::{
    CurrentConditions, Location, WeatherCondition, WeatherError, WeatherSnapshot, DEFAULT_CITY,
    UNKNOWN_AREA,
};
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

pub const OPEN_METEO_URL: &str = "https://api.open-meteo.com";
pub const AIR_QUALITY_URL: &str = "https://air-quality-api.open-meteo.com";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeatherBody>,
    daily: Option<DailyBody>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherBody {
    temperature: f64,
    weathercode: i32,
}

#[derive(Debug, Deserialize)]
struct DailyBody {
    #[serde(default)]
    uv_index_max: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct AirQualityResponse {
    current: Option<AirQualityCurrent>,
}

#[derive(Debug, Deserialize)]
struct AirQualityCurrent {
    us_aqi: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    forecast_base: String,
    air_quality_base: String,
}

impl WeatherProvider {
    pub fn new(forecast_base: &str, air_quality_base: &str) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            forecast_base: forecast_base.trim_end_matches('/').to_string(),
            air_quality_base: air_quality_base.trim_end_matches('/').to_string(),
        })
    }

    /// Current temperature and condition plus today's maximum UV index.
    #[instrument(skip(self), level = "debug")]
    pub async fn current(&self, location: &Location) -> Result<CurrentConditions, WeatherError> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current_weather=true&daily=uv_index_max&timezone=auto",
            self.forecast_base, location.latitude, location.longitude
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status().as_u16()));
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        let current = body
            .current_weather
            .ok_or_else(|| WeatherError::Parse("missing current_weather".to_string()))?;

        let uv_index_max = body
            .daily
            .and_then(|d| d.uv_index_max.into_iter().next())
            .flatten();

        Ok(CurrentConditions {
            temperature: current.temperature,
            condition: WeatherCondition::from_wmo_code(current.weathercode),
            uv_index_max,
            fetched_at: Utc::now(),
        })
    }

    /// Current US AQI. `Ok(None)` when the station reports no value.
    #[instrument(skip(self), level = "debug")]
    pub async fn air_quality(&self, location: &Location) -> Result<Option<u32>, WeatherError> {
        let url = format!(
            "{}/v1/air-quality?latitude={}&longitude={}&current=us_aqi",
            self.air_quality_base, location.latitude, location.longitude
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status().as_u16()));
        }

        let body: AirQualityResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        Ok(body
            .current
            .and_then(|c| c.us_aqi)
            .filter(|aqi| aqi.is_finite() && *aqi >= 0.0)
            .map(|aqi| aqi.round() as u32))
    }

    /// Build the dashboard weather for a location. Never fails.
    ///
    /// Forecast and air quality are requested concurrently, then the city is
    /// looked up. Each failed piece falls back to its default on its own.
    pub async fn observe(&self, location: &Location, geocoder: &Geocoder) -> WeatherSnapshot {
        let (current, aqi) = tokio::join!(self.current(location), self.air_quality(location));

        let mut snapshot = WeatherSnapshot::default();

        match current {
            Ok(c) => {
                snapshot.temp = c.temperature.round() as i32;
                snapshot.condition = c.condition;
                snapshot.uv_index = c.uv_index_max;
            }
            Err(e) => tracing::warn!("Failed to fetch weather: {}", e),
        }

        match aqi {
            Ok(aqi) => snapshot.aqi = aqi,
            Err(e) => tracing::warn!("Failed to fetch air quality: {}", e),
        }

        snapshot.city = match geocoder.reverse(location).await {
            Ok(Some(city)) => city,
            Ok(None) => UNKNOWN_AREA.to_string(),
            Err(e) => {
                tracing::warn!("Failed to reverse geocode: {}", e);
                DEFAULT_CITY.to_string()
            }
        };

        snapshot
    }
}
