use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// City shown when nothing better is known.
pub const DEFAULT_CITY: &str = "Cat City";
/// City shown when geocoding answered but named no settlement.
pub const UNKNOWN_AREA: &str = "Local Area";
/// Temperature (°C) shown when no forecast is available.
pub const DEFAULT_TEMPERATURE: i32 = 22;

/// Weather categories the tip pools are keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeatherCondition {
    #[default]
    Clear,
    Clouds,
    Mist,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
    Squall,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 8] = [
        Self::Clear,
        Self::Clouds,
        Self::Mist,
        Self::Drizzle,
        Self::Rain,
        Self::Snow,
        Self::Thunderstorm,
        Self::Squall,
    ];

    /// Convert WMO weather code to WeatherCondition
    /// See: https://open-meteo.com/en/docs#weathervariables
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1..=3 => Self::Clouds,
            45 | 48 => Self::Mist,
            51..=57 => Self::Drizzle, // includes freezing drizzle
            61..=67 | 80..=82 => Self::Rain,
            71..=77 | 85 | 86 => Self::Snow,
            95..=99 => Self::Thunderstorm,
            _ => Self::Clear,
        }
    }

    /// Parse a condition label. Anything unrecognized is `Clear`.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(label))
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Mist => "Mist",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Thunderstorm => "Thunderstorm",
            Self::Squall => "Squall",
        }
    }

    /// Terminal glyph for the dashboard header
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Clear => "☀",
            Self::Clouds => "☁",
            Self::Mist => "🌫",
            Self::Drizzle | Self::Rain => "🌧",
            Self::Snow => "❄",
            Self::Thunderstorm => "⛈",
            Self::Squall => "🌬",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Geographic location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub city_name: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            city_name: None,
        }
    }
}

/// Current conditions from the forecast endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub condition: WeatherCondition,
    /// Today's maximum UV index, when the forecast includes it
    pub uv_index_max: Option<f64>,
    pub fetched_at: DateTime<Utc>,
}

/// What the dashboard shows about the weather
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Rounded °C
    pub temp: i32,
    pub condition: WeatherCondition,
    pub city: String,
    pub uv_index: Option<f64>,
    /// US AQI
    pub aqi: Option<u32>,
}

impl Default for WeatherSnapshot {
    fn default() -> Self {
        Self {
            temp: DEFAULT_TEMPERATURE,
            condition: WeatherCondition::Clear,
            city: DEFAULT_CITY.to_string(),
            uv_index: None,
            aqi: None,
        }
    }
}

/// Location service errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location request timed out")]
    Timeout,
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Location error: {0}")]
    Location(#[from] LocationError),
    #[error("Unexpected status {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
}
