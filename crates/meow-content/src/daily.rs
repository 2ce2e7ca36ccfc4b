//! Today's dashboard content: weather, tip, quote and horoscope.

use meow_core::{EndpointConfig, UserProfile};
use meow_weather::{Geocoder, Location, WeatherCondition, WeatherProvider, WeatherSnapshot};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ContentError;
use crate::horoscope::HoroscopeClient;
use crate::quotes::{random_quote, DEFAULT_QUOTE};
use crate::tips::{select_tip, DEFAULT_TIP};

/// Horoscope placeholder shown before anything has loaded.
pub const DEFAULT_HOROSCOPE: &str = "The stars are whispering secrets just for you...";

/// Conditions picked from when there are no coordinates.
const SIMULATED_CONDITIONS: [WeatherCondition; 3] = [
    WeatherCondition::Clear,
    WeatherCondition::Clouds,
    WeatherCondition::Rain,
];

#[derive(Debug, Clone, PartialEq)]
pub struct DailyContent {
    pub weather_tip: String,
    pub quote: String,
    pub horoscope: String,
    pub weather: WeatherSnapshot,
}

impl Default for DailyContent {
    fn default() -> Self {
        Self {
            weather_tip: DEFAULT_TIP.to_string(),
            quote: DEFAULT_QUOTE.to_string(),
            horoscope: DEFAULT_HOROSCOPE.to_string(),
            weather: WeatherSnapshot::default(),
        }
    }
}

/// Made-up weather for users who didn't share a location: Clear, Clouds or
/// Rain at 15–27 °C in Cat City.
pub fn simulate_weather<R: Rng + ?Sized>(rng: &mut R) -> WeatherSnapshot {
    let condition = SIMULATED_CONDITIONS
        .choose(rng)
        .copied()
        .unwrap_or_default();
    WeatherSnapshot {
        temp: rng.gen_range(15..28),
        condition,
        ..WeatherSnapshot::default()
    }
}

/// Fill in tip and quote around already-fetched weather and horoscope.
pub fn compose<R: Rng + ?Sized>(
    weather: WeatherSnapshot,
    horoscope: String,
    rng: &mut R,
) -> DailyContent {
    let weather_tip = select_tip(weather.condition, weather.uv_index, weather.aqi, rng);
    DailyContent {
        weather_tip: weather_tip.to_string(),
        quote: random_quote(rng).to_string(),
        horoscope,
        weather,
    }
}

/// Gathers everything the dashboard shows.
pub struct DailyContentService {
    weather: WeatherProvider,
    geocoder: Geocoder,
    horoscope: HoroscopeClient,
}

impl DailyContentService {
    pub fn new(
        weather: WeatherProvider,
        geocoder: Geocoder,
        horoscope: HoroscopeClient,
    ) -> Self {
        Self {
            weather,
            geocoder,
            horoscope,
        }
    }

    pub fn from_endpoints(endpoints: &EndpointConfig) -> Result<Self, ContentError> {
        let weather = WeatherProvider::new(&endpoints.weather, &endpoints.air_quality)?;
        let geocoder = Geocoder::new(&endpoints.geocode)?;
        let horoscope = HoroscopeClient::new(&endpoints.horoscope)?;
        Ok(Self::new(weather, geocoder, horoscope))
    }

    /// Build today's content. Never fails; every missing piece has a default.
    pub async fn generate(&self, profile: &UserProfile, location: Option<&Location>) -> DailyContent {
        let weather = match location {
            Some(loc) => self.weather.observe(loc, &self.geocoder).await,
            None => {
                tracing::info!("No coordinates, simulating weather");
                simulate_weather(&mut rand::thread_rng())
            }
        };

        let horoscope = self.horoscope.daily_or_fallback(profile.zodiac).await;

        compose(weather, horoscope, &mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tips::TipCategory;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_content_matches_placeholders() {
        let content = DailyContent::default();
        assert_eq!(content.weather_tip, "Sun is shining, come sunbathe with me!");
        assert_eq!(content.quote, "Where there is love there is life.");
        assert_eq!(content.horoscope, DEFAULT_HOROSCOPE);
        assert_eq!(content.weather.city, "Cat City");
    }

    #[test]
    fn test_simulated_weather_bounds() {
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..200 {
            let w = simulate_weather(&mut rng);
            assert!((15..28).contains(&w.temp), "temp {} out of range", w.temp);
            assert!(SIMULATED_CONDITIONS.contains(&w.condition));
            assert_eq!(w.city, "Cat City");
            assert!(w.aqi.is_none() && w.uv_index.is_none());
        }
    }

    #[test]
    fn test_compose_uses_selector() {
        let mut rng = StdRng::seed_from_u64(32);
        let weather = WeatherSnapshot {
            temp: 30,
            condition: WeatherCondition::Clear,
            city: "Catford".into(),
            uv_index: Some(9.0),
            aqi: Some(20),
        };
        let content = compose(weather, "Lucky day".into(), &mut rng);
        assert!(TipCategory::ExtremeUv
            .pool()
            .contains(&content.weather_tip.as_str()));
        assert_eq!(content.horoscope, "Lucky day");
        assert_eq!(content.weather.city, "Catford");
    }
}
