//! Daily horoscope client.

use std::time::Duration;

use meow_core::Zodiac;
use serde::Deserialize;
use tracing::instrument;

use crate::error::ContentError;

pub const HOROSCOPE_API_BASE: &str = "https://horoscope-app-api.vercel.app/api/v1/get-horoscope";

/// Shown whenever the horoscope service can't give us a reading.
pub const FALLBACK_HOROSCOPE: &str =
    "The stars remain mysterious today, but luck is on your side. Trust your instincts!";

#[derive(Debug, Deserialize)]
struct HoroscopeResponse {
    data: Option<HoroscopeData>,
}

#[derive(Debug, Deserialize)]
struct HoroscopeData {
    horoscope_data: Option<String>,
}

pub struct HoroscopeClient {
    client: reqwest::Client,
    base_url: String,
}

impl HoroscopeClient {
    pub fn new(base_url: &str) -> Result<Self, ContentError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Today's reading for a sign.
    #[instrument(skip(self), level = "debug")]
    pub async fn daily(&self, sign: Zodiac) -> Result<String, ContentError> {
        let url = format!("{}/daily?sign={}&day=today", self.base_url, sign.name());

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(ContentError::Status(status.as_u16()));
        }

        let body: HoroscopeResponse = response
            .json()
            .await
            .map_err(|e| ContentError::Shape(e.to_string()))?;

        body.data
            .and_then(|d| d.horoscope_data)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| ContentError::Shape("missing data.horoscope_data".to_string()))
    }

    /// Today's reading, or [`FALLBACK_HOROSCOPE`] on any failure.
    pub async fn daily_or_fallback(&self, sign: Zodiac) -> String {
        match self.daily(sign).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to fetch horoscope: {}", e);
                FALLBACK_HOROSCOPE.to_string()
            }
        }
    }
}
