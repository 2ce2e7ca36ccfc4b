//! Content-specific error types.

use meow_core::error::{NetworkError, ReqwestErrorExt};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("API error: status {0}")]
    Status(u16),

    #[error("Unexpected response shape: {0}")]
    Shape(String),

    #[error("Empty response body")]
    EmptyBody,

    #[error("Weather client error: {0}")]
    Weather(#[from] meow_weather::WeatherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ContentError {
    fn from(e: reqwest::Error) -> Self {
        ContentError::Network(e.into_network_error())
    }
}

impl ContentError {
    /// User-friendly error message for the terminal.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network(e) => e.user_message(),
            Self::Status(_) | Self::Shape(_) | Self::EmptyBody => {
                "Cat Planet sent something odd. Try again later."
            }
            Self::Weather(_) => "Weather service error. Showing default weather.",
            Self::Io(_) => "Couldn't save the picture to disk.",
        }
    }
}
