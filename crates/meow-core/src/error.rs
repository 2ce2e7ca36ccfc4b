//! Centralized error types for Meowing Morning.
//!
//! Nothing in the dashboard path is fatal: these errors are logged and the
//! caller swaps in default content. `user_message()` gives the short text
//! shown when a command does have to report a failure.

use thiserror::Error;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Audio error: {0}")]
    Audio(#[from] AudioFailure),
}

impl AppError {
    /// Returns a user-friendly message suitable for the terminal.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Storage(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Audio(e) => e.user_message(),
        }
    }
}

/// Network-related errors (HTTP, connectivity).
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_) => {
                "Unable to reach Cat Planet. Check your internet connection."
            }
            NetworkError::Timeout => "The request timed out. Please try again.",
            NetworkError::ServerError { status, .. } if *status >= 500 => {
                "The server is napping. Please try again later."
            }
            NetworkError::ServerError { .. } => "The request failed. Please try again.",
            NetworkError::InvalidResponse(_) => {
                "Received an unexpected response. Please try again."
            }
        }
    }
}

/// Local storage errors (profile file, cache directory).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read {0}")]
    ReadFailed(String),

    #[error("Failed to write {0}")]
    WriteFailed(String),

    #[error("Stored data is corrupted: {0}")]
    Corruption(String),
}

impl StorageError {
    pub fn user_message(&self) -> &'static str {
        match self {
            StorageError::ReadFailed(_) => "Unable to read saved data.",
            StorageError::WriteFailed(_) => "Unable to save your settings. Check disk permissions.",
            StorageError::Corruption(_) => "Saved settings look broken. Try `meowing-morning reset`.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}

/// Weather problems worth a note on the dashboard.
#[derive(Debug, Error)]
pub enum WeatherFailure {
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),
}

impl WeatherFailure {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherFailure::LocationUnavailable(_) => {
                "Couldn't sniff out where we are. Showing cat-city weather."
            }
        }
    }
}

/// Audio playback failures surfaced to the recorder.
#[derive(Debug, Error)]
pub enum AudioFailure {
    #[error("No audio source could be played")]
    Missing,

    #[error("Playback not allowed: {0}")]
    Blocked(String),
}

impl AudioFailure {
    pub fn user_message(&self) -> &'static str {
        match self {
            AudioFailure::Missing => "Audio Missing.",
            AudioFailure::Blocked(_) => "Tap again to play.",
        }
    }
}

/// Extension trait for converting reqwest errors to our error types.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_connect() {
            NetworkError::ConnectionFailed(self.to_string())
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else if self.is_decode() {
            NetworkError::InvalidResponse(self.to_string())
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}
