use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::ConfigError;

const APP_DIR: &str = "meowing-morning";
const CONFIG_FILE: &str = "config.toml";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where the user profile lives
    pub data_dir: PathBuf,

    /// Where downloaded cat photos and audio clips are written
    pub cache_dir: PathBuf,

    /// Base URLs of the public APIs
    #[serde(default)]
    pub endpoints: EndpointConfig,

    /// Fixed coordinates and the location lookup timeout
    #[serde(default)]
    pub location: LocationConfig,

    /// Cat photo size
    #[serde(default)]
    pub cat: CatConfig,

    /// Love Recorder mirrors and player
    #[serde(default)]
    pub audio: AudioConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub weather: String,
    pub air_quality: String,
    pub geocode: String,
    pub horoscope: String,
    pub cat: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            weather: "https://api.open-meteo.com".to_string(),
            air_quality: "https://air-quality-api.open-meteo.com".to_string(),
            geocode: "https://nominatim.openstreetmap.org".to_string(),
            horoscope: "https://horoscope-app-api.vercel.app/api/v1/get-horoscope".to_string(),
            cat: "https://cataas.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Latitude in degrees; set together with `longitude`
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Longitude in degrees; set together with `latitude`
    #[serde(default)]
    pub longitude: Option<f64>,

    /// How long to wait for a location before falling back (seconds)
    #[serde(default = "default_location_timeout")]
    pub timeout_secs: u64,
}

fn default_location_timeout() -> u64 {
    10
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: None,
            longitude: None,
            timeout_secs: default_location_timeout(),
        }
    }
}

impl LocationConfig {
    /// Both coordinates, or `None` when either is missing.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CatConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Remote asset bases tried in order before the local directory
    #[serde(default = "default_audio_mirrors")]
    pub mirrors: Vec<String>,

    /// Local fallback directory for `{bucket}_{n}.mp3` files
    #[serde(default = "default_audio_local_dir")]
    pub local_dir: PathBuf,

    /// Player command; the clip path is appended as the last argument
    #[serde(default = "default_audio_player")]
    pub player: Vec<String>,
}

fn default_audio_mirrors() -> Vec<String> {
    vec![
        "https://raw.githubusercontent.com/sherlyleung/audio/refs/heads/main".to_string(),
        "https://github.com/sherlyleung/audio/raw/refs/heads/main".to_string(),
    ]
}

fn default_audio_local_dir() -> PathBuf {
    PathBuf::from("audio")
}

fn default_audio_player() -> Vec<String> {
    ["ffplay", "-nodisp", "-autoexit", "-loglevel", "quiet"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            mirrors: default_audio_mirrors(),
            local_dir: default_audio_local_dir(),
            player: default_audio_player(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);

        Self {
            data_dir,
            cache_dir,
            endpoints: EndpointConfig::default(),
            location: LocationConfig::default(),
            cat: CatConfig::default(),
            audio: AudioConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, writing defaults if it doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let config = Self::default();
            config.save_to(config_path)?;
            tracing::info!("Wrote default config to {}", config_path.display());
            return Ok(config);
        }

        let contents =
            std::fs::read_to_string(config_path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", config_path.display(), e)))?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        Self::load_validated_from(&Self::config_path()?)
    }

    /// Same as [`Config::load_validated`] for an explicit file
    pub fn load_validated_from(config_path: &Path) -> Result<(Self, ValidationResult)> {
        let config = Self::load_from(config_path)?;
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        let endpoints = [
            ("endpoints.weather", &self.endpoints.weather),
            ("endpoints.air_quality", &self.endpoints.air_quality),
            ("endpoints.geocode", &self.endpoints.geocode),
            ("endpoints.horoscope", &self.endpoints.horoscope),
            ("endpoints.cat", &self.endpoints.cat),
        ];
        for (field, url) in endpoints {
            self.validate_url(url, field, &mut result);
        }

        match (self.location.latitude, self.location.longitude) {
            (Some(lat), Some(lon)) => {
                if !(-90.0..=90.0).contains(&lat) {
                    result.add_error("location.latitude", "Latitude must be within [-90, 90]");
                }
                if !(-180.0..=180.0).contains(&lon) {
                    result.add_error("location.longitude", "Longitude must be within [-180, 180]");
                }
            }
            (None, None) => {}
            _ => result.add_error(
                "location",
                "Latitude and longitude must be set together",
            ),
        }

        if self.location.timeout_secs == 0 {
            result.add_error("location.timeout_secs", "Timeout must be greater than 0");
        }

        for (field, value) in [("cat.width", self.cat.width), ("cat.height", self.cat.height)] {
            if value == 0 {
                result.add_error(field, "Cat photo dimensions must be greater than 0");
            } else if value > 4000 {
                result.add_warning(field, "Cat photo dimension is unusually large (>4000)");
            }
        }

        if self.audio.player.is_empty() {
            result.add_error("audio.player", "Player command cannot be empty");
        }

        if self.audio.mirrors.is_empty() {
            result.add_warning(
                "audio.mirrors",
                "No audio mirrors configured - only local clips will play",
            );
        }
        for (i, mirror) in self.audio.mirrors.iter().enumerate() {
            self.validate_url(mirror, &format!("audio.mirrors[{}]", i), &mut result);
        }

        result
    }

    /// Validate a URL field
    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = self.to_toml()?;

        std::fs::write(config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Render the configuration as it would be written to disk
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join(APP_DIR);

        Ok(config_dir.join(CONFIG_FILE))
    }
}
