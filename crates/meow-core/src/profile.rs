//! The user's nickname and star sign, and the file that remembers them.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::StorageError;

/// Fixed storage key; the profile lives in `<data_dir>/<PROFILE_KEY>.json`.
pub const PROFILE_KEY: &str = "meowing_morning_user_config";

/// The twelve western zodiac signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zodiac {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Zodiac {
    pub const ALL: [Zodiac; 12] = [
        Zodiac::Aries,
        Zodiac::Taurus,
        Zodiac::Gemini,
        Zodiac::Cancer,
        Zodiac::Leo,
        Zodiac::Virgo,
        Zodiac::Libra,
        Zodiac::Scorpio,
        Zodiac::Sagittarius,
        Zodiac::Capricorn,
        Zodiac::Aquarius,
        Zodiac::Pisces,
    ];

    /// English name, as the horoscope API expects it
    pub fn name(&self) -> &'static str {
        match self {
            Zodiac::Aries => "Aries",
            Zodiac::Taurus => "Taurus",
            Zodiac::Gemini => "Gemini",
            Zodiac::Cancer => "Cancer",
            Zodiac::Leo => "Leo",
            Zodiac::Virgo => "Virgo",
            Zodiac::Libra => "Libra",
            Zodiac::Scorpio => "Scorpio",
            Zodiac::Sagittarius => "Sagittarius",
            Zodiac::Capricorn => "Capricorn",
            Zodiac::Aquarius => "Aquarius",
            Zodiac::Pisces => "Pisces",
        }
    }
}

impl std::fmt::Display for Zodiac {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Zodiac {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Zodiac::ALL
            .iter()
            .copied()
            .find(|z| z.name().eq_ignore_ascii_case(wanted))
            .ok_or(ProfileError::MissingZodiac)
    }
}

/// Profile validation errors. The messages are shown as-is on the setup screen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("Please tell me your name, meow!")]
    EmptyNickname,
    #[error("Please pick your star sign!")]
    MissingZodiac,
}

/// Who the greetings are for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub nickname: String,
    pub zodiac: Zodiac,
}

impl UserProfile {
    /// Build a profile from raw form input.
    ///
    /// The nickname is trimmed; a blank nickname is rejected before the sign
    /// is looked at, matching the order the setup form reports problems.
    pub fn from_input(nickname: &str, zodiac: Option<&str>) -> Result<Self, ProfileError> {
        let nickname = nickname.trim();
        if nickname.is_empty() {
            return Err(ProfileError::EmptyNickname);
        }
        let zodiac = match zodiac.map(str::trim).filter(|z| !z.is_empty()) {
            Some(z) => z.parse()?,
            None => return Err(ProfileError::MissingZodiac),
        };
        Ok(Self {
            nickname: nickname.to_string(),
            zodiac,
        })
    }

    /// Apply the form rules to a profile that did not come from the form.
    pub fn validate(&self) -> Result<(), ProfileError> {
        Self::from_input(&self.nickname, Some(self.zodiac.name())).map(|_| ())
    }
}

/// JSON-file storage for the single user profile.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(format!("{}.json", PROFILE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the profile, creating the data directory if needed.
    pub fn save(&self, profile: &UserProfile) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StorageError::WriteFailed(format!("{}: {}", parent.display(), e)))?;
        }

        let json = serde_json::to_string(profile)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        fs::write(&self.path, json)
            .map_err(|e| StorageError::WriteFailed(format!("{}: {}", self.path.display(), e)))?;

        tracing::info!("Saved profile for {} to {:?}", profile.nickname, self.path);
        Ok(())
    }

    /// Read the stored profile. A missing file is `Ok(None)`.
    pub fn try_load(&self) -> Result<Option<UserProfile>, StorageError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::ReadFailed(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let profile: UserProfile =
            serde_json::from_str(&json).map_err(|e| StorageError::Corruption(e.to_string()))?;
        profile.validate().map_err(|e| {
            StorageError::Corruption(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(Some(profile))
    }

    /// Read the stored profile, treating any failure as "not configured".
    pub fn load(&self) -> Option<UserProfile> {
        match self.try_load() {
            Ok(profile) => profile,
            Err(e) => {
                tracing::error!("Failed to load profile: {}", e);
                None
            }
        }
    }

    /// Forget the stored profile. Clearing an absent profile is not an error.
    pub fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::WriteFailed(format!(
                "{}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
