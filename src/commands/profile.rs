//! Non-interactive profile management.

use std::path::Path;

use anyhow::{Context, Result};
use meow_core::{AppError, UserProfile};

pub fn setup(config_path: Option<&Path>, nickname: &str, zodiac: &str) -> Result<()> {
    let config = super::load_config(config_path)?;
    let store = super::profile_store(&config);

    let profile = UserProfile::from_input(nickname, Some(zodiac))?;
    if let Err(e) = store.save(&profile) {
        let err = AppError::from(e);
        tracing::error!("Failed to save profile: {}", err);
        anyhow::bail!("{} ({})", err.user_message(), store.path().display());
    }

    println!("Saved! Hello {} ({}) 🐱", profile.nickname, profile.zodiac);
    Ok(())
}

pub fn reset(config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let store = super::profile_store(&config);

    store
        .clear()
        .with_context(|| format!("Could not remove {}", store.path().display()))?;

    println!("Profile cleared. See you at setup, meow.");
    Ok(())
}
