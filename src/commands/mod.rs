pub mod config;
pub mod dashboard;
pub mod profile;
pub mod recorder;
pub mod run;
pub mod widgets;

use std::path::Path;

use anyhow::Result;
use meow_core::{AppError, Config, ConfigError, ProfileStore};

/// Load and validate the config, from `path` when given.
///
/// A malformed or invalid file is reported with its short user message on top.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_validated_from(path),
        None => Config::load_validated(),
    };
    match loaded {
        Ok((config, _)) => Ok(config),
        Err(e) => match e.downcast::<ConfigError>() {
            Ok(config_err) => {
                let err = AppError::from(config_err);
                tracing::debug!("{}", err);
                let hint = err.user_message();
                Err(anyhow::Error::new(err).context(hint))
            }
            Err(e) => Err(e),
        },
    }
}

pub fn profile_store(config: &Config) -> ProfileStore {
    ProfileStore::new(&config.data_dir)
}
