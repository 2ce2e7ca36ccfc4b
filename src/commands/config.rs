use std::path::Path;

use anyhow::Result;
use clap::Subcommand;
use meow_core::{AppError, Config, ConfigError};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration
    Show,
    /// Check the configuration and list problems
    Validate,
    /// Print where the config file lives
    Path,
}

pub fn run(config_path: Option<&Path>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => show(config_path),
        ConfigAction::Validate => validate(config_path),
        ConfigAction::Path => path(config_path),
    }
}

fn load(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn show(config_path: Option<&Path>) -> Result<()> {
    print!("{}", load(config_path)?.to_toml()?);
    Ok(())
}

fn validate(config_path: Option<&Path>) -> Result<()> {
    let validation = load(config_path)?.validate();

    for warning in &validation.warnings {
        println!("warning: {}", warning);
    }
    if !validation.is_valid() {
        for error in &validation.errors {
            println!("error: {}", error);
        }
        let err = AppError::from(ConfigError::Invalid(validation.error_summary()));
        tracing::debug!("{}", err);
        anyhow::bail!("{}", err.user_message());
    }

    println!("Configuration OK");
    Ok(())
}

fn path(config_path: Option<&Path>) -> Result<()> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };
    println!("{}", path.display());
    Ok(())
}
