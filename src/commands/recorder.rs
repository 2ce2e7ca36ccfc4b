use std::path::Path;

use anyhow::Result;
use chrono::Timelike;
use meow_audio::{recorder_from_config, PlaybackStatus, RecorderAction};
use meow_core::{AppError, AudioFailure};

use crate::render;

pub async fn run(config_path: Option<&Path>, action: RecorderAction) -> Result<()> {
    let config = super::load_config(config_path)?;
    let recorder = recorder_from_config(&config.audio, &config.cache_dir)?;

    let now = chrono::Local::now();
    let status = recorder.press(action, now.hour() * 60 + now.minute()).await;

    let failure = match &status {
        PlaybackStatus::Missing => Some(AudioFailure::Missing),
        PlaybackStatus::Blocked => Some(AudioFailure::Blocked(format!(
            "could not start {:?}",
            config.audio.player.first()
        ))),
        _ => None,
    };
    if let Some(failure) = failure {
        let err = AppError::from(failure);
        tracing::warn!("{}", err);
        anyhow::bail!("{}", err.user_message());
    }

    println!("{}", render::recorder(&status));

    if matches!(status, PlaybackStatus::Playing { .. }) {
        tokio::select! {
            _ = recorder.player().wait_until_finished() => {}
            _ = tokio::signal::ctrl_c() => {
                // Dropping the recorder stops the player.
                tracing::info!("Playback interrupted");
            }
        }
    }
    Ok(())
}
