//! Love Recorder audio: picks a voice clip for the time of day and plays it
//! from the first source that works.

pub mod bucket;
pub mod command;
pub mod player;
pub mod recorder;
pub mod source;

pub use bucket::TimeBucket;
pub use command::{CommandHandle, CommandOutput};
pub use player::{AudioError, AudioOutput, FallbackPlayer, PlaybackHandle, PlaybackSlot, PlaybackStatus};
pub use recorder::{Recorder, RecorderAction};
pub use source::{candidate_sources, Clip, ClipSource};

use meow_core::AudioConfig;

/// Build a recorder that plays through the configured external player.
pub fn recorder_from_config(
    config: &AudioConfig,
    cache_dir: &std::path::Path,
) -> Result<Recorder<CommandOutput>, AudioError> {
    let output = CommandOutput::new(config.player.clone(), cache_dir.join("audio"))?;
    let player = FallbackPlayer::new(output, config.mirrors.clone(), config.local_dir.clone());
    Ok(Recorder::new(player))
}
