//! Plays clips through an external command-line player.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::{Child, Command};

use crate::player::{AudioError, AudioOutput, PlaybackHandle};
use crate::source::ClipSource;

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Downloads or reads a clip, caches it on disk and hands it to a player
/// process such as `ffplay` or `mpv`.
pub struct CommandOutput {
    client: reqwest::Client,
    player: Vec<String>,
    cache_dir: PathBuf,
}

impl CommandOutput {
    pub fn new(player: Vec<String>, cache_dir: impl Into<PathBuf>) -> Result<Self, AudioError> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| AudioError::Output(e.to_string()))?;

        Ok(Self {
            client,
            player,
            cache_dir: cache_dir.into(),
        })
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, AudioError> {
        let load_err = |reason: String| AudioError::Load {
            origin: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| load_err(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(load_err(format!("HTTP {}", status.as_u16())));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| load_err(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    async fn read_local(path: &Path) -> Result<Vec<u8>, AudioError> {
        tokio::fs::read(path).await.map_err(|e| AudioError::Load {
            origin: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Write the clip where the player can read it.
    async fn stage(&self, source: &ClipSource, bytes: &[u8]) -> Result<PathBuf, AudioError> {
        let name = match source {
            ClipSource::Remote(url) => url.rsplit('/').next().unwrap_or("clip.mp3").to_string(),
            ClipSource::Local(path) => return Ok(path.clone()),
        };

        tokio::fs::create_dir_all(&self.cache_dir)
            .await
            .map_err(|e| AudioError::Output(e.to_string()))?;
        let path = self.cache_dir.join(name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| AudioError::Output(e.to_string()))?;
        Ok(path)
    }

    fn spawn_player(&self, file: &Path) -> Result<Child, AudioError> {
        let (program, args) = self
            .player
            .split_first()
            .ok_or_else(|| AudioError::Blocked("no audio player configured".to_string()))?;

        Command::new(program)
            .args(args)
            .arg(file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                    AudioError::Blocked(format!("cannot start {}: {}", program, e))
                }
                _ => AudioError::Output(e.to_string()),
            })
    }
}

/// Check that the bytes look like an MP3: an ID3 tag or an MPEG frame sync.
pub fn looks_like_mp3(bytes: &[u8]) -> bool {
    match bytes {
        [b'I', b'D', b'3', ..] => true,
        [0xFF, second, ..] => second & 0xE0 == 0xE0,
        _ => false,
    }
}

impl AudioOutput for CommandOutput {
    type Handle = CommandHandle;

    async fn open(&self, source: &ClipSource) -> Result<CommandHandle, AudioError> {
        tracing::debug!(source = %source, "Opening clip");
        let bytes = match source {
            ClipSource::Remote(url) => self.fetch(url).await?,
            ClipSource::Local(path) => Self::read_local(path).await?,
        };

        if bytes.is_empty() || !looks_like_mp3(&bytes) {
            return Err(AudioError::Decode {
                origin: source.describe(),
                reason: format!("{} bytes, not an MP3 stream", bytes.len()),
            });
        }

        let file = self.stage(source, &bytes).await?;
        let child = self.spawn_player(&file)?;
        tracing::debug!(file = %file.display(), "Player started");

        Ok(CommandHandle {
            child,
            source: source.describe(),
        })
    }
}

pub struct CommandHandle {
    child: Child,
    source: String,
}

impl PlaybackHandle for CommandHandle {
    fn stop(&mut self) {
        if let Err(e) = self.child.start_kill() {
            // Already exited.
            tracing::trace!(error = %e, "Player kill skipped");
        }
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn is_finished(&mut self) -> bool {
        match self.child.try_wait() {
            Ok(status) => status.is_some(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to poll player");
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_mp3() {
        assert!(looks_like_mp3(b"ID3\x04\x00"));
        assert!(looks_like_mp3(&[0xFF, 0xFB, 0x90, 0x00]));
        assert!(!looks_like_mp3(b"<html>404</html>"));
        assert!(!looks_like_mp3(&[]));
        assert!(!looks_like_mp3(&[0xFF, 0x00]));
    }
}
