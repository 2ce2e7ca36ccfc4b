//! Fallback playback with a single active output.
//!
//! [`FallbackPlayer`] walks a clip's candidate sources in order until one of
//! them plays. At most one [`PlaybackHandle`] is alive at a time: the previous
//! handle is stopped and released before every new attempt, and concurrent
//! requests queue on the slot lock. Waiting for a clip to end never holds
//! that lock, so a new press or a stop always gets through.

use std::future::Future;
use std::time::Duration;

use parking_lot::Mutex;
use thiserror::Error;

use crate::source::{candidate_sources, Clip, ClipSource};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    #[error("Could not load {origin}: {reason}")]
    Load { origin: String, reason: String },

    #[error("Could not decode {origin}: {reason}")]
    Decode { origin: String, reason: String },

    #[error("Audio output failed: {0}")]
    Output(String),

    /// The environment refused to start playback. Retrying other sources won't help.
    #[error("Playback blocked: {0}")]
    Blocked(String),
}

/// A clip that is currently playing.
pub trait PlaybackHandle: Send {
    /// Stop playback and free the output. Must be safe to call twice.
    fn stop(&mut self);

    /// Where the audio came from.
    fn source(&self) -> &str;

    /// Whether playback already ended on its own. Must not block.
    fn is_finished(&mut self) -> bool;
}

/// Something that can turn a source into sound.
pub trait AudioOutput: Send + Sync {
    type Handle: PlaybackHandle;

    fn open(&self, source: &ClipSource) -> impl Future<Output = Result<Self::Handle, AudioError>> + Send;
}

/// Holds the one live playback handle.
///
/// `generation` changes on every acquire, so a waiter can tell its clip was
/// replaced even when another handle now sits in the slot.
pub struct PlaybackSlot<H: PlaybackHandle> {
    current: Option<H>,
    generation: u64,
}

impl<H: PlaybackHandle> PlaybackSlot<H> {
    pub fn new() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }

    /// Install a new handle, stopping whatever was there.
    pub fn acquire(&mut self, handle: H) {
        self.release();
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(handle);
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stop and drop the current handle. Returns whether one was active.
    pub fn release(&mut self) -> bool {
        match self.current.take() {
            Some(mut handle) => {
                handle.stop();
                tracing::debug!(source = handle.source(), "Released playback");
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> Option<&H> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}

impl<H: PlaybackHandle> Default for PlaybackSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: PlaybackHandle> Drop for PlaybackSlot<H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// What the recorder screen says about playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackStatus {
    Idle,
    Playing { label: String, source: String },
    /// Every candidate failed.
    Missing,
    /// Playback was refused; the user has to try again.
    Blocked,
    /// A non-audio recorder action.
    Signal(&'static str),
}

impl PlaybackStatus {
    pub fn text(&self) -> String {
        match self {
            Self::Idle => "Press a button to hear from me".to_string(),
            Self::Playing { label, .. } => format!("Playing: {}...", label),
            Self::Missing => "Audio Missing 😿".to_string(),
            Self::Blocked => "Tap again to play".to_string(),
            Self::Signal(text) => (*text).to_string(),
        }
    }
}

/// How often [`FallbackPlayer::wait_until_finished`] checks the live handle.
const FINISH_POLL: Duration = Duration::from_millis(100);

pub struct FallbackPlayer<O: AudioOutput> {
    output: O,
    slot: tokio::sync::Mutex<PlaybackSlot<O::Handle>>,
    status: Mutex<PlaybackStatus>,
    mirrors: Vec<String>,
    local_dir: std::path::PathBuf,
}

impl<O: AudioOutput> FallbackPlayer<O> {
    pub fn new(output: O, mirrors: Vec<String>, local_dir: impl Into<std::path::PathBuf>) -> Self {
        Self {
            output,
            slot: tokio::sync::Mutex::new(PlaybackSlot::new()),
            status: Mutex::new(PlaybackStatus::Idle),
            mirrors,
            local_dir: local_dir.into(),
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status.lock().clone()
    }

    pub(crate) fn set_status(&self, status: PlaybackStatus) {
        *self.status.lock() = status;
    }

    /// Play a clip, trying every mirror and then the local directory.
    pub async fn play_clip(&self, clip: &Clip) -> PlaybackStatus {
        let sources = candidate_sources(clip, &self.mirrors, &self.local_dir);
        self.play_sources(clip.bucket.label(), &sources).await
    }

    /// Try each source in order. The first one that opens wins.
    #[tracing::instrument(skip(self, sources), level = "debug")]
    pub async fn play_sources(&self, label: &str, sources: &[ClipSource]) -> PlaybackStatus {
        let mut slot = self.slot.lock().await;

        for (attempt, source) in sources.iter().enumerate() {
            slot.release();
            tracing::info!(attempt = attempt + 1, source = %source, "Attempting to load audio");

            match self.output.open(source).await {
                Ok(handle) => {
                    let status = PlaybackStatus::Playing {
                        label: label.to_string(),
                        source: handle.source().to_string(),
                    };
                    slot.acquire(handle);
                    self.set_status(status.clone());
                    return status;
                }
                Err(AudioError::Blocked(reason)) => {
                    tracing::warn!(source = %source, %reason, "Playback blocked");
                    self.set_status(PlaybackStatus::Blocked);
                    return PlaybackStatus::Blocked;
                }
                Err(e) => {
                    tracing::warn!(source = %source, error = %e, "Audio source failed, trying next");
                }
            }
        }

        tracing::error!(label, "All audio sources failed");
        self.set_status(PlaybackStatus::Missing);
        PlaybackStatus::Missing
    }

    /// Wait for the current clip to end, then go back to idle.
    ///
    /// Returns early if the clip is stopped or replaced by another press.
    pub async fn wait_until_finished(&self) {
        let generation = {
            let slot = self.slot.lock().await;
            if !slot.is_active() {
                return;
            }
            slot.generation()
        };

        loop {
            {
                let mut slot = self.slot.lock().await;
                if slot.generation() != generation {
                    tracing::debug!("Clip replaced while waiting for it");
                    return;
                }
                let Some(handle) = slot.current.as_mut() else {
                    tracing::debug!("Clip stopped while waiting for it");
                    return;
                };
                if handle.is_finished() {
                    slot.release();
                    self.set_status(PlaybackStatus::Idle);
                    return;
                }
            }
            tokio::time::sleep(FINISH_POLL).await;
        }
    }

    pub async fn stop(&self) {
        if self.slot.lock().await.release() {
            self.set_status(PlaybackStatus::Idle);
        }
    }

    pub async fn is_playing(&self) -> bool {
        self.slot.lock().await.is_active()
    }

    pub async fn active_source(&self) -> Option<String> {
        self.slot
            .lock()
            .await
            .current()
            .map(|h| h.source().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingHandle {
        source: String,
        live: Arc<AtomicUsize>,
        ended: Arc<AtomicBool>,
        stopped: bool,
    }

    impl PlaybackHandle for CountingHandle {
        fn stop(&mut self) {
            if !self.stopped {
                self.stopped = true;
                self.live.fetch_sub(1, Ordering::SeqCst);
            }
        }

        fn source(&self) -> &str {
            &self.source
        }

        fn is_finished(&mut self) -> bool {
            self.ended.load(Ordering::SeqCst)
        }
    }

    /// Clips keep playing until `ended` is set.
    #[derive(Default)]
    struct CountingOutput {
        live: Arc<AtomicUsize>,
        ended: Arc<AtomicBool>,
    }

    impl AudioOutput for CountingOutput {
        type Handle = CountingHandle;

        async fn open(&self, source: &ClipSource) -> Result<CountingHandle, AudioError> {
            self.live.fetch_add(1, Ordering::SeqCst);
            Ok(CountingHandle {
                source: source.describe(),
                live: Arc::clone(&self.live),
                ended: Arc::clone(&self.ended),
                stopped: false,
            })
        }
    }

    #[test]
    fn test_slot_acquire_stops_previous() {
        let live = Arc::new(AtomicUsize::new(0));
        let mut slot = PlaybackSlot::new();
        for name in ["a", "b", "c"] {
            live.fetch_add(1, Ordering::SeqCst);
            slot.acquire(CountingHandle {
                source: name.into(),
                live: Arc::clone(&live),
                ended: Arc::new(AtomicBool::new(false)),
                stopped: false,
            });
            assert_eq!(live.load(Ordering::SeqCst), 1);
        }
        assert_eq!(slot.current().map(|h| h.source()), Some("c"));
        assert!(slot.release());
        assert!(!slot.release());
        assert_eq!(live.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_repeated_presses_keep_one_handle() {
        let output = CountingOutput::default();
        let live = Arc::clone(&output.live);
        let player = FallbackPlayer::new(output, vec!["https://m.example".into()], "audio");

        for _ in 0..5 {
            let status = player
                .play_sources("Morning Greeting", &[ClipSource::Remote("https://m.example/x.mp3".into())])
                .await;
            assert!(matches!(status, PlaybackStatus::Playing { .. }));
            assert_eq!(live.load(Ordering::SeqCst), 1);
        }

        player.stop().await;
        assert_eq!(live.load(Ordering::SeqCst), 0);
        assert_eq!(player.status(), PlaybackStatus::Idle);
    }

    #[tokio::test]
    async fn test_concurrent_presses_are_serialized() {
        let output = CountingOutput::default();
        let live = Arc::clone(&output.live);
        let player = Arc::new(FallbackPlayer::new(output, vec![], "audio"));

        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let player = Arc::clone(&player);
                tokio::spawn(async move {
                    player
                        .play_sources("Lunch Break", &[ClipSource::Remote(format!("https://m.example/{}.mp3", i))])
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(live.load(Ordering::SeqCst), 1);
        assert!(player.is_playing().await);
    }

    fn remote(name: &str) -> Vec<ClipSource> {
        vec![ClipSource::Remote(format!("https://m.example/{}.mp3", name))]
    }

    #[test]
    fn test_slot_generation_moves_on_acquire() {
        let mut slot = PlaybackSlot::new();
        assert_eq!(slot.generation(), 0);
        slot.acquire(CountingHandle {
            source: "a".into(),
            live: Arc::new(AtomicUsize::new(1)),
            ended: Arc::new(AtomicBool::new(false)),
            stopped: false,
        });
        assert_eq!(slot.generation(), 1);
        slot.release();
        assert_eq!(slot.generation(), 1);
    }

    #[tokio::test]
    async fn test_wait_until_finished_goes_idle_when_clip_ends() {
        let output = CountingOutput::default();
        let live = Arc::clone(&output.live);
        let ended = Arc::clone(&output.ended);
        let player = Arc::new(FallbackPlayer::new(output, vec![], "audio"));
        player.play_sources("Morning Greeting", &remote("a")).await;

        let waiter = tokio::spawn({
            let player = Arc::clone(&player);
            async move { player.wait_until_finished().await }
        });
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!waiter.is_finished());

        ended.store(true, Ordering::SeqCst);
        let joined = tokio::time::timeout(Duration::from_secs(2), waiter).await;
        assert!(joined.is_ok(), "waiter should see the clip end");
        assert_eq!(player.status(), PlaybackStatus::Idle);
        assert_eq!(live.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_new_press_preempts_clip_being_waited_on() {
        let output = CountingOutput::default();
        let live = Arc::clone(&output.live);
        let player = Arc::new(FallbackPlayer::new(output, vec![], "audio"));
        player.play_sources("Morning Greeting", &remote("first")).await;

        let waiter = tokio::spawn({
            let player = Arc::clone(&player);
            async move { player.wait_until_finished().await }
        });
        tokio::time::sleep(Duration::from_millis(50)).await;

        let status = tokio::time::timeout(
            Duration::from_secs(1),
            player.play_sources("Lunch Break", &remote("second")),
        )
        .await;
        assert!(
            matches!(status, Ok(PlaybackStatus::Playing { .. })),
            "second press must not wait for the first clip"
        );
        assert_eq!(live.load(Ordering::SeqCst), 1);
        assert_eq!(
            player.active_source().await.as_deref(),
            Some("https://m.example/second.mp3")
        );

        // The waiter gives up on the replaced clip and leaves the new one alone.
        let joined = tokio::time::timeout(Duration::from_secs(1), waiter).await;
        assert!(joined.is_ok(), "waiter should notice the replacement");
        assert!(matches!(player.status(), PlaybackStatus::Playing { .. }));
        assert!(player.is_playing().await);
    }

    #[tokio::test]
    async fn test_stop_while_waiting_returns_promptly() {
        let output = CountingOutput::default();
        let live = Arc::clone(&output.live);
        let player = Arc::new(FallbackPlayer::new(output, vec![], "audio"));
        player.play_sources("Dinner Time", &remote("a")).await;

        let waiter = tokio::spawn({
            let player = Arc::clone(&player);
            async move { player.wait_until_finished().await }
        });
        tokio::time::sleep(Duration::from_millis(50)).await;

        let stopped = tokio::time::timeout(Duration::from_secs(1), player.stop()).await;
        assert!(stopped.is_ok(), "stop must not wait for the clip");
        let joined = tokio::time::timeout(Duration::from_secs(1), waiter).await;
        assert!(joined.is_ok(), "waiter should notice the stop");
        assert_eq!(player.status(), PlaybackStatus::Idle);
        assert_eq!(live.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_wait_with_nothing_playing_returns() {
        let player = FallbackPlayer::new(CountingOutput::default(), vec![], "audio");
        player.wait_until_finished().await;
        assert_eq!(player.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(
            PlaybackStatus::Playing {
                label: "Dinner Time".into(),
                source: "x".into()
            }
            .text(),
            "Playing: Dinner Time..."
        );
        assert_eq!(PlaybackStatus::Missing.text(), "Audio Missing 😿");
        assert_eq!(PlaybackStatus::Blocked.text(), "Tap again to play");
    }
}
