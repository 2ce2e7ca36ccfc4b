//! The Love Recorder: one message button and two gesture buttons.

use std::str::FromStr;

use crate::bucket::TimeBucket;
use crate::player::{AudioOutput, FallbackPlayer, PlaybackStatus};
use crate::source::Clip;

pub const LOVE_SIGNAL: &str = "Sending Love Signal... 💖";
pub const KISS_SIGNAL: &str = "Chu! Sending Kiss... 💋";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderAction {
    /// Play a voice message for the current time of day.
    Message,
    Love,
    Kiss,
}

impl FromStr for RecorderAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "message" | "msg" | "play" => Ok(Self::Message),
            "love" | "heart" => Ok(Self::Love),
            "kiss" => Ok(Self::Kiss),
            other => Err(format!("unknown recorder button: {}", other)),
        }
    }
}

pub struct Recorder<O: AudioOutput> {
    player: FallbackPlayer<O>,
}

impl<O: AudioOutput> Recorder<O> {
    pub fn new(player: FallbackPlayer<O>) -> Self {
        Self { player }
    }

    pub fn player(&self) -> &FallbackPlayer<O> {
        &self.player
    }

    /// Handle a button press at the given minute of the day.
    pub async fn press(&self, action: RecorderAction, minute_of_day: u32) -> PlaybackStatus {
        match action {
            RecorderAction::Message => {
                let bucket = TimeBucket::from_minute_of_day(minute_of_day);
                let clip = Clip::random(bucket, &mut rand::thread_rng());
                tracing::info!(bucket = %bucket, clip = clip.index, "Playing recorder message");
                self.player.play_clip(&clip).await
            }
            RecorderAction::Love => self.signal(LOVE_SIGNAL),
            RecorderAction::Kiss => self.signal(KISS_SIGNAL),
        }
    }

    /// Gesture buttons do nothing while a message is playing.
    fn signal(&self, text: &'static str) -> PlaybackStatus {
        let current = self.player.status();
        if matches!(current, PlaybackStatus::Playing { .. }) {
            tracing::debug!(signal = text, "Ignoring gesture while a message plays");
            return current;
        }
        let status = PlaybackStatus::Signal(text);
        self.player.set_status(status.clone());
        status
    }
}
