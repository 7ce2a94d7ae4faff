//! Now-playing state machine
//!
//! Tracks at most one current video by id. The state never holds a copy of
//! the [`Video`](crate::model::Video); callers resolve the id against the
//! catalog so moderation changes are always visible.

use crate::error::{Error, Result};
use serde::Serialize;

/// Stopped, or a current video that is playing or paused
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing(String),
    Paused(String),
}

/// Observable effect of a playback transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "video_id", rename_all = "snake_case")]
pub enum PlaybackEvent {
    Started(String),
    Stopped(String),
    Paused(String),
    Resumed(String),
}

/// Result of a pause request on a current video
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PauseOutcome {
    /// The video was playing and is now paused
    Paused(PlaybackEvent),

    /// The video was already paused; nothing changed
    AlreadyPaused { video_id: String },
}

impl PlaybackState {
    /// Id of the current video, playing or paused
    pub fn current(&self) -> Option<&str> {
        match self {
            PlaybackState::Stopped => None,
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => Some(id),
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing(_))
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused(_))
    }

    /// Make `video_id` the playing video, stopping whatever was current first
    pub fn play(&mut self, video_id: &str) -> Vec<PlaybackEvent> {
        let mut events = Vec::with_capacity(2);
        if let Some(previous) = self.current() {
            events.push(PlaybackEvent::Stopped(previous.to_string()));
        }
        *self = PlaybackState::Playing(video_id.to_string());
        events.push(PlaybackEvent::Started(video_id.to_string()));
        events
    }

    pub fn stop(&mut self) -> Result<PlaybackEvent> {
        match std::mem::take(self) {
            PlaybackState::Stopped => Err(Error::NothingPlaying),
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => {
                Ok(PlaybackEvent::Stopped(id))
            }
        }
    }

    /// Stop only if `video_id` is the current video
    pub fn stop_if_current(&mut self, video_id: &str) -> Option<PlaybackEvent> {
        if self.current() == Some(video_id) {
            self.stop().ok()
        } else {
            None
        }
    }

    pub fn pause(&mut self) -> Result<PauseOutcome> {
        match self {
            PlaybackState::Stopped => Err(Error::NothingPlaying),
            PlaybackState::Paused(id) => Ok(PauseOutcome::AlreadyPaused {
                video_id: id.clone(),
            }),
            PlaybackState::Playing(id) => {
                let id = std::mem::take(id);
                let event = PlaybackEvent::Paused(id.clone());
                *self = PlaybackState::Paused(id);
                Ok(PauseOutcome::Paused(event))
            }
        }
    }

    pub fn resume(&mut self) -> Result<PlaybackEvent> {
        match self {
            PlaybackState::Stopped => Err(Error::NothingPlaying),
            PlaybackState::Playing(id) => Err(Error::NotPaused {
                video_id: id.clone(),
            }),
            PlaybackState::Paused(id) => {
                let id = std::mem::take(id);
                let event = PlaybackEvent::Resumed(id.clone());
                *self = PlaybackState::Playing(id);
                Ok(event)
            }
        }
    }
}
