// Playback state - what's playing and whether it's paused
// Tracked by video id; titles only show up when rendering

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing(String),
    Paused(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("No video is currently playing")]
    NothingPlaying,
    #[error("Video is not paused")]
    NotPaused,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("Video does not exist")]
    NotFound,
    #[error("Video is currently flagged (reason: {reason})")]
    Flagged { reason: String },
    #[error("No videos available")]
    NoVideosAvailable,
}

/// Result of a pause request that didn't fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseStatus {
    Paused,
    AlreadyPaused,
}

impl PlaybackState {
    /// Id of the current video, paused or not
    pub fn current(&self) -> Option<&str> {
        match self {
            PlaybackState::Stopped => None,
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => Some(id),
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused(_))
    }

    /// Start `id`, returning whatever was playing before
    pub fn start(&mut self, id: &str) -> Option<String> {
        let previous = self.take();
        debug!("▶️ Playback started: {}", id);
        *self = PlaybackState::Playing(id.to_string());
        previous
    }

    pub fn stop(&mut self) -> Result<String, PlaybackError> {
        let stopped = self.take().ok_or(PlaybackError::NothingPlaying)?;
        debug!("⏹️ Playback stopped: {}", stopped);
        Ok(stopped)
    }

    /// Stop only if `id` is the current video, paused or not
    pub fn stop_if(&mut self, id: &str) -> bool {
        if self.current() != Some(id) {
            return false;
        }
        *self = PlaybackState::Stopped;
        debug!("⏹️ Playback stopped: {}", id);
        true
    }

    pub fn pause(&mut self) -> Result<(String, PauseStatus), PlaybackError> {
        match self {
            PlaybackState::Stopped => Err(PlaybackError::NothingPlaying),
            PlaybackState::Paused(id) => Ok((id.clone(), PauseStatus::AlreadyPaused)),
            PlaybackState::Playing(id) => {
                let id = id.clone();
                debug!("⏸️ Playback paused: {}", id);
                *self = PlaybackState::Paused(id.clone());
                Ok((id, PauseStatus::Paused))
            }
        }
    }

    pub fn resume(&mut self) -> Result<String, PlaybackError> {
        match self {
            PlaybackState::Stopped => Err(PlaybackError::NothingPlaying),
            PlaybackState::Playing(_) => Err(PlaybackError::NotPaused),
            PlaybackState::Paused(id) => {
                let id = id.clone();
                debug!("▶️ Playback resumed: {}", id);
                *self = PlaybackState::Playing(id.clone());
                Ok(id)
            }
        }
    }

    fn take(&mut self) -> Option<String> {
        match std::mem::take(self) {
            PlaybackState::Stopped => None,
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => Some(id),
        }
    }
}
