// VideoPlayer - the one stateful controller
// Every command goes through here; it owns the library, flags, playlists and playback state
// and hands back structured outcomes for the shell to render.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::library::{Video, VideoLibrary};
use crate::moderation::{FlagError, FlagRegistry, ListedVideo, UnflagError};
use crate::playback::{PauseStatus, PlayError, PlaybackError, PlaybackState};
use crate::playlist::{PlaylistError, PlaylistStore, PlaylistView};
use crate::search::{self, SearchMode, SearchResults, Selection};

/// A successful play: what got stopped to make room, and what started
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub stopped: Option<Video>,
    pub started: Video,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub video: Video,
    pub paused: bool,
}

/// A successful flag; `stopped` is set when the flagged video was the current one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagOutcome {
    pub video: Video,
    pub reason: String,
    pub stopped: Option<Video>,
}

/// Playlist mutation result: the stored playlist name plus the affected video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistChange {
    pub playlist: String,
    pub video: Video,
}

pub struct VideoPlayer {
    library: VideoLibrary,
    flags: FlagRegistry,
    playlists: PlaylistStore,
    playback: PlaybackState,
}

impl VideoPlayer {
    pub fn new(library: VideoLibrary) -> Self {
        info!("Video player ready with {} videos", library.len());
        Self {
            library,
            flags: FlagRegistry::new(),
            playlists: PlaylistStore::new(),
            playback: PlaybackState::default(),
        }
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn video_count(&self) -> usize {
        self.library.len()
    }

    /// Every video sorted by title, flagged ones annotated
    pub fn list_videos(&self) -> Vec<ListedVideo> {
        self.library
            .sorted_by_title()
            .into_iter()
            .map(|video| self.flags.annotate(video))
            .collect()
    }

    // Playback

    pub fn play(&mut self, id: &str) -> Result<PlayOutcome, PlayError> {
        if let Some(reason) = self.flags.reason_for(id) {
            return Err(PlayError::Flagged {
                reason: reason.to_string(),
            });
        }
        let started = self.library.find_by_id(id).ok_or(PlayError::NotFound)?.clone();

        let stopped = self
            .playback
            .start(&started.id)
            .and_then(|previous| self.library.find_by_id(&previous).cloned());

        info!("Playing video: {}", started.id);
        Ok(PlayOutcome { stopped, started })
    }

    pub fn play_random(&mut self) -> Result<PlayOutcome, PlayError> {
        self.play_random_with(&mut rand::thread_rng())
    }

    /// Pick uniformly among unflagged videos using `rng`
    pub fn play_random_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<PlayOutcome, PlayError> {
        let candidates: Vec<&str> = self
            .library
            .all_videos()
            .iter()
            .filter(|video| !self.flags.is_flagged(&video.id))
            .map(|video| video.id.as_str())
            .collect();

        let id = candidates
            .choose(rng)
            .map(|id| id.to_string())
            .ok_or(PlayError::NoVideosAvailable)?;

        debug!("🎲 Random pick: {} of {} candidates", id, candidates.len());
        self.play(&id)
    }

    pub fn stop(&mut self) -> Result<Video, PlaybackError> {
        let id = self.playback.stop()?;
        info!("Stopped video: {}", id);
        self.resolve(&id)
    }

    pub fn pause(&mut self) -> Result<(Video, PauseStatus), PlaybackError> {
        let (id, status) = self.playback.pause()?;
        Ok((self.resolve(&id)?, status))
    }

    pub fn resume(&mut self) -> Result<Video, PlaybackError> {
        let id = self.playback.resume()?;
        self.resolve(&id)
    }

    pub fn now_playing(&self) -> Result<NowPlaying, PlaybackError> {
        let id = self.playback.current().ok_or(PlaybackError::NothingPlaying)?;
        Ok(NowPlaying {
            video: self.resolve(id)?,
            paused: self.playback.is_paused(),
        })
    }

    // Playback only ever holds library ids; an id the library lacks counts as nothing playing
    fn resolve(&self, id: &str) -> Result<Video, PlaybackError> {
        self.library.find_by_id(id).cloned().ok_or(PlaybackError::NothingPlaying)
    }

    // Moderation

    /// Flag a video; flagging the current video stops it first
    pub fn flag(&mut self, id: &str, reason: Option<&str>) -> Result<FlagOutcome, FlagError> {
        let video = self.flags.flag(&self.library, id, reason)?.clone();
        let reason = self.flags.reason_for(&video.id).unwrap_or_default().to_string();

        let stopped = self.playback.stop_if(&video.id).then(|| video.clone());
        if stopped.is_some() {
            info!("Stopped flagged video: {}", video.id);
        }

        Ok(FlagOutcome { video, reason, stopped })
    }

    pub fn unflag(&mut self, id: &str) -> Result<Video, UnflagError> {
        self.flags.unflag(&self.library, id).cloned()
    }

    // Playlists

    /// Returns the stored name
    pub fn create_playlist(&mut self, name: &str) -> Result<String, PlaylistError> {
        self.playlists.create(name).map(|playlist| playlist.name.clone())
    }

    pub fn add_to_playlist(&mut self, name: &str, id: &str) -> Result<PlaylistChange, PlaylistError> {
        let (playlist, video) = self.playlists.add_video(&self.library, &self.flags, name, id)?;
        Ok(PlaylistChange {
            playlist,
            video: video.clone(),
        })
    }

    pub fn remove_from_playlist(&mut self, name: &str, id: &str) -> Result<PlaylistChange, PlaylistError> {
        let (playlist, video) = self.playlists.remove_video(&self.library, name, id)?;
        Ok(PlaylistChange {
            playlist,
            video: video.clone(),
        })
    }

    pub fn clear_playlist(&mut self, name: &str) -> Result<String, PlaylistError> {
        self.playlists.clear(name)
    }

    pub fn delete_playlist(&mut self, name: &str) -> Result<String, PlaylistError> {
        self.playlists.delete(name)
    }

    pub fn list_playlists(&self) -> Vec<String> {
        self.playlists.list()
    }

    pub fn show_playlist(&self, name: &str) -> Result<PlaylistView, PlaylistError> {
        self.playlists.show(&self.library, &self.flags, name)
    }

    // Search

    pub fn search(&self, term: &str, mode: SearchMode) -> SearchResults {
        search::search(&self.library, &self.flags, term, mode)
    }

    /// Follow-up to a search. Out-of-range or missing selections do nothing.
    pub fn play_selection(
        &mut self,
        results: &SearchResults,
        selection: Selection,
    ) -> Option<Result<PlayOutcome, PlayError>> {
        let id = results.pick(selection)?.id.clone();
        debug!("🔍 Selected search result: {}", id);
        Some(self.play(&id))
    }
}
