use std::collections::HashMap;
use thiserror::Error;
use tracing::info;

use crate::library::{Video, VideoLibrary};
use crate::moderation::{FlagRegistry, ListedVideo};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    #[error("A playlist with the same name already exists")]
    Duplicate,
    #[error("Playlist does not exist")]
    PlaylistNotFound,
    #[error("Video does not exist")]
    VideoNotFound,
    #[error("Video is currently flagged (reason: {reason})")]
    Flagged { reason: String },
    #[error("Video already added")]
    AlreadyAdded,
    #[error("Video is not in playlist")]
    NotInPlaylist,
}

/// A named, ordered set of distinct video ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub name: String,
    video_ids: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            video_ids: Vec::new(),
        }
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    /// Append a video; false if it's already there
    fn add_video(&mut self, video_id: &str) -> bool {
        if self.contains(video_id) {
            return false;
        }
        self.video_ids.push(video_id.to_string());
        true
    }

    /// Remove a video by id; false if it wasn't there
    fn remove_video(&mut self, video_id: &str) -> bool {
        if let Some(pos) = self.video_ids.iter().position(|id| id == video_id) {
            self.video_ids.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}

/// A playlist resolved against the library, ready to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistView {
    pub name: String,
    pub videos: Vec<ListedVideo>,
}

/// Owns every playlist, keyed by lowercased name
#[derive(Debug, Default)]
pub struct PlaylistStore {
    playlists: HashMap<String, Playlist>,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(name: &str) -> String {
        name.to_lowercase()
    }

    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&Self::key(name))
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Playlist, PlaylistError> {
        self.playlists
            .get_mut(&Self::key(name))
            .ok_or(PlaylistError::PlaylistNotFound)
    }

    /// Create a new playlist, keeping the caller's casing for display
    pub fn create(&mut self, name: &str) -> Result<&Playlist, PlaylistError> {
        let key = Self::key(name);
        if self.playlists.contains_key(&key) {
            return Err(PlaylistError::Duplicate);
        }

        info!("Created new playlist: '{}'", name);
        let playlist = self
            .playlists
            .entry(key)
            .or_insert_with(|| Playlist::new(name.to_string()));
        Ok(&*playlist)
    }

    /// Add a video to a playlist. Checks run flagged, playlist, video, membership.
    pub fn add_video<'a>(
        &mut self,
        library: &'a VideoLibrary,
        flags: &FlagRegistry,
        name: &str,
        video_id: &str,
    ) -> Result<(String, &'a Video), PlaylistError> {
        if let Some(reason) = flags.reason_for(video_id) {
            return Err(PlaylistError::Flagged {
                reason: reason.to_string(),
            });
        }
        let playlist = self.get_mut(name)?;
        let video = library.find_by_id(video_id).ok_or(PlaylistError::VideoNotFound)?;

        if !playlist.add_video(&video.id) {
            return Err(PlaylistError::AlreadyAdded);
        }
        info!("Added video '{}' to playlist '{}'", video.id, playlist.name);
        Ok((playlist.name.clone(), video))
    }

    pub fn remove_video<'a>(
        &mut self,
        library: &'a VideoLibrary,
        name: &str,
        video_id: &str,
    ) -> Result<(String, &'a Video), PlaylistError> {
        let playlist = self.get_mut(name)?;
        let video = library.find_by_id(video_id).ok_or(PlaylistError::VideoNotFound)?;

        if !playlist.remove_video(&video.id) {
            return Err(PlaylistError::NotInPlaylist);
        }
        info!("Removed video '{}' from playlist '{}'", video.id, playlist.name);
        Ok((playlist.name.clone(), video))
    }

    /// Empty a playlist but keep it around
    pub fn clear(&mut self, name: &str) -> Result<String, PlaylistError> {
        let playlist = self.get_mut(name)?;
        playlist.video_ids.clear();
        info!("Cleared playlist '{}'", playlist.name);
        Ok(playlist.name.clone())
    }

    pub fn delete(&mut self, name: &str) -> Result<String, PlaylistError> {
        let playlist = self
            .playlists
            .remove(&Self::key(name))
            .ok_or(PlaylistError::PlaylistNotFound)?;
        info!("Deleted playlist: '{}'", playlist.name);
        Ok(playlist.name)
    }

    /// Playlist names sorted case-insensitively
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<(&String, &Playlist)> = self.playlists.iter().collect();
        names.sort_by(|(a_key, a), (b_key, b)| a_key.cmp(b_key).then_with(|| a.name.cmp(&b.name)));
        names.into_iter().map(|(_, p)| p.name.clone()).collect()
    }

    pub fn show(
        &self,
        library: &VideoLibrary,
        flags: &FlagRegistry,
        name: &str,
    ) -> Result<PlaylistView, PlaylistError> {
        let playlist = self.get(name).ok_or(PlaylistError::PlaylistNotFound)?;
        let videos = playlist
            .video_ids
            .iter()
            .filter_map(|id| library.find_by_id(id))
            .map(|video| flags.annotate(video))
            .collect();

        Ok(PlaylistView {
            name: playlist.name.clone(),
            videos,
        })
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> VideoLibrary {
        VideoLibrary::new(vec![
            Video::new("amazing_cats", "Amazing Cats", vec!["cat".into(), "animal".into()]),
            Video::new("funny_dogs", "Funny Dogs", vec!["dog".into(), "animal".into()]),
        ])
        .unwrap()
    }

    #[test]
    fn test_create_is_case_insensitive() {
        let mut store = PlaylistStore::new();
        assert_eq!(store.create("Watch Later").unwrap().name, "Watch Later");
        assert_eq!(store.create("watch later").unwrap_err(), PlaylistError::Duplicate);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("WATCH LATER").unwrap().name, "Watch Later");
    }

    #[test]
    fn test_add_and_remove_round_trip() {
        let library = library();
        let flags = FlagRegistry::new();
        let mut store = PlaylistStore::new();
        store.create("Mix").unwrap();
        store.add_video(&library, &flags, "mix", "funny_dogs").unwrap();
        let before = store.get("mix").unwrap().clone();

        let (name, video) = store.add_video(&library, &flags, "MIX", "amazing_cats").unwrap();
        assert_eq!(name, "Mix");
        assert_eq!(video.title, "Amazing Cats");

        store.remove_video(&library, "mix", "amazing_cats").unwrap();
        assert_eq!(store.get("mix").unwrap(), &before);
    }

    #[test]
    fn test_add_failures_in_order() {
        let library = library();
        let mut flags = FlagRegistry::new();
        let mut store = PlaylistStore::new();

        flags.flag(&library, "amazing_cats", Some("spam")).unwrap();
        // flagged wins even when the playlist is missing
        assert_eq!(
            store.add_video(&library, &flags, "nope", "amazing_cats").unwrap_err(),
            PlaylistError::Flagged { reason: "spam".into() }
        );
        assert_eq!(
            store.add_video(&library, &flags, "nope", "missing").unwrap_err(),
            PlaylistError::PlaylistNotFound
        );

        store.create("mix").unwrap();
        assert_eq!(
            store.add_video(&library, &flags, "mix", "missing").unwrap_err(),
            PlaylistError::VideoNotFound
        );
        store.add_video(&library, &flags, "mix", "funny_dogs").unwrap();
        assert_eq!(
            store.add_video(&library, &flags, "mix", "funny_dogs").unwrap_err(),
            PlaylistError::AlreadyAdded
        );
    }

    #[test]
    fn test_remove_failures() {
        let library = library();
        let mut store = PlaylistStore::new();

        assert_eq!(
            store.remove_video(&library, "mix", "funny_dogs").unwrap_err(),
            PlaylistError::PlaylistNotFound
        );
        store.create("mix").unwrap();
        assert_eq!(
            store.remove_video(&library, "mix", "missing").unwrap_err(),
            PlaylistError::VideoNotFound
        );
        assert_eq!(
            store.remove_video(&library, "mix", "funny_dogs").unwrap_err(),
            PlaylistError::NotInPlaylist
        );
    }

    #[test]
    fn test_clear_keeps_playlist_delete_removes_it() {
        let library = library();
        let flags = FlagRegistry::new();
        let mut store = PlaylistStore::new();
        store.create("Mix").unwrap();
        store.add_video(&library, &flags, "mix", "funny_dogs").unwrap();

        assert_eq!(store.clear("MIX").unwrap(), "Mix");
        assert!(store.get("mix").unwrap().is_empty());

        assert_eq!(store.delete("mix").unwrap(), "Mix");
        assert!(store.get("mix").is_none());
        assert_eq!(store.clear("mix").unwrap_err(), PlaylistError::PlaylistNotFound);
        assert_eq!(store.delete("mix").unwrap_err(), PlaylistError::PlaylistNotFound);
    }

    #[test]
    fn test_list_sorted_case_insensitively() {
        let mut store = PlaylistStore::new();
        for name in ["b_list", "A_list", "c_List"] {
            store.create(name).unwrap();
        }
        assert_eq!(store.list(), vec!["A_list", "b_list", "c_List"]);
    }

    #[test]
    fn test_show_keeps_insertion_order_and_flags() {
        let library = library();
        let mut flags = FlagRegistry::new();
        let mut store = PlaylistStore::new();
        store.create("Mix").unwrap();
        store.add_video(&library, &flags, "mix", "funny_dogs").unwrap();
        store.add_video(&library, &flags, "mix", "amazing_cats").unwrap();
        flags.flag(&library, "amazing_cats", None).unwrap();

        let view = store.show(&library, &flags, "mix").unwrap();
        assert_eq!(view.name, "Mix");
        let ids: Vec<&str> = view.videos.iter().map(|v| v.video.id.as_str()).collect();
        assert_eq!(ids, vec!["funny_dogs", "amazing_cats"]);
        assert_eq!(view.videos[0].flag_reason, None);
        assert_eq!(view.videos[1].flag_reason.as_deref(), Some("Not supplied"));

        assert_eq!(store.show(&library, &flags, "other").unwrap_err(), PlaylistError::PlaylistNotFound);
    }
}
