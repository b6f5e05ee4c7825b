// Turns player outcomes into the lines the shell prints.
// Failures for a playlist that doesn't exist echo the name as typed;
// everything else uses the stored playlist name.

use crate::library::Video;
use crate::moderation::{FlagError, ListedVideo, UnflagError};
use crate::playback::{PauseStatus, PlayError, PlaybackError};
use crate::player::{FlagOutcome, NowPlaying, PlayOutcome, PlaylistChange};
use crate::playlist::{PlaylistError, PlaylistView};
use crate::search::SearchResults;

pub const INVALID_COMMAND: &str = "Please enter a valid command, type HELP for a list of available commands.";

fn listed(entry: &ListedVideo) -> String {
    match &entry.flag_reason {
        Some(reason) => format!("{} - FLAGGED (reason: {})", entry.video, reason),
        None => entry.video.to_string(),
    }
}

pub fn video_count(count: usize) -> Vec<String> {
    vec![format!("{} videos in the library", count)]
}

pub fn video_list(videos: &[ListedVideo]) -> Vec<String> {
    let mut lines = vec!["Here's a list of all available videos:".to_string()];
    lines.extend(videos.iter().map(listed));
    lines
}

pub fn play(result: &Result<PlayOutcome, PlayError>) -> Vec<String> {
    match result {
        Ok(outcome) => {
            let mut lines = Vec::new();
            if let Some(stopped) = &outcome.stopped {
                lines.push(format!("Stopping video: {}", stopped.title));
            }
            lines.push(format!("Playing video: {}", outcome.started.title));
            lines
        }
        Err(PlayError::NoVideosAvailable) => vec![PlayError::NoVideosAvailable.to_string()],
        Err(e) => vec![format!("Cannot play video: {}", e)],
    }
}

pub fn stop(result: &Result<Video, PlaybackError>) -> Vec<String> {
    match result {
        Ok(video) => vec![format!("Stopping video: {}", video.title)],
        Err(e) => vec![format!("Cannot stop video: {}", e)],
    }
}

pub fn pause(result: &Result<(Video, PauseStatus), PlaybackError>) -> Vec<String> {
    match result {
        Ok((video, PauseStatus::Paused)) => vec![format!("Pausing video: {}", video.title)],
        Ok((video, PauseStatus::AlreadyPaused)) => vec![format!("Video already paused: {}", video.title)],
        Err(e) => vec![format!("Cannot pause video: {}", e)],
    }
}

pub fn resume(result: &Result<Video, PlaybackError>) -> Vec<String> {
    match result {
        Ok(video) => vec![format!("Continuing video: {}", video.title)],
        Err(e) => vec![format!("Cannot continue video: {}", e)],
    }
}

pub fn now_playing(result: &Result<NowPlaying, PlaybackError>) -> Vec<String> {
    match result {
        Ok(now) if now.paused => vec![format!("Currently playing: {} - PAUSED", now.video)],
        Ok(now) => vec![format!("Currently playing: {}", now.video)],
        Err(e) => vec![e.to_string()],
    }
}

pub fn create_playlist(result: &Result<String, PlaylistError>) -> Vec<String> {
    match result {
        Ok(name) => vec![format!("Successfully created new playlist: {}", name)],
        Err(e) => vec![format!("Cannot create playlist: {}", e)],
    }
}

pub fn add_to_playlist(requested: &str, result: &Result<PlaylistChange, PlaylistError>) -> Vec<String> {
    match result {
        Ok(change) => vec![format!("Added video to {}: {}", change.playlist, change.video.title)],
        Err(e) => vec![format!("Cannot add video to {}: {}", requested, e)],
    }
}

pub fn list_playlists(names: &[String]) -> Vec<String> {
    if names.is_empty() {
        return vec!["No playlists exist yet".to_string()];
    }
    let mut lines = vec!["Showing all playlists:".to_string()];
    lines.extend(names.iter().cloned());
    lines
}

pub fn show_playlist(requested: &str, result: &Result<PlaylistView, PlaylistError>) -> Vec<String> {
    let view = match result {
        Ok(view) => view,
        Err(e) => return vec![format!("Cannot show playlist {}: {}", requested, e)],
    };

    let count = match view.videos.len() {
        1 => "1 video".to_string(),
        n => format!("{} videos", n),
    };
    let mut lines = vec![format!("Showing playlist: {} ({})", view.name, count)];

    if view.videos.is_empty() {
        lines.push("No videos here yet".to_string());
    } else {
        lines.extend(view.videos.iter().map(listed));
    }
    lines
}

pub fn remove_from_playlist(requested: &str, result: &Result<PlaylistChange, PlaylistError>) -> Vec<String> {
    match result {
        Ok(change) => vec![format!("Removed video from {}: {}", change.playlist, change.video.title)],
        Err(e) => vec![format!("Cannot remove video from {}: {}", requested, e)],
    }
}

pub fn clear_playlist(requested: &str, result: &Result<String, PlaylistError>) -> Vec<String> {
    match result {
        Ok(name) => vec![format!("Successfully removed all videos from {}", name)],
        Err(e) => vec![format!("Cannot clear playlist {}: {}", requested, e)],
    }
}

pub fn delete_playlist(requested: &str, result: &Result<String, PlaylistError>) -> Vec<String> {
    match result {
        Ok(name) => vec![format!("Deleted playlist: {}", name)],
        Err(e) => vec![format!("Cannot delete playlist {}: {}", requested, e)],
    }
}

/// Results plus the play-from-results question, or the no-results line
pub fn search_results(results: &SearchResults) -> Vec<String> {
    if results.is_empty() {
        return vec![format!("No search results for {}", results.term)];
    }

    let mut lines = vec![format!("Here are the results for {}:", results.term)];
    lines.extend(results.numbered().map(|(n, video)| format!("{}) {}", n, video)));
    lines.push("Would you like to play any of the above? If yes, specify the number of the video.".to_string());
    lines.push("If your answer is not a valid number, we will assume it's a no.".to_string());
    lines
}

pub fn flag(result: &Result<FlagOutcome, FlagError>) -> Vec<String> {
    match result {
        Ok(outcome) => {
            let mut lines = Vec::new();
            if let Some(stopped) = &outcome.stopped {
                lines.push(format!("Stopping video: {}", stopped.title));
            }
            lines.push(format!(
                "Successfully flagged video: {} (reason: {})",
                outcome.video.title, outcome.reason
            ));
            lines
        }
        Err(e) => vec![format!("Cannot flag video: {}", e)],
    }
}

pub fn unflag(result: &Result<Video, UnflagError>) -> Vec<String> {
    match result {
        Ok(video) => vec![format!("Successfully removed flag from video: {}", video.title)],
        Err(e) => vec![format!("Cannot remove flag from video: {}", e)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dogs() -> Video {
        Video::new("funny_dogs", "Funny Dogs", vec!["dog".into(), "animal".into()])
    }

    #[test]
    fn test_play_lines() {
        let outcome = Ok(PlayOutcome {
            stopped: Some(Video::new("amazing_cats", "Amazing Cats", Vec::new())),
            started: dogs(),
        });
        assert_eq!(play(&outcome), vec!["Stopping video: Amazing Cats", "Playing video: Funny Dogs"]);

        let flagged = Err(PlayError::Flagged { reason: "spam".into() });
        assert_eq!(play(&flagged), vec!["Cannot play video: Video is currently flagged (reason: spam)"]);
        assert_eq!(play(&Err(PlayError::NotFound)), vec!["Cannot play video: Video does not exist"]);
        assert_eq!(play(&Err(PlayError::NoVideosAvailable)), vec!["No videos available"]);
    }

    #[test]
    fn test_playback_lines() {
        assert_eq!(
            stop(&Err(PlaybackError::NothingPlaying)),
            vec!["Cannot stop video: No video is currently playing"]
        );
        assert_eq!(
            pause(&Ok((dogs(), PauseStatus::AlreadyPaused))),
            vec!["Video already paused: Funny Dogs"]
        );
        assert_eq!(
            resume(&Err(PlaybackError::NotPaused)),
            vec!["Cannot continue video: Video is not paused"]
        );
        assert_eq!(
            now_playing(&Ok(NowPlaying { video: dogs(), paused: true })),
            vec!["Currently playing: Funny Dogs (funny_dogs) [dog animal] - PAUSED"]
        );
        assert_eq!(
            now_playing(&Err(PlaybackError::NothingPlaying)),
            vec!["No video is currently playing"]
        );
    }

    #[test]
    fn test_show_playlist_lines() {
        let view = Ok(PlaylistView {
            name: "My_Playlist".into(),
            videos: vec![ListedVideo {
                video: dogs(),
                flag_reason: Some("dont_like_dogs".into()),
            }],
        });
        assert_eq!(
            show_playlist("my_playlist", &view),
            vec![
                "Showing playlist: My_Playlist (1 video)",
                "Funny Dogs (funny_dogs) [dog animal] - FLAGGED (reason: dont_like_dogs)",
            ]
        );

        let empty = Ok(PlaylistView {
            name: "Empty".into(),
            videos: Vec::new(),
        });
        assert_eq!(
            show_playlist("empty", &empty),
            vec!["Showing playlist: Empty (0 videos)", "No videos here yet"]
        );
        assert_eq!(
            show_playlist("nope", &Err(PlaylistError::PlaylistNotFound)),
            vec!["Cannot show playlist nope: Playlist does not exist"]
        );
    }

    #[test]
    fn test_playlist_failures_echo_requested_name() {
        assert_eq!(
            add_to_playlist("another_playlist", &Err(PlaylistError::PlaylistNotFound)),
            vec!["Cannot add video to another_playlist: Playlist does not exist"]
        );
        assert_eq!(
            remove_from_playlist("mix", &Err(PlaylistError::NotInPlaylist)),
            vec!["Cannot remove video from mix: Video is not in playlist"]
        );
        assert_eq!(
            create_playlist(&Err(PlaylistError::Duplicate)),
            vec!["Cannot create playlist: A playlist with the same name already exists"]
        );
        assert_eq!(list_playlists(&[]), vec!["No playlists exist yet"]);
    }

    #[test]
    fn test_flag_lines() {
        let outcome = Ok(FlagOutcome {
            video: dogs(),
            reason: "Not supplied".into(),
            stopped: Some(dogs()),
        });
        assert_eq!(
            flag(&outcome),
            vec![
                "Stopping video: Funny Dogs",
                "Successfully flagged video: Funny Dogs (reason: Not supplied)",
            ]
        );
        assert_eq!(
            flag(&Err(FlagError::AlreadyFlagged)),
            vec!["Cannot flag video: Video is already flagged"]
        );
        assert_eq!(
            unflag(&Err(UnflagError::NotFlagged)),
            vec!["Cannot remove flag from video: Video is not flagged"]
        );
    }
}
