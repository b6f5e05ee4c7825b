use thiserror::Error;

/// One line of shell input, parsed. The first word is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    Stop,
    PlayRandom,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video: String },
    ShowAllPlaylists,
    ShowPlaylist(String),
    RemoveFromPlaylist { playlist: String, video: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo { video: String, reason: Option<String> },
    AllowVideo(String),
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("{command} needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
}

impl Command {
    /// Parse a line; blank lines give `Ok(None)`
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let arg = |idx: usize, command: &'static str, argument: &'static str| {
            args.get(idx)
                .map(|s| s.to_string())
                .ok_or(CommandError::MissingArgument { command, argument })
        };

        let command = match word.to_uppercase().as_str() {
            "NUMBER_OF_VIDEOS" => Command::NumberOfVideos,
            "SHOW_ALL_VIDEOS" => Command::ShowAllVideos,
            "PLAY" => Command::Play(arg(0, "PLAY", "video id")?),
            "STOP" => Command::Stop,
            "PLAY_RANDOM" => Command::PlayRandom,
            "PAUSE" => Command::Pause,
            "CONTINUE" => Command::Continue,
            "SHOW_PLAYING" => Command::ShowPlaying,
            "CREATE_PLAYLIST" => Command::CreatePlaylist(arg(0, "CREATE_PLAYLIST", "playlist name")?),
            "ADD_TO_PLAYLIST" => Command::AddToPlaylist {
                playlist: arg(0, "ADD_TO_PLAYLIST", "playlist name")?,
                video: arg(1, "ADD_TO_PLAYLIST", "video id")?,
            },
            "SHOW_ALL_PLAYLISTS" => Command::ShowAllPlaylists,
            "SHOW_PLAYLIST" => Command::ShowPlaylist(arg(0, "SHOW_PLAYLIST", "playlist name")?),
            "REMOVE_FROM_PLAYLIST" => Command::RemoveFromPlaylist {
                playlist: arg(0, "REMOVE_FROM_PLAYLIST", "playlist name")?,
                video: arg(1, "REMOVE_FROM_PLAYLIST", "video id")?,
            },
            "CLEAR_PLAYLIST" => Command::ClearPlaylist(arg(0, "CLEAR_PLAYLIST", "playlist name")?),
            "DELETE_PLAYLIST" => Command::DeletePlaylist(arg(0, "DELETE_PLAYLIST", "playlist name")?),
            "SEARCH_VIDEOS" => Command::SearchVideos(arg(0, "SEARCH_VIDEOS", "search term")?),
            "SEARCH_VIDEOS_WITH_TAG" => Command::SearchVideosWithTag(arg(0, "SEARCH_VIDEOS_WITH_TAG", "tag")?),
            "FLAG_VIDEO" => Command::FlagVideo {
                video: arg(0, "FLAG_VIDEO", "video id")?,
                // reason is the rest of the line
                reason: (args.len() > 1).then(|| args[1..].join(" ")),
            },
            "ALLOW_VIDEO" => Command::AllowVideo(arg(0, "ALLOW_VIDEO", "video id")?),
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };

        Ok(Some(command))
    }
}

pub const HELP_TEXT: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is playing now.
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";
