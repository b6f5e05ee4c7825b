// vidshelf library - core modules for the terminal video catalog
// The player owns all state; the shell is just one way to drive it

pub mod config;     // settings and preferences
pub mod library;    // the video catalog and its loader
pub mod moderation; // flagged videos
pub mod playback;   // playing / paused / stopped
pub mod player;     // the controller every command goes through
pub mod playlist;   // named playlists
pub mod search;     // title and tag search
pub mod shell;      // command line interface

// Export the stuff other modules actually use
pub use config::Config;
pub use library::{CatalogLoader, Video, VideoLibrary};
pub use player::VideoPlayer;
pub use shell::Shell;
