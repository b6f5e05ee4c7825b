// Interactive shell - reads commands, drives the player, prints what happened
// Generic over the reader/writer so tests can script a whole session

pub mod command;
pub mod render;

pub use command::{Command, CommandError, HELP_TEXT};

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use crate::config::ShellConfig;
use crate::player::VideoPlayer;
use crate::search::{SearchMode, Selection};

const GREETING: &str = "Hello and welcome to vidshelf, what would you like to do?";
const GREETING_HINT: &str = "Enter HELP for list of available commands or EXIT to terminate.";
const FAREWELL: &str = "vidshelf has now terminated its execution. Thank you and goodbye!";

pub struct Shell<R, W> {
    player: VideoPlayer,
    input: R,
    output: W,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(player: VideoPlayer, input: R, output: W, config: ShellConfig) -> Self {
        Self {
            player,
            input,
            output,
            config,
        }
    }

    /// Run until EXIT or end of input
    pub fn run(&mut self) -> Result<()> {
        if self.config.greeting {
            self.print(&[GREETING, GREETING_HINT])?;
        }

        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("End of input, leaving shell");
                break;
            };

            match Command::parse(&line) {
                Ok(None) => continue,
                Ok(Some(Command::Exit)) => break,
                Ok(Some(command)) => self.execute(command)?,
                Err(e) => {
                    warn!("Rejected input {:?}: {}", line.trim(), e);
                    self.print(&[render::INVALID_COMMAND])?;
                }
            }
        }

        self.print(&[FAREWELL])?;
        info!("Shell closed");
        Ok(())
    }

    /// Run one command and print its outcome
    pub fn execute(&mut self, command: Command) -> Result<()> {
        debug!("Executing {:?}", command);

        let lines = match command {
            Command::NumberOfVideos => render::video_count(self.player.video_count()),
            Command::ShowAllVideos => render::video_list(&self.player.list_videos()),
            Command::Play(id) => render::play(&self.player.play(&id)),
            Command::Stop => render::stop(&self.player.stop()),
            Command::PlayRandom => render::play(&self.player.play_random()),
            Command::Pause => render::pause(&self.player.pause()),
            Command::Continue => render::resume(&self.player.resume()),
            Command::ShowPlaying => render::now_playing(&self.player.now_playing()),
            Command::CreatePlaylist(name) => render::create_playlist(&self.player.create_playlist(&name)),
            Command::AddToPlaylist { playlist, video } => {
                render::add_to_playlist(&playlist, &self.player.add_to_playlist(&playlist, &video))
            }
            Command::ShowAllPlaylists => render::list_playlists(&self.player.list_playlists()),
            Command::ShowPlaylist(name) => render::show_playlist(&name, &self.player.show_playlist(&name)),
            Command::RemoveFromPlaylist { playlist, video } => {
                render::remove_from_playlist(&playlist, &self.player.remove_from_playlist(&playlist, &video))
            }
            Command::ClearPlaylist(name) => render::clear_playlist(&name, &self.player.clear_playlist(&name)),
            Command::DeletePlaylist(name) => render::delete_playlist(&name, &self.player.delete_playlist(&name)),
            Command::SearchVideos(term) => return self.search(&term, SearchMode::Title),
            Command::SearchVideosWithTag(tag) => return self.search(&tag, SearchMode::Tag),
            Command::FlagVideo { video, reason } => render::flag(&self.player.flag(&video, reason.as_deref())),
            Command::AllowVideo(video) => render::unflag(&self.player.unflag(&video)),
            Command::Help => vec![HELP_TEXT.to_string()],
            Command::Exit => Vec::new(),
        };

        self.print(&lines)
    }

    // Results first, then one blocking read for the selection
    fn search(&mut self, term: &str, mode: SearchMode) -> Result<()> {
        let results = self.player.search(term, mode);
        self.print(&render::search_results(&results))?;
        if results.is_empty() {
            return Ok(());
        }

        let answer = self.read_line()?.unwrap_or_default();
        if let Some(played) = self.player.play_selection(&results, Selection::parse(&answer)) {
            self.print(&render::play(&played))?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn print<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<()> {
        for line in lines {
            writeln!(self.output, "{}", line.as_ref())?;
        }
        Ok(())
    }
}
