// Search over the library - by title substring or exact tag
// Flagged videos never show up in results

use crate::library::{Video, VideoLibrary};
use crate::moderation::FlagRegistry;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Case-insensitive substring of the title
    Title,
    /// Case-insensitive exact match against any tag
    Tag,
}

/// Matches sorted by title; position `i` is shown as number `i + 1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub term: String,
    pub matches: Vec<Video>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// (number, video) pairs, numbered from 1
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Video)> + '_ {
        self.matches.iter().enumerate().map(|(idx, video)| (idx + 1, video))
    }

    /// Video behind a selection, if it points at a listed result
    pub fn pick(&self, selection: Selection) -> Option<&Video> {
        match selection {
            Selection::Number(n) if n >= 1 => self.matches.get(n - 1),
            _ => None,
        }
    }
}

/// What the user answered after seeing the results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Number(usize),
    Nothing,
}

impl Selection {
    /// Only the first word counts; anything but a positive integer there means "no"
    pub fn parse(input: &str) -> Self {
        let first = input.split_whitespace().next().unwrap_or_default();
        match first.parse::<usize>() {
            Ok(n) if n > 0 => Selection::Number(n),
            _ => Selection::Nothing,
        }
    }
}

pub fn search(
    library: &VideoLibrary,
    flags: &FlagRegistry,
    term: &str,
    mode: SearchMode,
) -> SearchResults {
    let needle = term.to_lowercase();

    let matches: Vec<Video> = library
        .sorted_by_title()
        .into_iter()
        .filter(|video| !flags.is_flagged(&video.id))
        .filter(|video| match mode {
            SearchMode::Title => video.title.to_lowercase().contains(&needle),
            SearchMode::Tag => video.has_tag(&needle),
        })
        .cloned()
        .collect();

    debug!("🔍 {:?} search for '{}': {} matches", mode, term, matches.len());

    SearchResults {
        term: term.to_string(),
        matches,
    }
}
