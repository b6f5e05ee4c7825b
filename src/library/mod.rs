// Video library - the fixed catalog every other module reads from
// Loaded once at startup, never mutated afterwards

pub mod loader;

pub use loader::{CatalogError, CatalogLoader};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A single catalog entry. Immutable once the library is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Video {
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags: tags.into_iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    /// Exact, case-insensitive tag match
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| *t == wanted)
    }
}

// "Title (id) [tag1 tag2]" - the form every listing uses
impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}

/// Read-only provider of videos by id
#[derive(Debug, Clone, Default)]
pub struct VideoLibrary {
    videos: Vec<Video>,
    index: HashMap<String, usize>,
}

impl VideoLibrary {
    /// Build a library, rejecting duplicate or blank ids
    pub fn new(videos: Vec<Video>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(videos.len());

        for (idx, video) in videos.iter().enumerate() {
            if video.id.trim().is_empty() {
                return Err(CatalogError::EmptyEntry { entry: idx + 1, field: "id" });
            }
            if index.insert(video.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateId(video.id.clone()));
            }
        }

        Ok(Self { videos, index })
    }

    pub fn all_videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Video> {
        self.index.get(id).map(|&idx| &self.videos[idx])
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// All videos ordered by title, the order listings and search present them in
    pub fn sorted_by_title(&self) -> Vec<&Video> {
        let mut sorted: Vec<&Video> = self.videos.iter().collect();
        sorted.sort_by(|a, b| a.title.cmp(&b.title));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VideoLibrary {
        VideoLibrary::new(vec![
            Video::new("funny_dogs", "Funny Dogs", vec!["dog".into(), "animal".into()]),
            Video::new("amazing_cats", "Amazing Cats", vec!["cat".into(), "animal".into()]),
        ])
        .unwrap()
    }

    #[test]
    fn test_find_by_id() {
        let library = sample();
        assert_eq!(library.find_by_id("amazing_cats").unwrap().title, "Amazing Cats");
        assert!(library.find_by_id("Amazing Cats").is_none());
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn test_display_form() {
        let library = sample();
        let dogs = library.find_by_id("funny_dogs").unwrap();
        assert_eq!(dogs.to_string(), "Funny Dogs (funny_dogs) [dog animal]");

        let bare = Video::new("nothing", "Video about nothing", Vec::new());
        assert_eq!(bare.to_string(), "Video about nothing (nothing) []");
    }

    #[test]
    fn test_sorted_by_title() {
        let library = sample();
        let titles: Vec<&str> = library.sorted_by_title().iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["Amazing Cats", "Funny Dogs"]);
    }

    #[test]
    fn test_tags_are_lowercased_and_matched_exactly() {
        let video = Video::new("x", "X", vec!["Cat".into()]);
        assert!(video.has_tag("CAT"));
        assert!(!video.has_tag("ca"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = VideoLibrary::new(vec![
            Video::new("a", "First", Vec::new()),
            Video::new("a", "Second", Vec::new()),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_blank_id_reports_entry() {
        let result = VideoLibrary::new(vec![
            Video::new("a", "First", Vec::new()),
            Video::new(" ", "Second", Vec::new()),
        ]);
        assert!(matches!(result, Err(CatalogError::EmptyEntry { entry: 2, field: "id" })));
    }
}
