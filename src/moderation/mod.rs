// Moderation - which videos are flagged and why
// A flagged video can't be played or added to a playlist until it's allowed again

use crate::library::{Video, VideoLibrary};
use std::collections::HashMap;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagError {
    #[error("Video is already flagged")]
    AlreadyFlagged,
    #[error("Video does not exist")]
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnflagError {
    #[error("Video does not exist")]
    NotFound,
    #[error("Video is not flagged")]
    NotFlagged,
}

/// A video as it appears in a listing, with its flag reason if it has one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedVideo {
    pub video: Video,
    pub flag_reason: Option<String>,
}

/// Flagged video id -> reason. Presence of a key means flagged.
#[derive(Debug, Default)]
pub struct FlagRegistry {
    flagged: HashMap<String, String>,
}

impl FlagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag `id` with `reason` (blank or missing reasons become "Not supplied").
    /// The already-flagged check wins over the catalog check.
    pub fn flag<'a>(
        &mut self,
        library: &'a VideoLibrary,
        id: &str,
        reason: Option<&str>,
    ) -> Result<&'a Video, FlagError> {
        if self.flagged.contains_key(id) {
            return Err(FlagError::AlreadyFlagged);
        }
        let video = library.find_by_id(id).ok_or(FlagError::NotFound)?;

        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_FLAG_REASON);
        self.flagged.insert(video.id.clone(), reason.to_string());
        info!("Flagged video '{}' (reason: {})", video.id, reason);
        Ok(video)
    }

    pub fn unflag<'a>(&mut self, library: &'a VideoLibrary, id: &str) -> Result<&'a Video, UnflagError> {
        let video = library.find_by_id(id).ok_or(UnflagError::NotFound)?;
        if self.flagged.remove(id).is_none() {
            return Err(UnflagError::NotFlagged);
        }
        info!("Removed flag from video '{}'", video.id);
        Ok(video)
    }

    pub fn reason_for(&self, id: &str) -> Option<&str> {
        self.flagged.get(id).map(String::as_str)
    }

    pub fn is_flagged(&self, id: &str) -> bool {
        self.flagged.contains_key(id)
    }

    pub fn annotate(&self, video: &Video) -> ListedVideo {
        ListedVideo {
            video: video.clone(),
            flag_reason: self.reason_for(&video.id).map(str::to_string),
        }
    }

    pub fn len(&self) -> usize {
        self.flagged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flagged.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> VideoLibrary {
        VideoLibrary::new(vec![Video::new("amazing_cats", "Amazing Cats", vec!["cat".into()])]).unwrap()
    }

    #[test]
    fn test_flag_and_unflag() {
        let library = library();
        let mut registry = FlagRegistry::new();

        let video = registry.flag(&library, "amazing_cats", Some("spam")).unwrap();
        assert_eq!(video.title, "Amazing Cats");
        assert!(registry.is_flagged("amazing_cats"));
        assert_eq!(registry.reason_for("amazing_cats"), Some("spam"));

        let listed = registry.annotate(library.find_by_id("amazing_cats").unwrap());
        assert_eq!(listed.flag_reason.as_deref(), Some("spam"));

        registry.unflag(&library, "amazing_cats").unwrap();
        assert!(!registry.is_flagged("amazing_cats"));
        assert_eq!(registry.reason_for("amazing_cats"), None);
    }

    #[test]
    fn test_flag_is_idempotent() {
        let library = library();
        let mut registry = FlagRegistry::new();

        registry.flag(&library, "amazing_cats", Some("spam")).unwrap();
        let err = registry.flag(&library, "amazing_cats", Some("other")).unwrap_err();
        assert_eq!(err, FlagError::AlreadyFlagged);
        assert_eq!(registry.reason_for("amazing_cats"), Some("spam"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_default_reason() {
        let library = library();
        let mut registry = FlagRegistry::new();

        registry.flag(&library, "amazing_cats", Some("   ")).unwrap();
        assert_eq!(registry.reason_for("amazing_cats"), Some(DEFAULT_FLAG_REASON));
    }

    #[test]
    fn test_unknown_and_unflagged_videos() {
        let library = library();
        let mut registry = FlagRegistry::new();

        assert_eq!(registry.flag(&library, "missing", None).unwrap_err(), FlagError::NotFound);
        assert_eq!(registry.unflag(&library, "missing").unwrap_err(), UnflagError::NotFound);
        assert_eq!(registry.unflag(&library, "amazing_cats").unwrap_err(), UnflagError::NotFlagged);
        assert!(registry.is_empty());
    }
}
