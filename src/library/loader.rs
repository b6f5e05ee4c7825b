use super::{Video, VideoLibrary};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

const BUILTIN_CATALOG: &str = include_str!("../../data/videos.txt");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected `Title | id | tags`, got {content:?}")]
    Malformed { line: usize, content: String },
    #[error("line {line}: {field} must not be empty")]
    MissingField { line: usize, field: &'static str },
    #[error("entry {entry}: {field} must not be empty")]
    EmptyEntry { entry: usize, field: &'static str },
    #[error("duplicate video id: {0}")]
    DuplicateId(String),
    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads catalogs from the pipe-separated text format or a JSON array
#[derive(Debug, Clone, Default)]
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn new() -> Self {
        Self
    }

    /// The catalog shipped with the binary
    pub fn builtin(&self) -> Result<VideoLibrary, CatalogError> {
        self.parse_text(BUILTIN_CATALOG)
    }

    /// Load from `path`, or fall back to the built-in catalog
    pub fn load(&self, path: Option<&Path>) -> Result<VideoLibrary, CatalogError> {
        match path {
            Some(path) => self.load_file(path),
            None => {
                debug!("No catalog configured, using built-in catalog");
                self.builtin()
            }
        }
    }

    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<VideoLibrary, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

        let library = if is_json {
            self.parse_json(&content)?
        } else {
            self.parse_text(&content)?
        };

        info!("Loaded {} videos from {}", library.len(), path.display());
        Ok(library)
    }

    /// One video per line: `Title | id | tag1, tag2`. Blank lines and `//` comments are skipped.
    pub fn parse_text(&self, content: &str) -> Result<VideoLibrary, CatalogError> {
        let mut videos = Vec::new();

        for (idx, raw) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with("//") {
                continue;
            }

            let fields: Vec<&str> = line.split('|').map(str::trim).collect();
            if fields.len() < 2 || fields.len() > 3 {
                return Err(CatalogError::Malformed {
                    line: line_no,
                    content: raw.to_string(),
                });
            }

            let (title, id) = (fields[0], fields[1]);
            if title.is_empty() {
                return Err(CatalogError::MissingField { line: line_no, field: "title" });
            }
            if id.is_empty() {
                return Err(CatalogError::MissingField { line: line_no, field: "id" });
            }

            let tags = fields
                .get(2)
                .map(|tags| {
                    tags.split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();

            videos.push(Video::new(id, title, tags));
        }

        VideoLibrary::new(videos)
    }

    pub fn parse_json(&self, content: &str) -> Result<VideoLibrary, CatalogError> {
        let videos: Vec<Video> = serde_json::from_str(content)?;
        let mut normalized = Vec::with_capacity(videos.len());

        for (idx, video) in videos.into_iter().enumerate() {
            let (id, title) = (video.id.trim(), video.title.trim());
            if title.is_empty() {
                return Err(CatalogError::EmptyEntry { entry: idx + 1, field: "title" });
            }
            if id.is_empty() {
                return Err(CatalogError::EmptyEntry { entry: idx + 1, field: "id" });
            }
            normalized.push(Video::new(id, title, video.tags));
        }

        VideoLibrary::new(normalized)
    }
}
