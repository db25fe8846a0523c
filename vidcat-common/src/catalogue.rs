//! Video catalogue
//!
//! The catalogue is the fixed set of videos a session works against. It is
//! supplied from outside the session and only its moderation state changes.

use crate::video::Video;
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Lookup interface over a fixed set of videos
pub trait Catalogue {
    /// All videos, in catalogue order
    fn all_videos(&self) -> &[Video];

    /// Find a video by identifier
    fn find(&self, id: &str) -> Option<&Video>;

    /// Find a video by identifier for moderation changes
    fn find_mut(&mut self, id: &str) -> Option<&mut Video>;

    fn len(&self) -> usize {
        self.all_videos().len()
    }

    fn is_empty(&self) -> bool {
        self.all_videos().is_empty()
    }
}

impl<C: Catalogue + ?Sized> Catalogue for &mut C {
    fn all_videos(&self) -> &[Video] {
        (**self).all_videos()
    }

    fn find(&self, id: &str) -> Option<&Video> {
        (**self).find(id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Video> {
        (**self).find_mut(id)
    }
}

/// In-memory catalogue with identifier index
#[derive(Debug, Clone, Default)]
pub struct VideoLibrary {
    videos: Vec<Video>,
    index: HashMap<String, usize>,
}

/// On-disk catalogue layout
#[derive(Debug, Deserialize)]
struct CatalogueFile {
    #[serde(default)]
    videos: Vec<CatalogueEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogueEntry {
    id: String,
    title: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl VideoLibrary {
    /// Build a library, rejecting duplicate identifiers
    pub fn new(videos: Vec<Video>) -> Result<Self> {
        let mut index = HashMap::with_capacity(videos.len());
        for (position, video) in videos.iter().enumerate() {
            if index.insert(video.id().to_string(), position).is_some() {
                return Err(Error::Catalogue(format!(
                    "duplicate video id: {}",
                    video.id()
                )));
            }
        }

        Ok(Self { videos, index })
    }

    /// Parse a TOML catalogue
    ///
    /// ```toml
    /// [[videos]]
    /// id = "amazing_cats_video_id"
    /// title = "Amazing Cats"
    /// tags = ["#cat", "#animal"]
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogueFile = toml::from_str(content)?;

        let videos = file
            .videos
            .into_iter()
            .map(|entry| {
                let id = entry.id.trim().to_string();
                if id.is_empty() {
                    return Err(Error::Catalogue(format!(
                        "video '{}' has an empty id",
                        entry.title
                    )));
                }
                Ok(Video::new(id, entry.title, entry.tags))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(videos)
    }

    /// Load a TOML catalogue file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Catalogue(format!(
                "catalogue file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let library = Self::from_toml_str(&content)?;

        info!(
            "Loaded {} videos from {}",
            library.len(),
            path.display()
        );
        Ok(library)
    }
}

impl Catalogue for VideoLibrary {
    fn all_videos(&self) -> &[Video] {
        &self.videos
    }

    fn find(&self, id: &str) -> Option<&Video> {
        self.index.get(id).map(|&i| &self.videos[i])
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Video> {
        match self.index.get(id) {
            Some(&i) => Some(&mut self.videos[i]),
            None => {
                debug!(video_id = id, "Video not in catalogue");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_preserves_order_and_indexes() {
        let library = VideoLibrary::new(vec![
            Video::new("b1", "Bravo", ["#b"]),
            Video::new("a1", "Alpha", ["#a"]),
        ])
        .unwrap();

        let ids: Vec<&str> = library.all_videos().iter().map(|v| v.id()).collect();
        assert_eq!(ids, vec!["b1", "a1"]);
        assert_eq!(library.find("a1").unwrap().title(), "Alpha");
        assert!(library.find("zz").is_none());
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn test_library_rejects_duplicate_ids() {
        let result = VideoLibrary::new(vec![
            Video::new("a1", "Alpha", ["#a"]),
            Video::new("a1", "Alpha again", ["#a"]),
        ]);
        assert!(matches!(result, Err(Error::Catalogue(_))));
    }

    #[test]
    fn test_find_mut_changes_moderation() {
        let mut library = VideoLibrary::new(vec![Video::new("a1", "Alpha", ["#a"])]).unwrap();
        library.find_mut("a1").unwrap().flag("spam");
        assert!(library.find("a1").unwrap().is_flagged());
    }

    #[test]
    fn test_mut_ref_is_a_catalogue() {
        fn count<C: Catalogue>(c: C) -> usize {
            c.len()
        }

        let mut library = VideoLibrary::new(vec![Video::new("a1", "Alpha", ["#a"])]).unwrap();
        assert_eq!(count(&mut library), 1);
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_from_toml_str() {
        let library = VideoLibrary::from_toml_str(
            r##"
            [[videos]]
            id = "funny_dogs_video_id"
            title = "Funny Dogs"
            tags = ["#dog", "#animal"]

            [[videos]]
            id = "nothing_video_id"
            title = "Video about nothing"
            "##,
        )
        .unwrap();

        assert_eq!(library.len(), 2);
        assert_eq!(
            library.find("funny_dogs_video_id").unwrap().tags(),
            &["#dog".to_string(), "#animal".to_string()]
        );
        assert!(library.find("nothing_video_id").unwrap().tags().is_empty());
    }

    #[test]
    fn test_from_toml_str_keeps_title_verbatim() {
        let library = VideoLibrary::from_toml_str(
            r#"
            [[videos]]
            id = "padded"
            title = "  Padded Title "
            "#,
        )
        .unwrap();
        assert_eq!(library.find("padded").unwrap().title(), "  Padded Title ");
    }

    #[test]
    fn test_from_toml_str_rejects_empty_id() {
        let result = VideoLibrary::from_toml_str(
            r#"
            [[videos]]
            id = "  "
            title = "Nameless"
            "#,
        );
        assert!(matches!(result, Err(Error::Catalogue(_))));
    }

    #[test]
    fn test_from_toml_str_malformed() {
        let result = VideoLibrary::from_toml_str("[[videos]]\ntitle = 3\n");
        assert!(matches!(result, Err(Error::Toml(_))));
    }
}
