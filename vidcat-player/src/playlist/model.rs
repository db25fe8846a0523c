//! Named playlist and its case-insensitive key

use std::fmt;

/// Case-insensitive playlist identity (uppercased name)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlaylistKey(String);

impl PlaylistKey {
    pub fn new(name: &str) -> Self {
        Self(name.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, duplicate-free list of video ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    /// Name with the casing given at creation
    name: String,
    videos: Vec<String>,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            videos: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member ids in insertion order
    pub fn video_ids(&self) -> &[String] {
        &self.videos
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.videos.iter().any(|id| id == video_id)
    }

    /// Append a video; returns false if it is already a member
    pub fn push(&mut self, video_id: &str) -> bool {
        if self.contains(video_id) {
            return false;
        }
        self.videos.push(video_id.to_string());
        true
    }

    /// Remove a video; returns false if it was not a member
    pub fn remove(&mut self, video_id: &str) -> bool {
        match self.videos.iter().position(|id| id == video_id) {
            Some(index) => {
                self.videos.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.videos.clear();
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
