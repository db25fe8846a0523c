//! Playlist store
//!
//! Playlists are looked up by their case-insensitive key. Reports and
//! errors echo the name exactly as the caller typed it.

use super::model::{Playlist, PlaylistKey};
use crate::error::{Error, Reason, Result};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;
use vidcat_common::events::PlaylistEvent;
use vidcat_common::{Catalogue, Video};

/// Rendered playlist contents (`show`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistListing {
    /// Name as requested by the caller
    pub name: String,
    /// Member videos rendered with their current moderation state
    pub videos: Vec<String>,
}

impl fmt::Display for PlaylistListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing playlist: {}", self.name)?;
        if self.videos.is_empty() {
            write!(f, "\n   No videos here yet")?;
        }
        for video in &self.videos {
            write!(f, "\n   {}", video)?;
        }
        Ok(())
    }
}

/// Display names of all playlists (`list_all`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistIndex {
    pub names: Vec<String>,
}

impl fmt::Display for PlaylistIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.names.is_empty() {
            return write!(f, "No playlists exist yet");
        }
        write!(f, "Showing all playlists:")?;
        for name in &self.names {
            write!(f, "\n  {}", name)?;
        }
        Ok(())
    }
}

/// All playlists of one session, ordered by key
#[derive(Debug, Default)]
pub struct PlaylistStore {
    playlists: BTreeMap<PlaylistKey, Playlist>,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&PlaylistKey::new(name))
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Create an empty playlist
    pub fn create(&mut self, name: &str) -> Result<PlaylistEvent> {
        let key = PlaylistKey::new(name);
        if self.playlists.contains_key(&key) {
            return Err(Error::CreatePlaylist(Reason::PlaylistExists));
        }

        debug!(playlist = %key, "Creating playlist");
        self.playlists.insert(key, Playlist::new(name));
        Ok(PlaylistEvent::Created {
            playlist: name.to_string(),
        })
    }

    /// Append a catalogue video to a playlist
    pub fn add_video<C: Catalogue + ?Sized>(
        &mut self,
        catalogue: &C,
        name: &str,
        video_id: &str,
    ) -> Result<PlaylistEvent> {
        let fail = |reason| Error::AddToPlaylist {
            playlist: name.to_string(),
            reason,
        };

        let playlist = self
            .playlists
            .get_mut(&PlaylistKey::new(name))
            .ok_or_else(|| fail(Reason::PlaylistNotFound))?;
        let video = catalogue
            .find(video_id)
            .ok_or_else(|| fail(Reason::VideoNotFound))?;
        if let Some(reason) = video.flag_reason() {
            return Err(fail(Reason::Flagged(reason.to_string())));
        }
        if !playlist.push(video.id()) {
            return Err(fail(Reason::AlreadyInPlaylist));
        }

        debug!(playlist = name, video_id, "Added video to playlist");
        Ok(PlaylistEvent::VideoAdded {
            playlist: name.to_string(),
            title: video.title().to_string(),
        })
    }

    /// Remove a video from a playlist
    pub fn remove_video<C: Catalogue + ?Sized>(
        &mut self,
        catalogue: &C,
        name: &str,
        video_id: &str,
    ) -> Result<PlaylistEvent> {
        let fail = |reason| Error::RemoveFromPlaylist {
            playlist: name.to_string(),
            reason,
        };

        let playlist = self
            .playlists
            .get_mut(&PlaylistKey::new(name))
            .ok_or_else(|| fail(Reason::PlaylistNotFound))?;
        let video = catalogue
            .find(video_id)
            .ok_or_else(|| fail(Reason::VideoNotFound))?;
        if !playlist.remove(video.id()) {
            return Err(fail(Reason::NotInPlaylist));
        }

        debug!(playlist = name, video_id, "Removed video from playlist");
        Ok(PlaylistEvent::VideoRemoved {
            playlist: name.to_string(),
            title: video.title().to_string(),
        })
    }

    /// Remove all videos, keeping the playlist
    pub fn clear(&mut self, name: &str) -> Result<PlaylistEvent> {
        let playlist = self
            .playlists
            .get_mut(&PlaylistKey::new(name))
            .ok_or_else(|| Error::ClearPlaylist {
                playlist: name.to_string(),
                reason: Reason::PlaylistNotFound,
            })?;

        playlist.clear();
        Ok(PlaylistEvent::Cleared {
            playlist: name.to_string(),
        })
    }

    /// Remove the playlist entirely; the name may be reused afterwards
    pub fn delete(&mut self, name: &str) -> Result<PlaylistEvent> {
        match self.playlists.remove(&PlaylistKey::new(name)) {
            Some(removed) => {
                debug!(playlist = removed.name(), "Deleted playlist");
                Ok(PlaylistEvent::Deleted {
                    playlist: name.to_string(),
                })
            }
            None => Err(Error::DeletePlaylist {
                playlist: name.to_string(),
                reason: Reason::PlaylistNotFound,
            }),
        }
    }

    /// Display names, sorted case-insensitively
    pub fn list_all(&self) -> PlaylistIndex {
        PlaylistIndex {
            names: self
                .playlists
                .values()
                .map(|p| p.name().to_string())
                .collect(),
        }
    }

    /// Members of a playlist, in insertion order
    pub fn show<C: Catalogue + ?Sized>(
        &self,
        catalogue: &C,
        name: &str,
    ) -> Result<PlaylistListing> {
        let playlist = self
            .playlists
            .get(&PlaylistKey::new(name))
            .ok_or_else(|| Error::ShowPlaylist {
                playlist: name.to_string(),
                reason: Reason::PlaylistNotFound,
            })?;

        let videos = playlist
            .video_ids()
            .iter()
            .filter_map(|id| catalogue.find(id))
            .map(Video::to_string)
            .collect();

        Ok(PlaylistListing {
            name: name.to_string(),
            videos,
        })
    }
}
