//! Playback state

use std::fmt;
use vidcat_common::Video;

/// Snapshot of the selected video
///
/// Title, id and tags never change after catalogue load, so the controller
/// keeps its own copy instead of a reference into the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentVideo {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
}

impl From<&Video> for CurrentVideo {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id().to_string(),
            title: video.title().to_string(),
            tags: video.tags().to_vec(),
        }
    }
}

/// Playback state
///
/// Paused always carries a selected video; Idle never does.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing(CurrentVideo),
    Paused(CurrentVideo),
}

impl PlaybackState {
    /// Selected video, playing or paused
    pub fn current(&self) -> Option<&CurrentVideo> {
        match self {
            PlaybackState::Idle => None,
            PlaybackState::Playing(video) | PlaybackState::Paused(video) => Some(video),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, PlaybackState::Idle)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused(_))
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackState::Idle => write!(f, "No video is currently playing"),
            PlaybackState::Playing(video) | PlaybackState::Paused(video) => {
                write!(
                    f,
                    " Currently playing: {} ({}) [{}]",
                    video.title,
                    video.id,
                    video.tags.join(" ")
                )?;
                if self.is_paused() {
                    write!(f, " - PAUSED")?;
                }
                Ok(())
            }
        }
    }
}
