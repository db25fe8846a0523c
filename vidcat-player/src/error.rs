//! Error types for vidcat-player
//!
//! Every session failure is a value. The `Display` text of each variant is
//! the exact line reported to the user.

use thiserror::Error;

/// Why an operation was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Video is currently flagged (reason: {0})")]
    Flagged(String),

    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video is not paused")]
    NotPaused,

    #[error("Playlist does not exist")]
    PlaylistNotFound,

    #[error("A playlist with the same name already exists")]
    PlaylistExists,

    #[error("Video already added")]
    AlreadyInPlaylist,

    #[error("Video is not in playlist")]
    NotInPlaylist,

    #[error("Video is already flagged")]
    AlreadyFlagged,

    #[error("Video is not flagged")]
    NotFlagged,
}

/// Main error type for session operations
///
/// `playlist` fields hold the name as the caller supplied it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Cannot play video: {0}")]
    Play(Reason),

    #[error("Cannot stop video: {0}")]
    Stop(Reason),

    #[error("Cannot pause video: {0}")]
    Pause(Reason),

    #[error("Cannot continue video: {0}")]
    Continue(Reason),

    /// Random playback found no playable video
    #[error("No videos available")]
    NoVideosAvailable,

    #[error("Cannot create playlist: {0}")]
    CreatePlaylist(Reason),

    #[error("Cannot add video to {playlist}: {reason}")]
    AddToPlaylist { playlist: String, reason: Reason },

    #[error("Cannot remove video from {playlist}: {reason}")]
    RemoveFromPlaylist { playlist: String, reason: Reason },

    #[error("Cannot clear playlist {playlist}: {reason}")]
    ClearPlaylist { playlist: String, reason: Reason },

    #[error("Cannot delete playlist {playlist}: {reason}")]
    DeletePlaylist { playlist: String, reason: Reason },

    #[error("Cannot show playlist {playlist}: {reason}")]
    ShowPlaylist { playlist: String, reason: Reason },

    #[error("Cannot flag video: {0}")]
    Flag(Reason),

    #[error("Cannot remove flag from video: {0}")]
    Allow(Reason),
}

impl Error {
    /// Underlying refusal reason, if the operation has more than one
    pub fn reason(&self) -> Option<&Reason> {
        match self {
            Error::Play(r)
            | Error::Stop(r)
            | Error::Pause(r)
            | Error::Continue(r)
            | Error::CreatePlaylist(r)
            | Error::Flag(r)
            | Error::Allow(r) => Some(r),
            Error::AddToPlaylist { reason, .. }
            | Error::RemoveFromPlaylist { reason, .. }
            | Error::ClearPlaylist { reason, .. }
            | Error::DeletePlaylist { reason, .. }
            | Error::ShowPlaylist { reason, .. } => Some(reason),
            Error::NoVideosAvailable => None,
        }
    }
}

/// Convenience Result type using vidcat-player Error
pub type Result<T> = std::result::Result<T, Error>;
