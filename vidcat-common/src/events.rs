//! Event types reported by session operations
//!
//! Every successful operation produces one or more events. The `Display`
//! output of each event is the exact line shown to the user.

use std::fmt;

/// Playback state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Selected video was stopped (explicitly or implicitly)
    Stopped { title: String },

    /// A video started playing
    Started { title: String },

    /// Playing video was paused
    Paused { title: String },

    /// Pause requested while already paused (no state change)
    AlreadyPaused { title: String },

    /// Paused video resumed
    Resumed { title: String },
}

impl fmt::Display for PlaybackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackEvent::Stopped { title } => write!(f, "Stopping video: {}", title),
            PlaybackEvent::Started { title } => write!(f, "Playing video: {}", title),
            PlaybackEvent::Paused { title } => write!(f, "Pausing video: {}", title),
            PlaybackEvent::AlreadyPaused { title } => write!(f, "Video already paused: {}", title),
            PlaybackEvent::Resumed { title } => write!(f, "Continuing video: {}", title),
        }
    }
}

/// Playlist store mutations
///
/// `playlist` is the name as supplied by the caller, not the stored
/// display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistEvent {
    Created { playlist: String },
    VideoAdded { playlist: String, title: String },
    VideoRemoved { playlist: String, title: String },
    Cleared { playlist: String },
    Deleted { playlist: String },
}

impl fmt::Display for PlaylistEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaylistEvent::Created { playlist } => {
                write!(f, "Successfully created new playlist: {}", playlist)
            }
            PlaylistEvent::VideoAdded { playlist, title } => {
                write!(f, "Added video to {}: {}", playlist, title)
            }
            PlaylistEvent::VideoRemoved { playlist, title } => {
                write!(f, "Removed video from {}: {}", playlist, title)
            }
            PlaylistEvent::Cleared { playlist } => {
                write!(f, "Successfully removed all videos from {}", playlist)
            }
            PlaylistEvent::Deleted { playlist } => write!(f, "Deleted playlist: {}", playlist),
        }
    }
}

/// Moderation changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModerationEvent {
    Flagged { title: String, reason: String },
    Allowed { title: String },
}

impl fmt::Display for ModerationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModerationEvent::Flagged { title, reason } => {
                write!(f, "Successfully flagged video: {} (reason: {})", title, reason)
            }
            ModerationEvent::Allowed { title } => {
                write!(f, "Successfully removed flag from video: {}", title)
            }
        }
    }
}

/// Any event a session operation can report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Playback(PlaybackEvent),
    Playlist(PlaylistEvent),
    Moderation(ModerationEvent),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Playback(event) => fmt::Display::fmt(event, f),
            Notice::Playlist(event) => fmt::Display::fmt(event, f),
            Notice::Moderation(event) => fmt::Display::fmt(event, f),
        }
    }
}

impl From<PlaybackEvent> for Notice {
    fn from(event: PlaybackEvent) -> Self {
        Notice::Playback(event)
    }
}

impl From<PlaylistEvent> for Notice {
    fn from(event: PlaylistEvent) -> Self {
        Notice::Playlist(event)
    }
}

impl From<ModerationEvent> for Notice {
    fn from(event: ModerationEvent) -> Self {
        Notice::Moderation(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playback_event_lines() {
        let title = "Amazing Cats".to_string();
        assert_eq!(
            PlaybackEvent::Stopped { title: title.clone() }.to_string(),
            "Stopping video: Amazing Cats"
        );
        assert_eq!(
            PlaybackEvent::AlreadyPaused { title: title.clone() }.to_string(),
            "Video already paused: Amazing Cats"
        );
        assert_eq!(
            PlaybackEvent::Resumed { title }.to_string(),
            "Continuing video: Amazing Cats"
        );
    }

    #[test]
    fn test_playlist_event_lines() {
        let event = PlaylistEvent::VideoAdded {
            playlist: "my_PLAYlist".to_string(),
            title: "Funny Dogs".to_string(),
        };
        assert_eq!(event.to_string(), "Added video to my_PLAYlist: Funny Dogs");

        let event = PlaylistEvent::Cleared {
            playlist: "my_playlist".to_string(),
        };
        assert_eq!(
            event.to_string(),
            "Successfully removed all videos from my_playlist"
        );
    }

    #[test]
    fn test_notice_delegates_display() {
        let notice: Notice = ModerationEvent::Flagged {
            title: "Funny Dogs".to_string(),
            reason: "Not supplied".to_string(),
        }
        .into();
        assert_eq!(
            notice.to_string(),
            "Successfully flagged video: Funny Dogs (reason: Not supplied)"
        );
    }
}
