//! Playback controller
//!
//! Owns the single "currently playing" slot. Knows nothing about the
//! catalogue or moderation beyond the video handed to `play`.

use super::state::{CurrentVideo, PlaybackState};
use crate::error::{Error, Reason, Result};
use tracing::debug;
use vidcat_common::events::PlaybackEvent;
use vidcat_common::Video;

/// Idle / Playing / Paused state machine
#[derive(Debug, Default)]
pub struct PlaybackController {
    state: PlaybackState,
}

impl PlaybackController {
    /// Create new idle controller
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Identifier of the selected video, playing or paused
    pub fn current_id(&self) -> Option<&str> {
        self.state.current().map(|v| v.id.as_str())
    }

    /// Start playing `video`
    ///
    /// A previously selected video is stopped first and reported before the
    /// start event. Flagged videos are refused and leave the state untouched.
    pub fn play(&mut self, video: &Video) -> Result<Vec<PlaybackEvent>> {
        if let Some(reason) = video.flag_reason() {
            return Err(Error::Play(Reason::Flagged(reason.to_string())));
        }

        let mut events = Vec::with_capacity(2);
        if let Some(previous) = self.state.current() {
            events.push(PlaybackEvent::Stopped {
                title: previous.title.clone(),
            });
        }

        debug!(video_id = video.id(), "Starting playback");
        events.push(PlaybackEvent::Started {
            title: video.title().to_string(),
        });
        self.state = PlaybackState::Playing(CurrentVideo::from(video));

        Ok(events)
    }

    /// Stop the selected video
    pub fn stop(&mut self) -> Result<PlaybackEvent> {
        match std::mem::take(&mut self.state) {
            PlaybackState::Idle => Err(Error::Stop(Reason::NothingPlaying)),
            PlaybackState::Playing(video) | PlaybackState::Paused(video) => {
                debug!(video_id = %video.id, "Stopping playback");
                Ok(PlaybackEvent::Stopped { title: video.title })
            }
        }
    }

    /// Pause the playing video
    ///
    /// Pausing a paused video succeeds with a distinct event and no change.
    pub fn pause(&mut self) -> Result<PlaybackEvent> {
        match std::mem::take(&mut self.state) {
            PlaybackState::Idle => Err(Error::Pause(Reason::NothingPlaying)),
            PlaybackState::Playing(video) => {
                let event = PlaybackEvent::Paused {
                    title: video.title.clone(),
                };
                self.state = PlaybackState::Paused(video);
                Ok(event)
            }
            PlaybackState::Paused(video) => {
                let event = PlaybackEvent::AlreadyPaused {
                    title: video.title.clone(),
                };
                self.state = PlaybackState::Paused(video);
                Ok(event)
            }
        }
    }

    /// Continue the paused video
    pub fn resume(&mut self) -> Result<PlaybackEvent> {
        match std::mem::take(&mut self.state) {
            PlaybackState::Idle => Err(Error::Continue(Reason::NothingPlaying)),
            PlaybackState::Playing(video) => {
                self.state = PlaybackState::Playing(video);
                Err(Error::Continue(Reason::NotPaused))
            }
            PlaybackState::Paused(video) => {
                let event = PlaybackEvent::Resumed {
                    title: video.title.clone(),
                };
                self.state = PlaybackState::Playing(video);
                Ok(event)
            }
        }
    }
}
