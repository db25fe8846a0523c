//! Session manager
//!
//! One `Session` holds the playback controller and playlist store for a
//! single user, and borrows or owns the catalogue it works against. All
//! cross-component effects are orchestrated here:
//!
//! - starting a video implicitly stops the previous one
//! - flagging the playing video stops it before the flag is set
//!
//! Every operation returns the events to report, or an error whose text is
//! the refusal message. Nothing here panics on a business-rule violation.

use crate::error::{Error, Reason, Result};
use crate::playback::{PlaybackController, PlaybackState};
use crate::playlist::{PlaylistIndex, PlaylistListing, PlaylistStore};
use crate::search::{self, SearchResults, SELECTION_PROMPT};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use uuid::Uuid;
use vidcat_common::events::{ModerationEvent, Notice, PlaybackEvent, PlaylistEvent};
use vidcat_common::{Catalogue, Video};

/// Reason recorded when a video is flagged without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Every video, sorted by title (`show_all_videos`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryListing {
    pub videos: Vec<String>,
}

impl fmt::Display for LibraryListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Here's a list of all available videos:")?;
        for video in &self.videos {
            write!(f, "\n   {}", video)?;
        }
        Ok(())
    }
}

/// One user's playback and playlist state over a catalogue
pub struct Session<C: Catalogue> {
    id: Uuid,
    catalogue: C,
    playback: PlaybackController,
    playlists: PlaylistStore,
    rng: StdRng,
}

impl<C: Catalogue> Session<C> {
    /// Create a session with an entropy-seeded random source
    pub fn new(catalogue: C) -> Self {
        Self::with_rng(catalogue, StdRng::from_entropy())
    }

    /// Create a session whose random playback is reproducible
    pub fn with_seed(catalogue: C, seed: u64) -> Self {
        Self::with_rng(catalogue, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalogue: C, rng: StdRng) -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, videos = catalogue.len(), "Session started");
        Self {
            id,
            catalogue,
            playback: PlaybackController::new(),
            playlists: PlaylistStore::new(),
            rng,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn catalogue(&self) -> &C {
        &self.catalogue
    }

    pub fn playlists(&self) -> &PlaylistStore {
        &self.playlists
    }

    /// Log refused operations; they are expected outcomes, not faults
    fn report<T>(&self, operation: &'static str, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            debug!(session = %self.id, operation, "{}", err);
        }
        result
    }

    // ===== Library =====

    pub fn number_of_videos(&self) -> usize {
        self.catalogue.len()
    }

    /// "{n} videos in the library"
    pub fn library_summary(&self) -> String {
        format!("{} videos in the library", self.number_of_videos())
    }

    /// All videos sorted by title, flagged ones included
    pub fn show_all_videos(&self) -> LibraryListing {
        let mut videos: Vec<&Video> = self.catalogue.all_videos().iter().collect();
        videos.sort_by(|a, b| a.title().cmp(b.title()));
        LibraryListing {
            videos: videos.into_iter().map(Video::to_string).collect(),
        }
    }

    // ===== Playback =====

    pub fn status(&self) -> &PlaybackState {
        self.playback.state()
    }

    /// Play a catalogue video, stopping any current one first
    pub fn play(&mut self, video_id: &str) -> Result<Vec<PlaybackEvent>> {
        let result = match self.catalogue.find(video_id) {
            Some(video) => self.playback.play(video),
            None => Err(Error::Play(Reason::VideoNotFound)),
        };
        self.report("play", result)
    }

    pub fn stop(&mut self) -> Result<PlaybackEvent> {
        let result = self.playback.stop();
        self.report("stop", result)
    }

    /// Play a uniformly chosen unflagged video
    ///
    /// Fails without touching playback when every video is flagged or the
    /// catalogue is empty.
    pub fn play_random(&mut self) -> Result<Vec<PlaybackEvent>> {
        let candidates: Vec<&Video> = self
            .catalogue
            .all_videos()
            .iter()
            .filter(|v| !v.is_flagged())
            .collect();

        let result = match candidates.choose(&mut self.rng) {
            Some(video) => self.playback.play(video),
            None => Err(Error::NoVideosAvailable),
        };
        self.report("play_random", result)
    }

    pub fn pause(&mut self) -> Result<PlaybackEvent> {
        let result = self.playback.pause();
        self.report("pause", result)
    }

    /// Continue a paused video
    pub fn resume(&mut self) -> Result<PlaybackEvent> {
        let result = self.playback.resume();
        self.report("resume", result)
    }

    // ===== Playlists =====

    pub fn create_playlist(&mut self, name: &str) -> Result<PlaylistEvent> {
        let result = self.playlists.create(name);
        self.report("create_playlist", result)
    }

    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Result<PlaylistEvent> {
        let result = self.playlists.add_video(&self.catalogue, name, video_id);
        self.report("add_to_playlist", result)
    }

    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> Result<PlaylistEvent> {
        let result = self.playlists.remove_video(&self.catalogue, name, video_id);
        self.report("remove_from_playlist", result)
    }

    pub fn clear_playlist(&mut self, name: &str) -> Result<PlaylistEvent> {
        let result = self.playlists.clear(name);
        self.report("clear_playlist", result)
    }

    pub fn delete_playlist(&mut self, name: &str) -> Result<PlaylistEvent> {
        let result = self.playlists.delete(name);
        self.report("delete_playlist", result)
    }

    pub fn show_playlist(&self, name: &str) -> Result<PlaylistListing> {
        let result = self.playlists.show(&self.catalogue, name);
        self.report("show_playlist", result)
    }

    pub fn list_playlists(&self) -> PlaylistIndex {
        self.playlists.list_all()
    }

    // ===== Search =====

    /// Unflagged videos whose title contains `term`, case-insensitively
    pub fn matching_title<'a>(&'a self, term: &'a str) -> impl Iterator<Item = &'a Video> + 'a {
        search::matching_title(self.catalogue.all_videos(), term)
    }

    /// Unflagged videos tagged `tag`, case-insensitively
    pub fn matching_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Video> + 'a {
        search::matching_tag(self.catalogue.all_videos(), tag)
    }

    pub fn search_by_title(&self, term: &str) -> SearchResults {
        SearchResults::collect(term, self.matching_title(term))
    }

    pub fn search_by_tag(&self, tag: &str) -> SearchResults {
        SearchResults::collect(tag, self.matching_tag(tag))
    }

    /// Play the result picked by `answer`
    ///
    /// Returns `None` when the answer is not a valid number in range.
    pub fn play_selection(
        &mut self,
        results: &SearchResults,
        answer: &str,
    ) -> Option<Result<Vec<PlaybackEvent>>> {
        let video_id = results.select(answer)?;
        Some(self.play(video_id))
    }

    /// Show results, ask which to play and read one line of input
    ///
    /// Writes every reported line to `output`. Nothing is read when there are
    /// no results.
    pub fn prompt_selection<R: BufRead, W: Write>(
        &mut self,
        results: &SearchResults,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<Option<Result<Vec<PlaybackEvent>>>> {
        writeln!(output, "{}", results)?;
        if results.is_empty() {
            return Ok(None);
        }

        writeln!(output, "{}", SELECTION_PROMPT)?;
        output.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;

        let outcome = self.play_selection(results, &answer);
        match &outcome {
            Some(Ok(events)) => {
                for event in events {
                    writeln!(output, "{}", event)?;
                }
            }
            Some(Err(err)) => writeln!(output, "{}", err)?,
            None => {}
        }
        Ok(outcome)
    }

    // ===== Moderation =====

    /// Flag a video, stopping it first if it is the one playing
    pub fn flag_video(&mut self, video_id: &str, reason: Option<&str>) -> Result<Vec<Notice>> {
        let result = self.flag_video_inner(video_id, reason.unwrap_or(DEFAULT_FLAG_REASON));
        self.report("flag_video", result)
    }

    fn flag_video_inner(&mut self, video_id: &str, reason: &str) -> Result<Vec<Notice>> {
        let video = self
            .catalogue
            .find(video_id)
            .ok_or(Error::Flag(Reason::VideoNotFound))?;
        if video.is_flagged() {
            return Err(Error::Flag(Reason::AlreadyFlagged));
        }
        let title = video.title().to_string();

        let mut notices = Vec::with_capacity(2);
        if self.playback.current_id() == Some(video_id) {
            notices.push(self.playback.stop()?.into());
        }

        self.catalogue
            .find_mut(video_id)
            .ok_or(Error::Flag(Reason::VideoNotFound))?
            .flag(reason);

        debug!(session = %self.id, video_id, reason, "Flagged video");
        notices.push(
            ModerationEvent::Flagged {
                title,
                reason: reason.to_string(),
            }
            .into(),
        );
        Ok(notices)
    }

    /// Remove the flag from a video
    pub fn allow_video(&mut self, video_id: &str) -> Result<ModerationEvent> {
        let result = match self.catalogue.find_mut(video_id) {
            None => Err(Error::Allow(Reason::VideoNotFound)),
            Some(video) if !video.is_flagged() => Err(Error::Allow(Reason::NotFlagged)),
            Some(video) => {
                video.unflag();
                Ok(ModerationEvent::Allowed {
                    title: video.title().to_string(),
                })
            }
        };
        self.report("allow_video", result)
    }
}
