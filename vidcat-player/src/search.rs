//! Title and tag search with numbered follow-up selection

use std::fmt;
use vidcat_common::Video;

/// Prompt shown after a non-empty result list
pub const SELECTION_PROMPT: &str = "Would you like to play any of the above? \
    If yes, specify the number of the video.\n\
    If your answer is not a valid number, we will assume it's a no.";

/// Lazily match unflagged videos whose title contains `term`
pub fn matching_title<'a>(
    videos: &'a [Video],
    term: &'a str,
) -> impl Iterator<Item = &'a Video> + 'a {
    videos
        .iter()
        .filter(move |v| !v.is_flagged() && v.title_contains(term))
}

/// Lazily match unflagged videos carrying `tag`
pub fn matching_tag<'a>(videos: &'a [Video], tag: &'a str) -> impl Iterator<Item = &'a Video> + 'a {
    videos
        .iter()
        .filter(move |v| !v.is_flagged() && v.has_tag(tag))
}

/// One numbered search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub video_id: String,
    pub text: String,
}

/// Search results in catalogue order, numbered from 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    term: String,
    hits: Vec<SearchHit>,
}

impl SearchResults {
    /// Collect matches, keeping their iteration order
    pub fn collect<'a>(term: &str, matches: impl Iterator<Item = &'a Video>) -> Self {
        Self {
            term: term.to_string(),
            hits: matches
                .map(|v| SearchHit {
                    video_id: v.id().to_string(),
                    text: v.to_string(),
                })
                .collect(),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn hits(&self) -> &[SearchHit] {
        &self.hits
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Resolve a follow-up answer to a video id
    ///
    /// Only an all-digit answer within 1..=len selects a video. The line
    /// ending is dropped; any other character, whitespace included, means
    /// "no selection".
    pub fn select(&self, answer: &str) -> Option<&str> {
        let answer = answer.trim_end_matches(['\n', '\r']);
        if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let number: usize = answer.parse().ok()?;
        number
            .checked_sub(1)
            .and_then(|index| self.hits.get(index))
            .map(|hit| hit.video_id.as_str())
    }
}

impl fmt::Display for SearchResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hits.is_empty() {
            return write!(f, "No search results for {}", self.term);
        }
        write!(f, "Here are the results for {}:", self.term)?;
        for (i, hit) in self.hits.iter().enumerate() {
            write!(f, "\n   {}) {}", i + 1, hit.text)?;
        }
        Ok(())
    }
}
