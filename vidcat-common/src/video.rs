//! Video entity and moderation state

use std::fmt;

/// Moderation state of a video
///
/// A reason only exists while the video is flagged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Moderation {
    #[default]
    Unflagged,
    Flagged { reason: String },
}

/// A video in the catalogue
///
/// Title, id and tags are fixed at creation. Only the moderation state
/// changes during a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    id: String,
    title: String,
    tags: Vec<String>,
    moderation: Moderation,
}

impl Video {
    /// Create a new, unflagged video
    pub fn new<I, S>(id: impl Into<String>, title: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            moderation: Moderation::Unflagged,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn moderation(&self) -> &Moderation {
        &self.moderation
    }

    pub fn is_flagged(&self) -> bool {
        matches!(self.moderation, Moderation::Flagged { .. })
    }

    /// Reason given when the video was flagged, if it is flagged
    pub fn flag_reason(&self) -> Option<&str> {
        match &self.moderation {
            Moderation::Flagged { reason } => Some(reason),
            Moderation::Unflagged => None,
        }
    }

    /// Mark the video as flagged
    ///
    /// Overwrites any previous reason. Refusing to re-flag is a session rule.
    pub fn flag(&mut self, reason: impl Into<String>) {
        self.moderation = Moderation::Flagged {
            reason: reason.into(),
        };
    }

    /// Clear the flag and its reason
    pub fn unflag(&mut self) {
        self.moderation = Moderation::Unflagged;
    }

    /// Case-insensitive exact tag match
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }

    /// Case-insensitive substring match on the title
    pub fn title_contains(&self, term: &str) -> bool {
        self.title.to_uppercase().contains(&term.to_uppercase())
    }

    /// Tags joined by a single space, as shown in listings
    pub fn tags_line(&self) -> String {
        self.tags.join(" ")
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags_line())?;
        if let Moderation::Flagged { reason } = &self.moderation {
            write!(f, " - FLAGGED (reason: {})", reason)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Video {
        Video::new("amazing_cats_video_id", "Amazing Cats", ["#cat", "#animal"])
    }

    #[test]
    fn test_display_unflagged() {
        assert_eq!(
            sample().to_string(),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );
    }

    #[test]
    fn test_display_flagged() {
        let mut video = sample();
        video.flag("dont_like_cats");
        assert_eq!(
            video.to_string(),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal] - FLAGGED (reason: dont_like_cats)"
        );
    }

    #[test]
    fn test_display_without_tags() {
        let video = Video::new("v1", "Untagged", Vec::<String>::new());
        assert_eq!(video.to_string(), "Untagged (v1) []");
    }

    #[test]
    fn test_flag_and_unflag() {
        let mut video = sample();
        assert!(!video.is_flagged());
        assert_eq!(video.flag_reason(), None);

        video.flag("spam");
        assert!(video.is_flagged());
        assert_eq!(video.flag_reason(), Some("spam"));

        video.unflag();
        assert_eq!(video.moderation(), &Moderation::Unflagged);
        assert_eq!(video.flag_reason(), None);
    }

    #[test]
    fn test_tag_match_is_case_insensitive_and_exact() {
        let video = sample();
        assert!(video.has_tag("#CAT"));
        assert!(video.has_tag("#animal"));
        assert!(!video.has_tag("#ca"));
        assert!(!video.has_tag("cat"));
    }

    #[test]
    fn test_title_match_is_case_insensitive_substring() {
        let video = sample();
        assert!(video.title_contains("cat"));
        assert!(video.title_contains("ZING c"));
        assert!(!video.title_contains("dog"));
    }
}
