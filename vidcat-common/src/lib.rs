//! # vidcat Common Library
//!
//! Shared code for the vidcat player including:
//! - Video entity and moderation state
//! - Catalogue trait and the in-memory video library
//! - Report event types (playback, playlist, moderation)
//! - Bootstrap configuration loading

pub mod catalogue;
pub mod config;
pub mod error;
pub mod events;
pub mod video;

pub use catalogue::{Catalogue, VideoLibrary};
pub use error::{Error, Result};
pub use video::{Moderation, Video};
