//! # vidcat Player Library (vidcat-player)
//!
//! Session state for browsing a fixed video catalogue: single-slot playback
//! control, named playlists with case-insensitive identity, title/tag search
//! and moderation (flagging) of videos.
//!
//! **Architecture:** one synchronous `Session` owns the playback controller
//! and playlist store and orchestrates every cross-component side effect.

pub mod error;
pub mod playback;
pub mod playlist;
pub mod search;
pub mod session;

pub use error::{Error, Reason, Result};
pub use session::{Session, DEFAULT_FLAG_REASON};
