//! Playback control
//!
//! Single-slot playback: at most one video is selected, either playing or
//! paused.

pub mod controller;
pub mod state;

pub use controller::PlaybackController;
pub use state::{CurrentVideo, PlaybackState};
