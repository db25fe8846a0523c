//! Named playlists

pub mod model;
pub mod store;

pub use model::{Playlist, PlaylistKey};
pub use store::{PlaylistIndex, PlaylistListing, PlaylistStore};
