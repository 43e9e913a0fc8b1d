//! Catalog data model
//!
//! Entities produced by one playlist parse:
//! - Playlist record (document provenance + raw content)
//! - Channel / Movie / Series / Episode media entities
//! - Catalog wrapper with per-kind counts

pub mod media;
pub mod playlist;

pub use media::{Channel, Episode, MediaKind, Movie, Series};
pub use playlist::{Catalog, Playlist, PlaylistStats};
