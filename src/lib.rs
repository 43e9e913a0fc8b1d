//! iptv-catalog
//!
//! Turns an extended-M3U playlist document into a structured catalog:
//! - live channels, movies, and series with grouped episodes
//! - free-form `tvg-*` / `group-title` attribute extraction per entry
//! - series identity and season/episode inference from episode titles
//!
//! The crate is a pure, synchronous parsing core. Fetching the document,
//! persisting entities, pagination and stream proxying belong to the
//! embedding application; [`parse_document`] is the single entry point.

pub mod models;
pub mod parser;

pub use models::{Catalog, Channel, Episode, MediaKind, Movie, Playlist, PlaylistStats, Series};
pub use parser::parse_document;
