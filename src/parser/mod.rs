//! M3U playlist parsing
//!
//! Single forward pass over the document text:
//! tokenizer -> attribute extraction -> classification -> channel / movie /
//! series routing. Pure and synchronous; the caller owns fetching the text
//! and persisting the resulting catalog.

mod classifier;
mod extinf;
mod series;
mod tokenizer;

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{Catalog, Channel, MediaKind, Movie, Playlist};
use classifier::{ContentClassifier, DEFAULT_GROUP};
use extinf::{parse_extinf, ExtinfData};
use series::SeriesAggregator;
use tokenizer::Tokenizer;

lazy_static! {
    /// Bracketed 4-digit year in a movie title, e.g. "Inception (2010)"
    static ref RELEASE_YEAR_REGEX: Regex = Regex::new(r"[\(\[](\d{4})[\)\]]").unwrap();
}

/// Parse a playlist document into a catalog of channels, movies and series.
///
/// `user_id` is an opaque tenant identifier recorded on the playlist record;
/// every produced entity references the playlist through `playlist_id`.
/// Malformed lines degrade to per-field defaults or are skipped; the call
/// itself never fails, and an empty document yields an empty catalog.
pub fn parse_document(content: &str, user_id: &str) -> Catalog {
    let playlist = Playlist::new(user_id, content);

    let mut channels = Vec::new();
    let mut movies = Vec::new();
    let mut aggregator = SeriesAggregator::new();

    for entry in Tokenizer::new(content) {
        let extinf = parse_extinf(entry.extinf);
        let group = extinf
            .attributes
            .get("group-title")
            .cloned()
            .unwrap_or_else(|| DEFAULT_GROUP.to_string());
        let logo = extinf.attributes.get("tvg-logo").cloned().unwrap_or_default();

        match ContentClassifier::classify(&group) {
            MediaKind::Movie => movies.push(build_movie(&playlist.id, extinf, group, logo, entry.url)),
            MediaKind::Series => aggregator.add(
                &playlist.id,
                &extinf.title,
                &group,
                entry.url,
                &logo,
                extinf.duration,
                extinf.attributes,
            ),
            MediaKind::Live => channels.push(build_channel(&playlist.id, extinf, group, logo, entry.url)),
        }
    }

    let series = aggregator.into_series();
    tracing::info!(
        "Parsed playlist {}: {} channels, {} movies, {} series",
        playlist.id,
        channels.len(),
        movies.len(),
        series.len()
    );

    Catalog {
        playlist,
        channels,
        movies,
        series,
    }
}

fn build_channel(
    playlist_id: &str,
    extinf: ExtinfData,
    group: String,
    logo: String,
    stream_url: &str,
) -> Channel {
    Channel {
        id: uuid::Uuid::new_v4().to_string(),
        name: extinf.title,
        group,
        stream_url: stream_url.to_string(),
        logo_url: logo,
        playlist_id: playlist_id.to_string(),
        favorite: false,
        attributes: extinf.attributes,
    }
}

fn build_movie(
    playlist_id: &str,
    extinf: ExtinfData,
    genre: String,
    thumbnail: String,
    stream_url: &str,
) -> Movie {
    let release_year = RELEASE_YEAR_REGEX
        .captures(&extinf.title)
        .map(|caps| caps[1].to_string());

    Movie {
        id: uuid::Uuid::new_v4().to_string(),
        title: extinf.title,
        genre,
        stream_url: stream_url.to_string(),
        thumbnail_url: thumbnail,
        playlist_id: playlist_id.to_string(),
        description: None,
        release_year,
        duration: u32::try_from(extinf.duration).ok(),
        favorite: false,
        attributes: extinf.attributes,
    }
}
