use lazy_static::lazy_static;
use regex::Regex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::{Episode, Series};

lazy_static! {
    // ============ TITLE SHAPES ============
    // Ordered, first match wins. The identity shapes are anchored at the
    // start of the title so the lazy capture is the shortest name before the
    // numbering; the season/episode shapes match anywhere.
    static ref SERIES_NAME_PATTERNS: Vec<Regex> = vec![
        // Breaking Bad S01E01
        Regex::new(r"^(.+?)\s+[Ss]\d+[Ee]\d+").unwrap(),
        // Breaking Bad - Season 1 Episode 1
        Regex::new(r"^(.+?)\s+-\s+Season\s+\d+\s+Episode\s+\d+").unwrap(),
        // Breaking Bad 1x01
        Regex::new(r"^(.+?)\s+\d+x\d+").unwrap(),
    ];

    static ref SEASON_EPISODE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"[Ss](\d+)[Ee](\d+)").unwrap(),
        Regex::new(r"Season\s+(\d+)\s+Episode\s+(\d+)").unwrap(),
        Regex::new(r"(\d+)x(\d+)").unwrap(),
    ];
}

/// Series identity inferred from an episode title.
///
/// The first matching shape's name capture, trimmed, is the merge key for
/// grouping episodes. When no shape matches, the whole raw title is the
/// identity, so differently-worded titles for the same show stay separate.
pub(crate) fn extract_series_name(title: &str) -> String {
    for pattern in SERIES_NAME_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(title) {
            return caps[1].trim().to_string();
        }
    }
    title.to_string()
}

/// Season/episode numbers from an episode title, (0, 0) when no shape matches.
///
/// Runs independently of `extract_series_name`: a title can miss every
/// identity shape and still carry usable numbering, or vice versa.
pub(crate) fn extract_season_episode(title: &str) -> (u32, u32) {
    for pattern in SEASON_EPISODE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(title) {
            let season = caps[1].parse().unwrap_or(0);
            let episode = caps[2].parse().unwrap_or(0);
            return (season, episode);
        }
    }
    (0, 0)
}

/// Accumulates episodes into series keyed by inferred identity.
///
/// Scoped to one parse pass. The first episode seen for an identity supplies
/// the series-level genre, thumbnail and attributes; later episodes only
/// append. `into_series` yields series in first-encounter order.
pub(crate) struct SeriesAggregator {
    series: HashMap<String, Series>,
    order: Vec<String>,
}

impl SeriesAggregator {
    pub fn new() -> Self {
        Self {
            series: HashMap::new(),
            order: Vec::new(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add(
        &mut self,
        playlist_id: &str,
        title: &str,
        genre: &str,
        stream_url: &str,
        thumbnail_url: &str,
        duration: i32,
        attributes: HashMap<String, String>,
    ) {
        let series_name = extract_series_name(title);
        let (season_number, episode_number) = extract_season_episode(title);

        let entry = match self.series.entry(series_name.clone()) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                let series = Series {
                    id: Uuid::new_v4().to_string(),
                    title: series_name.clone(),
                    genre: genre.to_string(),
                    thumbnail_url: thumbnail_url.to_string(),
                    playlist_id: playlist_id.to_string(),
                    description: None,
                    episodes: Vec::new(),
                    favorite: false,
                    attributes: attributes.clone(),
                };
                self.order.push(series_name);
                e.insert(series)
            }
        };

        entry.episodes.push(Episode {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            season_number,
            episode_number,
            stream_url: stream_url.to_string(),
            thumbnail_url: thumbnail_url.to_string(),
            duration: duration.max(0) as u32,
            description: None,
            attributes,
        });
    }

    /// Finished series in the order their identities first appeared
    pub fn into_series(mut self) -> Vec<Series> {
        self.order
            .iter()
            .filter_map(|name| self.series.remove(name))
            .collect()
    }
}
