use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use uuid::Uuid;

use crate::models::media::{Channel, Movie, Series};

/// Playlist record: the document a parse run was fed, plus provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub name: String,
    /// Opaque owner/tenant identifier stamped onto every produced entity
    pub user_id: String,
    /// Raw document text, verbatim
    pub content: String,
    /// SHA1 of the content, lets callers skip refreshes of unchanged documents
    pub content_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_refreshed: Option<DateTime<Utc>>,
    pub active: bool,
}

impl Playlist {
    pub fn new(user_id: &str, content: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Imported playlist".to_string(),
            user_id: user_id.to_string(),
            content: content.to_string(),
            content_hash: hash_content(content),
            created_at: now,
            updated_at: now,
            last_refreshed: None,
            active: true,
        }
    }

    /// Record a caller-driven refresh; the parser itself never calls this
    pub fn mark_refreshed(&mut self) {
        let now = Utc::now();
        self.last_refreshed = Some(now);
        self.updated_at = now;
    }
}

/// SHA1 hex digest of the document text
pub fn hash_content(content: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    format!("{:x}", result)
}

/// Full result of one parse pass
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub playlist: Playlist,
    pub channels: Vec<Channel>,
    pub movies: Vec<Movie>,
    pub series: Vec<Series>,
}

impl Catalog {
    /// Per-kind entity counts for this catalog
    pub fn stats(&self) -> PlaylistStats {
        let episode_count = self.series.iter().map(|s| s.episodes.len()).sum();
        PlaylistStats {
            total_entries: self.channels.len() + self.movies.len() + episode_count,
            channel_count: self.channels.len(),
            movie_count: self.movies.len(),
            series_count: self.series.len(),
            episode_count,
        }
    }
}

/// Playlist statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistStats {
    /// Channels + movies + episodes, i.e. one per paired entry in the document
    pub total_entries: usize,
    pub channel_count: usize,
    pub movie_count: usize,
    pub series_count: usize,
    pub episode_count: usize,
}
