use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Media type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Live,
    Movie,
    Series,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Live => write!(f, "live"),
            MediaKind::Movie => write!(f, "movie"),
            MediaKind::Series => write!(f, "series"),
        }
    }
}

/// Live TV channel
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub group: String,
    pub stream_url: String,
    pub logo_url: String,
    pub playlist_id: String,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

/// VOD movie
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub genre: String,
    pub stream_url: String,
    pub thumbnail_url: String,
    pub playlist_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<String>,
    /// Duration in seconds from the EXTINF header, absent for live (-1) entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

/// TV series with episodes grouped under one inferred title
///
/// Series-level genre, thumbnail and attributes come from the first episode
/// encountered in the document; later episodes never overwrite them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: String,
    pub title: String,
    pub genre: String,
    pub thumbnail_url: String,
    pub playlist_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Episodes in document encounter order; sorting is a consumer concern
    #[serde(default)]
    pub episodes: Vec<Episode>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

/// Single episode within a series
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: String,
    /// Original title as written in the playlist, not normalized
    pub title: String,
    /// 0 when no season/episode shape matched the title
    pub season_number: u32,
    pub episode_number: u32,
    pub stream_url: String,
    pub thumbnail_url: String,
    /// Duration in seconds from the EXTINF header, 0 when absent
    #[serde(default)]
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}
