use lazy_static::lazy_static;
use regex::Regex;

use crate::models::MediaKind;

lazy_static! {
    // ============ GROUP PATTERNS ============
    // Ordered keyword tables; classify() checks movies before series, so a
    // group label matching both sets lands in Movie.
    static ref GROUP_MOVIE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)movie").unwrap(),
        Regex::new(r"(?i)cinema").unwrap(),
        Regex::new(r"(?i)film").unwrap(),
    ];

    static ref GROUP_SERIES_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)series").unwrap(),
        Regex::new(r"(?i)tv shows").unwrap(),
        Regex::new(r"(?i)episodes").unwrap(),
    ];
}

/// Group label used when the directive carries no group-title attribute
pub(crate) const DEFAULT_GROUP: &str = "No Category";

/// Content classifier for playlist entries
pub(crate) struct ContentClassifier;

impl ContentClassifier {
    /// Classify an entry by its group label.
    ///
    /// Substring match, case-insensitive. Anything that is neither a movie
    /// nor a series group is live TV.
    pub fn classify(group: &str) -> MediaKind {
        if GROUP_MOVIE_PATTERNS.iter().any(|p| p.is_match(group)) {
            return MediaKind::Movie;
        }
        if GROUP_SERIES_PATTERNS.iter().any(|p| p.is_match(group)) {
            return MediaKind::Series;
        }
        MediaKind::Live
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_movie_groups() {
        assert_eq!(ContentClassifier::classify("Movies"), MediaKind::Movie);
        assert_eq!(ContentClassifier::classify("Cinema VOD"), MediaKind::Movie);
        assert_eq!(ContentClassifier::classify("Classic Films"), MediaKind::Movie);
        // substring match, not exact equality
        assert_eq!(ContentClassifier::classify("Movies HD"), MediaKind::Movie);
    }

    #[test]
    fn test_classify_series_groups() {
        assert_eq!(ContentClassifier::classify("Series"), MediaKind::Series);
        assert_eq!(ContentClassifier::classify("TV Shows"), MediaKind::Series);
        assert_eq!(ContentClassifier::classify("Best Episodes"), MediaKind::Series);
    }

    #[test]
    fn test_classify_live_fallback() {
        assert_eq!(ContentClassifier::classify("News"), MediaKind::Live);
        assert_eq!(ContentClassifier::classify("Sports"), MediaKind::Live);
        assert_eq!(ContentClassifier::classify(DEFAULT_GROUP), MediaKind::Live);
        assert_eq!(ContentClassifier::classify(""), MediaKind::Live);
    }

    #[test]
    fn test_classify_case_insensitive() {
        assert_eq!(ContentClassifier::classify("FILMES E CINEMA"), MediaKind::Movie);
        assert_eq!(ContentClassifier::classify("SERIES 4K"), MediaKind::Series);
    }

    #[test]
    fn test_movie_keywords_win_over_series() {
        // both keyword sets match; movie is checked first
        assert_eq!(
            ContentClassifier::classify("Movie Series Mashup"),
            MediaKind::Movie
        );
    }
}
