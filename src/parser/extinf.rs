use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    /// Splits `#EXTINF:<header>,<title>` at the first comma
    static ref EXTINF_REGEX: Regex = Regex::new(r"^#EXTINF:([^,]*),(.*)").unwrap();
    /// Leading signed integer of the header is the duration in seconds
    static ref DURATION_REGEX: Regex = Regex::new(r"^-?\d+").unwrap();
    static ref GROUP_TITLE_REGEX: Regex = Regex::new(r#"group-title="([^"]*)""#).unwrap();
    static ref TVG_LOGO_REGEX: Regex = Regex::new(r#"tvg-logo="([^"]*)""#).unwrap();
    static ref TVG_ATTR_REGEX: Regex = Regex::new(r#"tvg-([^=]*)="([^"]*)""#).unwrap();
}

/// Title used when the directive does not have the `#EXTINF:<header>,<title>` shape
const UNKNOWN_TITLE: &str = "Unknown";

/// Parsed EXTINF directive line
#[derive(Debug, Default)]
pub(crate) struct ExtinfData {
    pub title: String,
    /// -1 when the header carries no duration (live streams)
    pub duration: i32,
    pub attributes: HashMap<String, String>,
}

/// Extract title, duration and keyed attributes from one directive line.
///
/// Extraction is best-effort per field: a malformed or missing quoted value
/// omits that key only, and a directive without a comma still yields usable
/// attributes under the fallback title. Never fails.
pub(crate) fn parse_extinf(line: &str) -> ExtinfData {
    let (title, duration) = match EXTINF_REGEX.captures(line) {
        Some(caps) => {
            let header = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let duration = DURATION_REGEX
                .find(header)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(-1);
            let title = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
            (title.to_string(), duration)
        }
        None => (UNKNOWN_TITLE.to_string(), -1),
    };

    // Attributes may appear anywhere in the line, so scan all of it rather
    // than just the pre-comma header
    let mut attributes = HashMap::new();
    if let Some(caps) = GROUP_TITLE_REGEX.captures(line) {
        attributes.insert("group-title".to_string(), caps[1].to_string());
    }
    if let Some(caps) = TVG_LOGO_REGEX.captures(line) {
        attributes.insert("tvg-logo".to_string(), caps[1].to_string());
    }
    for caps in TVG_ATTR_REGEX.captures_iter(line) {
        attributes.insert(format!("tvg-{}", &caps[1]), caps[2].to_string());
    }

    ExtinfData {
        title,
        duration,
        attributes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extinf_full() {
        let line = r#"#EXTINF:-1 tvg-id="cnn" tvg-name="CNN HD" tvg-logo="http://logo.com/cnn.png" group-title="News",CNN HD"#;
        let extinf = parse_extinf(line);

        assert_eq!(extinf.title, "CNN HD");
        assert_eq!(extinf.duration, -1);
        assert_eq!(extinf.attributes.get("tvg-id"), Some(&"cnn".to_string()));
        assert_eq!(extinf.attributes.get("tvg-name"), Some(&"CNN HD".to_string()));
        assert_eq!(
            extinf.attributes.get("tvg-logo"),
            Some(&"http://logo.com/cnn.png".to_string())
        );
        assert_eq!(extinf.attributes.get("group-title"), Some(&"News".to_string()));
    }

    #[test]
    fn test_parse_extinf_minimal() {
        let extinf = parse_extinf("#EXTINF:0,Show Title");
        assert_eq!(extinf.title, "Show Title");
        assert_eq!(extinf.duration, 0);
        assert!(extinf.attributes.is_empty());
    }

    #[test]
    fn test_parse_extinf_vod_duration() {
        let extinf = parse_extinf(r#"#EXTINF:5400 group-title="Movies",Some Film"#);
        assert_eq!(extinf.duration, 5400);
        assert_eq!(extinf.title, "Some Film");
    }

    #[test]
    fn test_missing_comma_falls_back_to_unknown_title() {
        let extinf = parse_extinf(r#"#EXTINF:-1 group-title="News" tvg-id="cnn""#);
        assert_eq!(extinf.title, "Unknown");
        assert_eq!(extinf.duration, -1);
        // attribute extraction still runs on the malformed directive
        assert_eq!(extinf.attributes.get("group-title"), Some(&"News".to_string()));
        assert_eq!(extinf.attributes.get("tvg-id"), Some(&"cnn".to_string()));
    }

    #[test]
    fn test_unterminated_quote_omits_key_only() {
        let extinf = parse_extinf(r#"#EXTINF:-1 group-title="Broken tvg-id="cnn",Title"#);
        // the unterminated group-title quote swallows up to the next '"'
        assert_eq!(
            extinf.attributes.get("group-title"),
            Some(&"Broken tvg-id=".to_string())
        );
        assert_eq!(extinf.attributes.get("tvg-id"), Some(&"cnn".to_string()));
        assert_eq!(extinf.title, "Title");

        let extinf = parse_extinf(r#"#EXTINF:-1 group-title="NeverClosed,Title"#);
        assert_eq!(extinf.attributes.get("group-title"), None);
        assert_eq!(extinf.title, r#"Title"#);
    }

    #[test]
    fn test_title_not_trimmed() {
        let extinf = parse_extinf("#EXTINF:-1,  Padded Title ");
        assert_eq!(extinf.title, "  Padded Title ");
    }
}
