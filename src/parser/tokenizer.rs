/// One (directive, stream URL) line pair in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawEntry<'a> {
    pub extinf: &'a str,
    pub url: &'a str,
}

/// Pairs each `#EXTINF` directive with the stream URL line that follows it.
///
/// Holds a single pending-directive slot: a second directive before any URL
/// overwrites the first (the earlier entry is lost, matching upstream playlist
/// behavior), and a URL with no pending directive is skipped. Both cases are
/// surfaced at debug level so malformed documents can be diagnosed without
/// failing the parse.
pub(crate) struct Tokenizer<'a> {
    lines: std::str::Lines<'a>,
    pending: Option<&'a str>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines(),
            pending: None,
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = RawEntry<'a>;

    fn next(&mut self) -> Option<RawEntry<'a>> {
        for line in self.lines.by_ref() {
            if line.starts_with("#EXTINF") {
                if let Some(dropped) = self.pending.replace(line) {
                    tracing::debug!(directive = dropped, "directive without stream url dropped");
                }
            } else if line.starts_with("http") {
                match self.pending.take() {
                    Some(extinf) => return Some(RawEntry { extinf, url: line }),
                    None => tracing::debug!(url = line, "stream url without directive skipped"),
                }
            }
            // header, blank and unrecognized lines are inert
        }
        None
    }
}
