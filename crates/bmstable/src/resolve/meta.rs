//! `<meta name="bmstable">` tag scanning.
//!
//! Table pages advertise their header with a tag like
//! `<meta name="bmstable" content="header.json" />`. Pages are scanned line by
//! line rather than parsed as HTML; only a line that starts with the marker counts.

/// Prefix a trimmed line must start with to be considered.
pub const BMSTABLE_MARKER: &str = "<meta name=\"bmstable\"";

const CONTENT_ATTR: &str = "content";

/// First trimmed line starting with [`BMSTABLE_MARKER`].
pub fn find_marker_line(html: &str) -> Option<&str> {
    html.lines()
        .map(str::trim)
        .find(|line| line.starts_with(BMSTABLE_MARKER))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    SeekingOpen,
    SeekingClose { start: usize },
}

/// Value of the double-quoted `content` attribute on `line`.
///
/// Returns `None` when the attribute name or either quote is missing.
pub fn extract_content(line: &str) -> Option<&str> {
    let attr = line.find(CONTENT_ATTR)?;
    let from = attr + CONTENT_ATTR.len();

    let mut state = QuoteState::SeekingOpen;
    for (offset, c) in line[from..].char_indices() {
        if c != '"' {
            continue;
        }
        let pos = from + offset;
        match state {
            QuoteState::SeekingOpen => state = QuoteState::SeekingClose { start: pos + 1 },
            QuoteState::SeekingClose { start } => return Some(&line[start..pos]),
        }
    }
    None
}
