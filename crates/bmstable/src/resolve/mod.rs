//! Entry URL resolution.
//!
//! An entry URL is either the JSON header itself or an HTML page carrying a
//! `<meta name="bmstable">` tag that points at it.

mod meta;
mod url;

pub use meta::{BMSTABLE_MARKER, extract_content, find_marker_line};
pub use url::{directory_prefix, is_absolute, resolve_against};

use tracing::debug;

use crate::error::{Error, Result, Stage};
use crate::source::{Transport, fetch_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Html,
    Json,
}

impl EntryKind {
    pub fn detect(url: &str) -> Result<Self> {
        if url.ends_with(".html") {
            Ok(EntryKind::Html)
        } else if url.ends_with(".json") {
            Ok(EntryKind::Json)
        } else {
            Err(Error::format(url, "entry URL must end with .html or .json"))
        }
    }
}

/// Locate the header URL advertised by an HTML table page.
pub fn header_url_from_html(page_url: &str, html: &str) -> Result<String> {
    let line = find_marker_line(html)
        .ok_or_else(|| Error::format(page_url, format!("no {BMSTABLE_MARKER}> tag")))?;
    let content = extract_content(line)
        .ok_or_else(|| Error::format(page_url, "cannot find 'content' field"))?;
    if content.is_empty() {
        return Err(Error::format(page_url, "empty 'content' field"));
    }
    Ok(resolve_against(page_url, content))
}

/// Absolute URL of the JSON header for `entry_url`, fetching the page if needed.
pub fn resolve_header_url<T: Transport + ?Sized>(transport: &T, entry_url: &str) -> Result<String> {
    match EntryKind::detect(entry_url)? {
        EntryKind::Json => Ok(entry_url.to_string()),
        EntryKind::Html => {
            let html = fetch_text(transport, entry_url, Stage::EntryPage)?;
            let header_url = header_url_from_html(entry_url, &html)?;
            debug!(entry = entry_url, header = %header_url, "Found bmstable meta tag");
            Ok(header_url)
        }
    }
}
