//! Payload decoding.
//!
//! Some table sites serve pretty-printed JSON with stray byte-order marks and
//! literal line breaks inside string values, and a few older pages are still
//! Shift_JIS. Payloads are decoded to text, stripped of `\r`, `\n` and U+FEFF,
//! and only then handed to `serde_json`.

use std::borrow::Cow;

use encoding_rs::{SHIFT_JIS, UTF_8};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Error, Result, Stage};
use crate::source::{Transport, TransportError};

const NOISE: [char; 3] = ['\r', '\n', '\u{feff}'];

/// Decode raw bytes as UTF-8 (BOM sniffed), falling back to Shift_JIS.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if !had_errors {
        return text;
    }

    let (sjis, _, sjis_errors) = SHIFT_JIS.decode(bytes);
    if sjis_errors {
        warn!("Payload is neither valid UTF-8 nor Shift_JIS, using lossy UTF-8");
        return text;
    }
    warn!("Payload is not valid UTF-8, decoded as Shift_JIS");
    sjis
}

/// Remove every carriage return, line feed and byte-order mark.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    if text.contains(NOISE) {
        Cow::Owned(text.chars().filter(|c| !NOISE.contains(c)).collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// Sanitize and decode a JSON document.
pub fn decode_json<T: DeserializeOwned>(text: &str) -> serde_json::Result<T> {
    serde_json::from_str(&sanitize(text))
}

fn fetch_bytes<T: Transport + ?Sized>(transport: &T, url: &str, stage: Stage) -> Result<Vec<u8>> {
    debug!(%stage, url, "Fetching");
    transport.get(url).map_err(|e| match e {
        TransportError::Network(message) => Error::Network {
            stage,
            url: url.to_string(),
            message,
        },
        TransportError::Read(message) => Error::Read {
            stage,
            url: url.to_string(),
            message,
        },
    })
}

/// Fetch `url` and decode it to text.
pub fn fetch_text<T: Transport + ?Sized>(transport: &T, url: &str, stage: Stage) -> Result<String> {
    let bytes = fetch_bytes(transport, url, stage)?;
    Ok(decode_text(&bytes).into_owned())
}

/// Fetch `url` and decode it as JSON into `R`.
pub fn fetch_json<R, T>(transport: &T, url: &str, stage: Stage) -> Result<R>
where
    R: DeserializeOwned,
    T: Transport + ?Sized,
{
    let bytes = fetch_bytes(transport, url, stage)?;
    decode_json(&decode_text(&bytes)).map_err(|source| Error::Decode {
        stage,
        url: url.to_string(),
        source,
    })
}
