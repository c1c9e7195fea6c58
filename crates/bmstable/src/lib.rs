//! # bmstable
//!
//! Resolves BMS difficulty tables published by community sites and normalizes
//! them into a single [`Table`] shape.
//!
//! This crate provides:
//! - Entry URL resolution (`.json` header or `.html` page with a `bmstable` meta tag)
//! - Payload decoding tolerant of BOMs, stray line breaks and Shift_JIS pages
//! - Header normalization: relative URLs, mixed-type level order, three course layouts
//! - A [`Transport`] seam with a `ureq` implementation and an in-memory mock
//!
//! ```no_run
//! let table = bmstable::parse_from_url("https://stellabms.xyz/st/table.html")?;
//! println!("{} ({} charts)", table.name, table.charts.len());
//! # Ok::<(), bmstable::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod json;
pub mod parser;
pub mod resolve;
pub mod source;
pub mod table;

pub use config::{FetchConfig, FetchConfigBuilder};
pub use error::{Error, ErrorKind, Result, Stage};
pub use json::JsonKind;
pub use parser::{TableParser, parse_from_url};
pub use resolve::{EntryKind, directory_prefix, resolve_header_url};
pub use source::{HttpTransport, Transport, TransportError};
pub use table::{ChartEntry, Course, CourseLayout, HashKind, Table, TableHeader};
