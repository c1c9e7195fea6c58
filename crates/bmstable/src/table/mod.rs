//! Difficulty table data model and header normalization.
//!
//! - `Table`, `ChartEntry`, `Course` - the canonical output
//! - `TableHeader` - normalized header awaiting its chart list
//! - level label coercion and course layout normalization

mod course;
mod header;
mod level;
mod types;

pub use course::{CourseLayout, normalize_courses};
pub(crate) use header::RawHeader;
pub use header::TableHeader;
pub use level::{coerce_level, coerce_level_order};
pub use types::*;
