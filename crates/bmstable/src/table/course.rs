//! Course list normalization.
//!
//! Header documents publish courses in one of these layouts:
//!  1. a flat array of course records
//!  2. an array of arrays of course records
//!  3. either of the above where each record keeps its hashes in a nested `charts`
//!     array instead of top-level `md5`/`sha256`
//!
//! The list layout is sniffed from the first element only, and so is the hash kind
//! of a wrapped record. Later elements are expected to follow suit.

use serde::Deserialize;
use serde_json::Value;
use strum::Display;
use tracing::{debug, warn};

use crate::error::{Error, Result, Stage};
use crate::json::JsonKind;
use crate::json::de::{null_as_default, null_items_as_default};
use crate::table::Course;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CourseLayout {
    #[strum(serialize = "flat")]
    Flat,
    #[strum(serialize = "nested")]
    Nested,
}

impl CourseLayout {
    pub fn detect(first: &Value) -> Self {
        if JsonKind::from(first).is_sequence() {
            CourseLayout::Nested
        } else {
            CourseLayout::Flat
        }
    }
}

/// Chart reference found inside a wrapped course record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ChartRef {
    #[serde(deserialize_with = "null_as_default")]
    title: String,
    #[serde(alias = "subTitle", deserialize_with = "null_as_default")]
    subtitle: String,
    #[serde(deserialize_with = "null_as_default")]
    artist: String,
    #[serde(deserialize_with = "null_as_default")]
    md5: String,
    #[serde(deserialize_with = "null_as_default")]
    sha256: String,
}

impl ChartRef {
    /// `title subtitle / artist`, skipping empty parts.
    fn describe(&self) -> String {
        let mut label = self.title.clone();
        if !self.subtitle.is_empty() {
            label.push(' ');
            label.push_str(&self.subtitle);
        }
        if !self.artist.is_empty() {
            label.push_str(" / ");
            label.push_str(&self.artist);
        }
        label
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawCourse {
    #[serde(deserialize_with = "null_as_default")]
    name: String,
    #[serde(deserialize_with = "null_items_as_default")]
    md5: Vec<String>,
    #[serde(deserialize_with = "null_items_as_default")]
    sha256: Vec<String>,
    #[serde(deserialize_with = "null_items_as_default")]
    constraint: Vec<String>,
    #[serde(deserialize_with = "null_items_as_default")]
    charts: Vec<ChartRef>,
}

impl RawCourse {
    /// Project the hash of every nested chart onto the course.
    fn push_up_chart_hashes(&mut self) -> Result<()> {
        let Some(first) = self.charts.first() else {
            return Ok(());
        };

        if !first.md5.is_empty() {
            self.md5 = self.charts.iter().map(|c| c.md5.clone()).collect();
            self.sha256.clear();
            debug!(course = %self.name, count = self.md5.len(), "Pushed up md5 hashes");
        } else if !first.sha256.is_empty() {
            self.sha256 = self.charts.iter().map(|c| c.sha256.clone()).collect();
            self.md5.clear();
            debug!(course = %self.name, count = self.sha256.len(), "Pushed up sha256 hashes");
        } else {
            return Err(Error::Schema {
                course: self.name.clone(),
                message: format!("no sha256 or md5 provided by chart {:?}", first.describe()),
            });
        }
        Ok(())
    }

    fn into_course(mut self) -> Result<Course> {
        self.push_up_chart_hashes()?;
        if self.md5.is_empty() && self.sha256.is_empty() {
            warn!(course = %self.name, "Course has no chart hashes");
        }
        Ok(Course {
            name: self.name,
            md5: self.md5,
            sha256: self.sha256,
            constraint: self.constraint,
        })
    }
}

/// Flatten a header's raw `course` array into uniform courses.
///
/// `header_url` only labels decode errors.
pub fn normalize_courses(raw: &[Value], header_url: &str) -> Result<Vec<Course>> {
    let Some(first) = raw.first() else {
        return Ok(Vec::new());
    };

    let layout = CourseLayout::detect(first);
    debug!(%layout, entries = raw.len(), "Detected course layout");

    let decode_error = |source: serde_json::Error| Error::Decode {
        stage: Stage::Header,
        url: header_url.to_string(),
        source,
    };

    let mut courses = Vec::new();
    match layout {
        CourseLayout::Nested => {
            for group in raw {
                let records = Vec::<Option<RawCourse>>::deserialize(group).map_err(decode_error)?;
                for record in records {
                    courses.push(record.unwrap_or_default().into_course()?);
                }
            }
        }
        CourseLayout::Flat => {
            for item in raw {
                let record = Option::<RawCourse>::deserialize(item).map_err(decode_error)?;
                courses.push(record.unwrap_or_default().into_course()?);
            }
        }
    }
    Ok(courses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    const URL: &str = "http://example.test/header.json";

    fn values(value: Value) -> Vec<Value> {
        match value {
            Value::Array(items) => items,
            other => panic!("expected array, got {other}"),
        }
    }

    #[test]
    fn test_detect_layout() {
        assert_eq!(CourseLayout::detect(&json!([])), CourseLayout::Nested);
        assert_eq!(CourseLayout::detect(&json!({"name": "a"})), CourseLayout::Flat);
        assert_eq!(CourseLayout::detect(&json!("odd")), CourseLayout::Flat);
    }

    #[test]
    fn test_empty_courses() {
        assert!(normalize_courses(&[], URL).unwrap().is_empty());
    }

    #[test]
    fn test_flat_layout() {
        let raw = values(json!([
            {"name": "A", "md5": ["a1", "a2"], "constraint": ["grade_mirror"]},
            {"name": "B", "sha256": ["b1"]},
            {"name": "C", "md5": ["c1"], "extra": true}
        ]));
        let courses = normalize_courses(&raw, URL).unwrap();

        assert_eq!(courses.len(), 3);
        assert_eq!(courses[0].name, "A");
        assert_eq!(courses[0].md5, vec!["a1", "a2"]);
        assert_eq!(courses[0].constraint, vec!["grade_mirror"]);
        assert_eq!(courses[1].sha256, vec!["b1"]);
        assert!(courses[1].md5.is_empty());
        assert_eq!(courses[2].name, "C");
    }

    #[test]
    fn test_nested_layout_preserves_order() {
        let raw = values(json!([
            [{"name": "A", "md5": ["a"]}],
            [{"name": "B", "md5": ["b"]}, {"name": "C", "md5": ["c"]}]
        ]));
        let names: Vec<String> = normalize_courses(&raw, URL)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_nested_layout_rejects_non_array_group() {
        let raw = values(json!([[{"name": "A"}], {"name": "B"}]));
        let err = normalize_courses(&raw, URL).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_push_up_md5() {
        let raw = values(json!([{
            "name": "Wrapped",
            "md5": [],
            "sha256": [],
            "charts": [
                {"title": "One", "md5": "m1"},
                {"title": "Two", "md5": "m2"},
                {"title": "Three", "md5": "m3"}
            ]
        }]));
        let courses = normalize_courses(&raw, URL).unwrap();
        assert_eq!(courses[0].md5, vec!["m1", "m2", "m3"]);
        assert!(courses[0].sha256.is_empty());
    }

    #[test]
    fn test_push_up_sha256() {
        let raw = values(json!([[{
            "name": "Wrapped",
            "charts": [{"sha256": "s1"}, {"sha256": "s2"}]
        }]]));
        let courses = normalize_courses(&raw, URL).unwrap();
        assert_eq!(courses[0].sha256, vec!["s1", "s2"]);
        assert!(courses[0].md5.is_empty());
    }

    #[test]
    fn test_push_up_sniffs_first_chart_only() {
        let raw = values(json!([{
            "name": "Mixed",
            "charts": [{"md5": "m1"}, {"sha256": "s2"}]
        }]));
        let courses = normalize_courses(&raw, URL).unwrap();
        assert_eq!(courses[0].md5, vec!["m1", ""]);
        assert!(courses[0].sha256.is_empty());
    }

    #[test]
    fn test_push_up_without_hashes_fails() {
        let raw = values(json!([{
            "name": "Broken",
            "charts": [{"title": "No hash", "md5": "", "sha256": null}]
        }]));
        let err = normalize_courses(&raw, URL).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
        match err {
            Error::Schema { course, .. } => assert_eq!(course, "Broken"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_null_course_records_become_empty_courses() {
        let raw = values(json!([{"name": "A", "md5": ["a"]}, null]));
        let courses = normalize_courses(&raw, URL).unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[1], Course::default());

        let raw = values(json!([[null, {"name": "B"}]]));
        let courses = normalize_courses(&raw, URL).unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[1].name, "B");
    }

    #[test]
    fn test_null_hash_and_constraint_items() {
        let raw = values(json!([{
            "name": "Gaps",
            "md5": ["a", null],
            "sha256": null,
            "constraint": [null, "ln"]
        }]));
        let courses = normalize_courses(&raw, URL).unwrap();
        assert_eq!(courses[0].md5, vec!["a", ""]);
        assert!(courses[0].sha256.is_empty());
        assert_eq!(courses[0].constraint, vec!["", "ln"]);
    }

    #[test]
    fn test_push_up_error_describes_chart() {
        let raw = values(json!([{
            "name": "Broken",
            "charts": [{"title": "Song", "subtitle": "[ANOTHER]", "artist": "Someone"}]
        }]));
        let err = normalize_courses(&raw, URL).unwrap_err();
        assert!(err.to_string().contains("Song [ANOTHER] / Someone"));
    }

    #[test]
    fn test_null_chart_reference_has_no_hash() {
        let raw = values(json!([{"name": "Nulls", "charts": [null, {"md5": "m"}]}]));
        let err = normalize_courses(&raw, URL).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
    }

    #[test]
    fn test_duplicate_names_pass_through() {
        let raw = values(json!([{"name": "Same"}, {"name": "Same"}]));
        let courses = normalize_courses(&raw, URL).unwrap();
        assert_eq!(courses.len(), 2);
    }
}
