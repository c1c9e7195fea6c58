use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::json::de::{label, null_as_default};

/// A fully resolved difficulty table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Absolute URL of the JSON header document.
    pub header_url: String,
    /// Absolute URL of the chart-list document.
    pub data_url: String,
    pub name: String,
    pub original_url: String,
    pub symbol: String,
    /// Level labels in display order.
    pub level_order: Vec<String>,
    pub charts: Vec<ChartEntry>,
    pub courses: Vec<Course>,
}

impl Table {
    /// Course names appearing more than once, in first-seen order.
    ///
    /// Sites are expected to keep names unique but nothing enforces it.
    pub fn duplicate_course_names(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut duplicates = Vec::new();
        for course in &self.courses {
            let count = counts.entry(course.name.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                duplicates.push(course.name.as_str());
            }
        }
        duplicates
    }

    pub fn charts_at_level<'a>(&'a self, level: &'a str) -> impl Iterator<Item = &'a ChartEntry> {
        self.charts.iter().filter(move |chart| chart.level == level)
    }
}

/// One chart listed in the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub artist: String,
    #[serde(deserialize_with = "null_as_default")]
    pub comment: String,
    #[serde(deserialize_with = "label")]
    pub level: String,
    #[serde(alias = "lr2_bmdid", deserialize_with = "label")]
    pub lr2_bmsid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub md5: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sha256: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Title with the difficulty suffix appended.
    #[serde(deserialize_with = "null_as_default")]
    pub name_diff: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url_diff: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashKind {
    #[strum(serialize = "md5")]
    Md5,
    #[strum(serialize = "sha256")]
    Sha256,
}

/// A set of charts cleared in sequence under the listed constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    pub name: String,
    pub md5: Vec<String>,
    pub sha256: Vec<String>,
    pub constraint: Vec<String>,
}

impl Course {
    /// The populated hash sequence, MD5 taking precedence.
    pub fn hashes(&self) -> Option<(HashKind, &[String])> {
        if !self.md5.is_empty() {
            Some((HashKind::Md5, &self.md5))
        } else if !self.sha256.is_empty() {
            Some((HashKind::Sha256, &self.sha256))
        } else {
            None
        }
    }
}
