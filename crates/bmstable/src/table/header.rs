use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::json::de::null_as_default;
use crate::resolve::resolve_against;
use crate::table::{ChartEntry, Course, Table, coerce_level_order, normalize_courses};

/// Header document as published, before normalization.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawHeader {
    #[serde(deserialize_with = "null_as_default")]
    data_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    original_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    symbol: String,
    #[serde(default, deserialize_with = "null_as_default")]
    level_order: Vec<Value>,
    #[serde(default, rename = "course", deserialize_with = "null_as_default")]
    courses: Vec<Value>,
}

impl RawHeader {
    pub(crate) fn normalize(self, header_url: &str) -> Result<TableHeader> {
        if self.data_url.is_empty() {
            return Err(Error::format(header_url, "header has an empty data_url"));
        }

        Ok(TableHeader {
            header_url: header_url.to_string(),
            data_url: resolve_against(header_url, &self.data_url),
            name: self.name,
            original_url: self.original_url,
            symbol: self.symbol,
            level_order: coerce_level_order(&self.level_order),
            courses: normalize_courses(&self.courses, header_url)?,
        })
    }
}

/// Every table field except the chart entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableHeader {
    pub header_url: String,
    pub data_url: String,
    pub name: String,
    pub original_url: String,
    pub symbol: String,
    pub level_order: Vec<String>,
    pub courses: Vec<Course>,
}

impl TableHeader {
    pub fn into_table(self, charts: Vec<ChartEntry>) -> Table {
        Table {
            header_url: self.header_url,
            data_url: self.data_url,
            name: self.name,
            original_url: self.original_url,
            symbol: self.symbol,
            level_order: self.level_order,
            charts,
            courses: self.courses,
        }
    }
}
