//! Table resolution pipeline.
//!
//! entry URL -> header URL -> header document -> chart-list document -> [`Table`].
//! At most two documents are fetched per table (three for an HTML entry page),
//! strictly one after another.

use tracing::info;

use crate::config::FetchConfig;
use crate::error::{Result, Stage};
use crate::resolve::resolve_header_url;
use crate::source::{HttpTransport, Transport, fetch_json};
use crate::table::{ChartEntry, RawHeader, Table, TableHeader};

pub struct TableParser<T: Transport> {
    transport: T,
}

impl TableParser<HttpTransport> {
    pub fn with_config(config: FetchConfig) -> Self {
        Self::new(HttpTransport::new(config))
    }
}

impl Default for TableParser<HttpTransport> {
    fn default() -> Self {
        Self::new(HttpTransport::default())
    }
}

impl<T: Transport> TableParser<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Resolve `url` (an `.html` table page or `.json` header) into a full table.
    pub fn parse(&self, url: &str) -> Result<Table> {
        let header = self.parse_header(url)?;
        let charts = self.parse_charts(&header.data_url)?;
        let table = header.into_table(charts);

        info!(
            name = %table.name,
            charts = table.charts.len(),
            courses = table.courses.len(),
            "Resolved table from {}",
            url
        );
        Ok(table)
    }

    /// Resolve and normalize only the header document.
    pub fn parse_header(&self, url: &str) -> Result<TableHeader> {
        let header_url = resolve_header_url(&self.transport, url)?;
        let raw: RawHeader = fetch_json(&self.transport, &header_url, Stage::Header)?;
        raw.normalize(&header_url)
    }

    /// Fetch the chart list at an already resolved `data_url`.
    ///
    /// `null` entries decode as empty charts.
    pub fn parse_charts(&self, data_url: &str) -> Result<Vec<ChartEntry>> {
        let charts: Vec<Option<ChartEntry>> =
            fetch_json(&self.transport, data_url, Stage::ChartList)?;
        Ok(charts.into_iter().map(Option::unwrap_or_default).collect())
    }
}

/// Resolve a table over HTTP with the default fetch configuration.
pub fn parse_from_url(url: &str) -> Result<Table> {
    TableParser::default().parse(url)
}
