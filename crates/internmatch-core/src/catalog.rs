//! CSV catalog loader.
//!
//! Reads rows into [`RawListing`]s. Headers are matched by name, unknown
//! columns are ignored, and empty cells become `None`.
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::RawListing;

#[derive(Debug, Clone)]
pub struct CatalogReader {
    delimiter: u8,
}

impl Default for CatalogReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CatalogReader {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn read_path(&self, path: &Path) -> Result<Vec<RawListing>> {
        let source = path.display().to_string();
        let reader = self
            .builder()
            .from_path(path)
            .map_err(|e| Error::Catalog { path: source.clone(), source: e })?;
        let rows = Self::collect(reader, &source)?;
        tracing::info!(path = %source, rows = rows.len(), "catalog loaded");
        Ok(rows)
    }

    /// Reads from any byte source; `source` labels errors.
    pub fn read_from<R: Read>(&self, input: R, source: &str) -> Result<Vec<RawListing>> {
        Self::collect(self.builder().from_reader(input), source)
    }

    fn builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder.delimiter(self.delimiter).has_headers(true).trim(csv::Trim::Headers).flexible(true);
        builder
    }

    fn collect<R: Read>(mut reader: csv::Reader<R>, source: &str) -> Result<Vec<RawListing>> {
        reader
            .deserialize::<RawListing>()
            .map(|row| row.map_err(|e| Error::Catalog { path: source.to_string(), source: e }))
            .collect()
    }
}
