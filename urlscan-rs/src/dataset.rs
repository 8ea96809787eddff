//! Labeled URL dataset loading
//!
//! Reads `(url, category)` rows from CSV. Rows missing either field are
//! reported as `MalformedRecord`; the configured policy decides whether
//! they are skipped or abort the load.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::{DatasetConfig, MalformedPolicy};
use crate::error::{RecordField, Result, ScanError};

/// One labeled URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    pub url: String,
    pub category: String,
}

impl UrlRecord {
    pub fn new(url: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            category: category.into(),
        }
    }
}

/// Records that survived loading
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Well-formed records in file order
    pub records: Vec<UrlRecord>,
    /// Malformed rows dropped under the skip policy
    pub skipped: u64,
}

/// Load a CSV dataset from disk
pub fn load_csv(path: &Path, config: &DatasetConfig) -> Result<Dataset> {
    info!("Loading dataset from {}", path.display());
    let file = File::open(path)?;
    read_csv(file, config)
}

/// Read a CSV dataset from any reader; the first row must be a header
pub fn read_csv<R: Read>(reader: R, config: &DatasetConfig) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let url_idx = column_index(&headers, &config.url_column)?;
    let category_idx = column_index(&headers, &config.category_column)?;

    let mut dataset = Dataset::default();

    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        match parse_row(&row, url_idx, category_idx, line) {
            Ok(record) => dataset.records.push(record),
            Err(e) if config.on_malformed == MalformedPolicy::Skip => {
                warn!("Skipping row: {}", e);
                dataset.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    debug!(
        "Read {} records ({} skipped)",
        dataset.records.len(),
        dataset.skipped
    );

    Ok(dataset)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| ScanError::MissingColumn(name.to_string()))
}

fn parse_row(
    row: &csv::StringRecord,
    url_idx: usize,
    category_idx: usize,
    line: u64,
) -> Result<UrlRecord> {
    let require = |idx: usize, field: RecordField| {
        row.get(idx)
            .filter(|value| !value.is_empty())
            .ok_or(ScanError::MalformedRecord { line, field })
    };

    let url = require(url_idx, RecordField::Url)?;
    let category = require(category_idx, RecordField::Category)?;

    Ok(UrlRecord::new(url, category))
}
