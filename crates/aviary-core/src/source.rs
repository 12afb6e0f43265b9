//! Tabular record source: CSV with a header row.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// One input record. Missing or blank fields deserialize to empty strings
/// and fail URL validation downstream instead of aborting the batch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpeciesRecord {
    #[serde(default)]
    pub scientific_name: String,
    #[serde(default)]
    pub image_url: String,
}

/// Reads all records from `path` in file order, trimming surrounding
/// whitespace from both fields.
pub fn read_records(path: &Path) -> Result<Vec<SpeciesRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open input CSV: {}", path.display()))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let mut record: SpeciesRecord = row.context("malformed CSV record")?;
        record.scientific_name = record.scientific_name.trim().to_string();
        record.image_url = record.image_url.trim().to_string();
        records.push(record);
    }
    Ok(records)
}
