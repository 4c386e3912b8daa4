//! Loading segment tables and schema mappings from disk.
//!
//! This is the only fallible surface of the crate. The roster pipeline itself
//! absorbs bad data into defaults; failing to open or decode a file is
//! reported here instead.

use crate::roster::{SCHEMA_VERSION, SchemaMapping};
use crate::{FieldValue, SegmentRecord};
use log::{debug, warn};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for loading operations
pub type Result<T> = std::result::Result<T, SourceError>;

/// Errors raised while reading source files
#[derive(Error, Debug)]
pub enum SourceError {
    /// A file could not be opened or read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed schema mapping
    #[error("invalid schema mapping: {0}")]
    Schema(#[from] toml::de::Error),

    /// Schema mapping written for another version of this crate
    #[error("unsupported schema mapping version {found} (expected {})", SCHEMA_VERSION)]
    UnsupportedSchemaVersion { found: u32 },
}

impl SourceError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        SourceError::Io { path: path.to_path_buf(), source }
    }
}

/// Read a headed CSV table of segment records.
///
/// Every cell is kept as text; numeric coercion happens in the pipeline so
/// codes with leading zeros survive. Short rows are accepted and simply lack
/// the trailing columns.
pub fn read_segments<R: Read>(reader: R) -> Result<Vec<SegmentRecord>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let mut row = SegmentRecord::new();
        for (column, cell) in headers.iter().zip(record.iter()) {
            row.insert(column, FieldValue::Text(cell.to_string()));
        }
        rows.push(row);
    }

    debug!("[source] read {} rows with {} columns", rows.len(), headers.len());
    Ok(rows)
}

/// Read a CSV segment table from `path`.
pub fn load_segments(path: impl AsRef<Path>) -> Result<Vec<SegmentRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| SourceError::io(path, err))?;
    read_segments(file)
}

/// Read a TOML [`SchemaMapping`] from `path`.
pub fn load_schema(path: impl AsRef<Path>) -> Result<SchemaMapping> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|err| SourceError::io(path, err))?;
    let mapping: SchemaMapping = toml::from_str(&text)?;

    if mapping.version != SCHEMA_VERSION {
        return Err(SourceError::UnsupportedSchemaVersion { found: mapping.version });
    }
    if mapping.columns.is_empty() {
        warn!("schema mapping {} names no columns", path.display());
    }
    Ok(mapping)
}
