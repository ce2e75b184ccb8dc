//! File I/O utilities for the CSV datasets
//!
//! Every write replaces the whole file: rows go to a temp file in the same
//! directory, which is synced and then renamed over the target.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// Create a CSV file containing only `header` if it doesn't exist yet
///
/// Returns true if the file was created.
pub fn create_with_header<P: AsRef<Path>>(path: P, header: &[&str]) -> TrackerResult<bool> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }

    let rows: &[()] = &[];
    write_csv_atomic(path, header, rows)?;
    Ok(true)
}

/// Read every row of a CSV file, checking the header first
///
/// A missing file reads as empty. A header that differs from `header`, or a
/// row that doesn't deserialize, is reported as a corrupt file.
pub fn read_csv<T, P>(path: P, header: &[&str]) -> TrackerResult<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let found: Vec<String> = reader
        .headers()
        .map_err(|e| TrackerError::corrupt(path, e.to_string()))?
        .iter()
        .map(|h| h.trim().trim_start_matches('\u{feff}').to_string())
        .collect();

    if found != header {
        return Err(TrackerError::corrupt(
            path,
            format!(
                "expected header '{}', found '{}'",
                header.join(","),
                found.join(",")
            ),
        ));
    }

    reader
        .deserialize()
        .map(|row| {
            row.map_err(|e| {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                TrackerError::corrupt(path, format!("line {}: {}", line, e))
            })
        })
        .collect()
}

/// Write `header` and all `rows` to a CSV file atomically
pub fn write_csv_atomic<T, P>(path: P, header: &[&str], rows: &[T]) -> TrackerResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    let buffered = writer
        .into_inner()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;
    buffered
        .get_ref()
        .sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
