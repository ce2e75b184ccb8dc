//! Append-only audit log
//!
//! The log is opened before a dataset is rewritten, so a log that can't be
//! written stops the operation before anything changes on disk.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};

use super::entry::AuditEntry;

/// Location of the JSON-lines audit log
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Open the log for appending
    pub fn open(&self) -> TrackerResult<AuditSession> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                TrackerError::Audit(format!(
                    "Failed to open audit log {}: {}",
                    self.log_path.display(),
                    e
                ))
            })?;
        Ok(AuditSession { file })
    }
}

/// An open audit log
pub struct AuditSession {
    file: File,
}

impl AuditSession {
    /// Append one entry as a JSON line and flush
    pub fn record(&mut self, entry: &AuditEntry) -> TrackerResult<()> {
        let json = serde_json::to_string(entry)
            .map_err(|e| TrackerError::Audit(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(self.file, "{}", json)
            .and_then(|()| self.file.flush())
            .map_err(|e| TrackerError::Audit(format!("Failed to write audit entry: {}", e)))
    }
}

/// Every entry in the log at `path`, oldest first
#[cfg(test)]
pub(crate) fn read_log(path: &std::path::Path) -> Vec<AuditEntry> {
    if !path.exists() {
        return Vec::new();
    }
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}
