//! Audit logging
//!
//! Every expense logged and every budget set is recorded as one JSON line in
//! `audit.log`, with the row's contents before and after the change.

mod entry;
mod logger;

pub use entry::{AuditEntry, Change, Dataset};
pub use logger::{AuditLogger, AuditSession};

#[cfg(test)]
pub(crate) use logger::read_log;
