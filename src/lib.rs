//! expense-tracker - Personal expense ledger for the terminal
//!
//! Records expenses and per-category monthly budgets in two CSV files and
//! derives monthly/weekly summaries, a budget comparison and a
//! spending-by-category chart from them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expenses, budgets, money and time periods
//! - `storage`: CSV file storage layer
//! - `audit`: Audit logging of every mutation
//! - `services`: Logging expenses, setting budgets, charting
//! - `reports`: Summary pivots and budget comparison
//! - `display`: Plain-text formatting helpers
//! - `tui`: Chart rendering
//! - `shell`: The interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
//! use expense_tracker::storage::Storage;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths).with_audit(settings.audit_enabled);
//! ```

pub mod audit;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod shell;
pub mod storage;
pub mod tui;

pub use error::{TrackerError, TrackerResult};
