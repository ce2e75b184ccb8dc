//! Display formatting for terminal output

pub mod report;

pub use report::{format_bar, format_percentage, left_align, section_header, truncate};
