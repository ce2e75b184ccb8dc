//! Terminal chart rendering
//!
//! The spending chart is drawn with ratatui when attached to a real
//! terminal, and as plain text bars otherwise.

pub mod chart;
pub mod terminal;

pub use chart::{ChartRenderer, ChartSlice, TerminalChart, TextChart};
