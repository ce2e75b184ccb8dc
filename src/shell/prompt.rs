//! Line-oriented prompting and field parsing

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;

/// Print `prompt` and read one line
///
/// Returns `None` at end of input. Only the line terminator is removed.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> TrackerResult<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Print `prompt` and read one trimmed field; end of input reads as empty
pub fn prompt_string<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> TrackerResult<String> {
    Ok(read_line(input, out, prompt)?
        .map(|line| line.trim().to_string())
        .unwrap_or_default())
}

/// Parse an optional `YYYY-MM-DD` date; blank means none
pub fn parse_date(s: &str) -> TrackerResult<Option<NaiveDate>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| TrackerError::Validation(format!("Invalid date: '{}' (expected YYYY-MM-DD)", s)))
}

/// Parse a required amount
pub fn parse_amount(s: &str) -> TrackerResult<Money> {
    if s.trim().is_empty() {
        return Err(TrackerError::Validation("Amount is required".into()));
    }
    Money::parse(s).map_err(|e| TrackerError::Validation(e.to_string()))
}
