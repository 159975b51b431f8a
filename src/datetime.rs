// src/datetime.rs

//! Parsing of user-supplied timestamps.
//!
//! Dates reach the query engine already parsed; this is the only place that
//! turns text into a `NaiveDateTime`.

use crate::error::{MlogError, Result};
use chrono::{Local, NaiveDateTime};

const INPUT_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses `YYYY-MM-DDTHH:MM:SS`, optionally with fractional seconds and
/// wrapped in square brackets.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
    let cleaned = input
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .trim();

    if cleaned.is_empty() {
        return Err(MlogError::Validation("Empty date. Use YYYY-MM-DDTHH:MM:SS.".to_string()));
    }

    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(cleaned, fmt).ok())
        .ok_or_else(|| {
            MlogError::Validation(format!(
                "Invalid date '{}'. Use YYYY-MM-DDTHH:MM:SS.",
                input.trim()
            ))
        })
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(DISPLAY_FORMAT).to_string()
}

/// Local wall-clock time, the reference for `created_at`.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
