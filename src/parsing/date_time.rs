//! Date-time normalization for meeting times.
//!
//! Input is accepted in a small, fixed set of literal patterns. Each pattern is
//! guarded by a shape regex so that field widths are exact (chrono alone would
//! accept single-digit days or extra whitespace), then resolved by chrono,
//! which rejects impossible calendar dates and times.

use crate::domain::errors::ValidationError;
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

/// Constraint message shown when no accepted pattern matches.
pub const DATE_TIME_CONSTRAINTS: &str = "Date and time should be a valid calendar date and time in \
     one of these formats: dd-MM-yyyy HHmm, yyyy-MM-dd HH:mm, yyyy-MM-dd HHmm, yyyy/MM/dd HH:mm, \
     yyyy/MM/dd HHmm, dd/MM/yyyy HH:mm, dd/MM/yyyy HHmm, dd-MM-yyyy HH:mm";

/// Canonical display form, e.g. `Dec 28 2025 14:00`.
pub const DISPLAY_FORMAT: &str = "%b %d %Y %H:%M";

/// Accepted input patterns in priority order: (shape, chrono format).
const ACCEPTED_PATTERNS: [(&str, &str); 8] = [
    (r"^[0-9]{2}-[0-9]{2}-[0-9]{4} [0-9]{4}$", "%d-%m-%Y %H%M"),
    (r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}$", "%Y-%m-%d %H:%M"),
    (r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{4}$", "%Y-%m-%d %H%M"),
    (r"^[0-9]{4}/[0-9]{2}/[0-9]{2} [0-9]{2}:[0-9]{2}$", "%Y/%m/%d %H:%M"),
    (r"^[0-9]{4}/[0-9]{2}/[0-9]{2} [0-9]{4}$", "%Y/%m/%d %H%M"),
    (r"^[0-9]{2}/[0-9]{2}/[0-9]{4} [0-9]{2}:[0-9]{2}$", "%d/%m/%Y %H:%M"),
    (r"^[0-9]{2}/[0-9]{2}/[0-9]{4} [0-9]{4}$", "%d/%m/%Y %H%M"),
    (r"^[0-9]{2}-[0-9]{2}-[0-9]{4} [0-9]{2}:[0-9]{2}$", "%d-%m-%Y %H:%M"),
];

static PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    ACCEPTED_PATTERNS
        .iter()
        .map(|(shape, format)| {
            (
                Regex::new(shape).expect("Failed to compile date-time shape regex"),
                *format,
            )
        })
        .collect()
});

/// Parse `text` using the first accepted pattern that matches all of it.
///
/// # Errors
///
/// Returns `ValidationError::InvalidDateTimeFormat` if no pattern matches or
/// the matched fields do not form a real date and time.
pub fn parse_date_time(text: &str) -> Result<NaiveDateTime, ValidationError> {
    for (shape, format) in PATTERNS.iter() {
        if !shape.is_match(text) {
            continue;
        }
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(parsed);
        }
    }

    info!("Invalid date time format: {}", text);
    Err(ValidationError::InvalidDateTimeFormat(text.to_string()))
}

/// Render a date-time in the canonical display form.
pub fn format_date_time(date_time: &NaiveDateTime) -> String {
    date_time.format(DISPLAY_FORMAT).to_string()
}
