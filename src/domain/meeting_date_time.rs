//! MeetingDateTime value object.

use super::errors::ValidationError;
use crate::parsing::{format_date_time, parse_date_time};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// When a meeting happens, to the minute.
///
/// Parsed from one of the accepted input spellings and displayed in the
/// canonical `Mon dd yyyy HH:mm` form. Stored as ISO-8601.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeetingDateTime(NaiveDateTime);

impl MeetingDateTime {
    /// Parse user input; surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// `BlankInput` for blank input, `InvalidDateTimeFormat` otherwise.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::BlankInput("date and time"));
        }
        parse_date_time(text).map(Self)
    }

    pub fn value(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for MeetingDateTime {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for MeetingDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_date_time(&self.0))
    }
}
