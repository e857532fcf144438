//! MeetingName value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MEETING_NAME_CONSTRAINTS: &str =
    "Meeting names should only contain alphanumeric characters and spaces, and it should not be blank";

static MEETING_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}\p{M}0-9 '\s]+$").expect("Failed to compile meeting name regex")
});

/// The title of a meeting, e.g. `Project sync`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MeetingName(String);

impl MeetingName {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ValidationError::BlankInput("meeting name"));
        }
        if !Self::is_valid(&name) {
            return Err(ValidationError::ValueFormat {
                field: "meeting name",
                message: MEETING_NAME_CONSTRAINTS,
            });
        }

        Ok(Self(name))
    }

    /// Allowed characters, with at least one letter or digit.
    pub fn is_valid(name: &str) -> bool {
        MEETING_NAME_REGEX.is_match(name) && name.chars().any(char::is_alphanumeric)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whole-word, case-insensitive match against any word of the name.
    pub fn contains_word_ignore_case(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.0
            .split_whitespace()
            .any(|part| part.to_lowercase() == word)
    }
}

impl TryFrom<String> for MeetingName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MeetingName> for String {
    fn from(name: MeetingName) -> Self {
        name.0
    }
}

impl fmt::Display for MeetingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
