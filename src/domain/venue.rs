//! Venue value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const VENUE_CONSTRAINTS: &str = "Venue should only contain alphanumeric characters and spaces, \
     and it should not be blank and not contain weird symbols (@, $ etc.)";

static VENUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}\p{M}0-9 ,.'()#&\-/]+$").expect("Failed to compile venue regex")
});

/// Where a meeting takes place, e.g. `Blk 30 #06-40, Cafe`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Venue(String);

impl Venue {
    pub fn new(venue: impl Into<String>) -> Result<Self, ValidationError> {
        let venue = venue.into();

        if venue.trim().is_empty() {
            return Err(ValidationError::BlankInput("venue"));
        }
        if !Self::is_valid(&venue) {
            return Err(ValidationError::ValueFormat {
                field: "venue",
                message: VENUE_CONSTRAINTS,
            });
        }

        Ok(Self(venue))
    }

    pub fn is_valid(venue: &str) -> bool {
        VENUE_REGEX.is_match(venue) && venue.chars().any(char::is_alphanumeric)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Venue {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Venue> for String {
    fn from(venue: Venue) -> Self {
        venue.0
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
