//! Tag value object.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const TAG_CONSTRAINTS: &str = "Tags names should be alphanumeric";

/// A single-word alphanumeric tag attached to a person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(tag: impl Into<String>) -> Result<Self, ValidationError> {
        let tag = tag.into();

        if tag.trim().is_empty() {
            return Err(ValidationError::BlankInput("tag"));
        }
        if !Self::is_valid(&tag) {
            return Err(ValidationError::ValueFormat {
                field: "tag",
                message: TAG_CONSTRAINTS,
            });
        }

        Ok(Self(tag))
    }

    pub fn is_valid(tag: &str) -> bool {
        !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Tag {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
