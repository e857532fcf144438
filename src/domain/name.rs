//! Name value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const NAME_CONSTRAINTS: &str = "Names can only contain alphanumeric characters, spaces, hyphens, \
     apostrophes, accented characters, periods, digits and slashes";
pub const NAME_AT_LEAST_ONE_LETTER: &str = "Names should contain at least one alphabetic character";
pub const NAME_INVALID_START_END: &str =
    "Names should not start or end with a space, hyphen, apostrophe, period or slash";
pub const NAME_NO_CONSECUTIVE_SPECIAL: &str =
    "Names should not contain consecutive spaces, hyphens, apostrophes, periods or slashes";

static LETTER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{L}").expect("Failed to compile name letter regex"));
static CHARSET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}\p{M}0-9 \-'’./]+$").expect("Failed to compile name charset regex")
});

const SPECIAL_CHARACTERS: [char; 6] = [' ', '-', '\'', '’', '.', '/'];

/// A person's full name.
///
/// Rules are checked in a fixed order so the reported message names the first
/// broken rule: blank, no letter, bad character, bad first/last character,
/// repeated special character.
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// let name = Name::new("Anne-Marie O'Neil").unwrap();
/// assert_eq!(name.as_str(), "Anne-Marie O'Neil");
/// assert!(Name::new("bob----by").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating every rule.
    ///
    /// # Errors
    ///
    /// `BlankInput` for blank names, otherwise `ValueFormat` with the message
    /// of the first rule that fails.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::BlankInput("name"));
        }

        let reject = |message| Err(ValidationError::ValueFormat {
            field: "name",
            message,
        });

        if !LETTER_REGEX.is_match(name) {
            return reject(NAME_AT_LEAST_ONE_LETTER);
        }
        if !CHARSET_REGEX.is_match(name) {
            return reject(NAME_CONSTRAINTS);
        }

        let first = name.chars().next();
        let last = name.chars().last();
        if first.is_some_and(is_special) || last.is_some_and(is_special) {
            return reject(NAME_INVALID_START_END);
        }

        let chars: Vec<char> = name.chars().collect();
        if chars
            .windows(2)
            .any(|pair| pair[0] == pair[1] && is_special(pair[0]))
        {
            return reject(NAME_NO_CONSECUTIVE_SPECIAL);
        }

        Ok(())
    }

    /// Returns true if `name` satisfies every name rule.
    pub fn is_valid(name: &str) -> bool {
        Self::validate(name).is_ok()
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

fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(&c)
}

impl TryFrom<String> for Name {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
