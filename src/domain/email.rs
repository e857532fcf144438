//! Email value object.

use super::errors::ValidationError;
use crate::parsing::{parse_labeled_values, render_labeled_values, LabelPolicy, LabeledValue};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const EMAIL_CONSTRAINTS: &str = "Emails should be of the format local-part@domain. The \
     local-part should only contain alphanumeric characters and the special characters +_.- and may \
     not start or end with a special character. The domain name is made up of domain labels \
     separated by periods; each label starts and ends with an alphanumeric character, may contain \
     hyphens, and the last label is at least 2 characters long. A single email may be labeled, e.g. \
     EMAIL (LABEL); multiple emails must all be labeled, e.g. EMAIL1 (LABEL1) EMAIL2 (LABEL2)";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+([+_.-][A-Za-z0-9]+)*@([A-Za-z0-9]+(-[A-Za-z0-9]+)*\.)*([A-Za-z0-9]+(-[A-Za-z0-9]+)*){2,}$",
    )
    .expect("Failed to compile email regex")
});

/// One or more email addresses, each optionally labeled.
///
/// # Example
///
/// ```
/// use address_book::domain::Email;
///
/// let email = Email::new("alice@example.com (work) alice@home.org (home)").unwrap();
/// assert_eq!(email.primary(), "alice@example.com");
/// assert_eq!(email.entries().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(Vec<LabeledValue>);

impl Email {
    /// Create a new Email, validating every address and label.
    ///
    /// # Validation Rules
    ///
    /// - Must not be blank
    /// - Every value matches `local-part@domain`
    /// - Two or more values must all be labeled
    /// - No value or label may repeat
    ///
    /// # Errors
    ///
    /// Returns the first labeled-value failure for field `email`.
    pub fn new(email: impl AsRef<str>) -> Result<Self, ValidationError> {
        parse_labeled_values(
            "email",
            email.as_ref(),
            LabelPolicy::Optional,
            &EMAIL_REGEX,
            EMAIL_CONSTRAINTS,
        )
        .map(Self)
    }

    /// Returns true if `email` is a valid email field.
    pub fn is_valid(email: &str) -> bool {
        Self::new(email).is_ok()
    }

    pub fn entries(&self) -> &[LabeledValue] {
        &self.0
    }

    /// The first email address given.
    pub fn primary(&self) -> &str {
        // Construction guarantees at least one entry.
        self.0.first().map(|entry| entry.value.as_str()).unwrap_or("")
    }
}

// Serde support - serialize as the rendered field
impl Serialize for Email {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Email::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_labeled_values(&self.0))
    }
}
