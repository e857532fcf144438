//! Phone and OtherPhones value objects.

use super::errors::ValidationError;
use crate::parsing::{parse_labeled_values, render_labeled_values, LabelPolicy, LabeledValue};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const PHONE_CONSTRAINTS: &str = "Phone numbers should only contain numbers, and it should be at \
     least 3 digits long, optionally with a +country code prefix and an xEXT extension";

pub(crate) static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\+[0-9]{1,3}\s*)?[0-9]{3,}(?:\s*x[0-9]+)?$").expect("Failed to compile phone regex")
});

/// A person's main phone number.
///
/// The main phone is the identity key of a person, see
/// [`Person::is_same_person`](crate::models::Person::is_same_person).
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let phone = Phone::new("+65 91234567").unwrap();
/// assert_eq!(phone.as_str(), "+65 91234567");
/// assert!(Phone::new("91").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Optional `+` country code of 1 to 3 digits
    /// - At least 3 digits
    /// - Optional `x` extension
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BlankInput` for blank input and
    /// `ValidationError::ValueFormat` otherwise.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if phone.trim().is_empty() {
            return Err(ValidationError::BlankInput("phone"));
        }
        if !Self::is_valid(&phone) {
            return Err(ValidationError::ValueFormat {
                field: "phone",
                message: PHONE_CONSTRAINTS,
            });
        }

        Ok(Self(phone))
    }

    pub fn is_valid(phone: &str) -> bool {
        PHONE_REGEX.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero or more secondary phone numbers, each optionally labeled.
///
/// Blank input means "no other phones". A single number may stand alone;
/// two or more must all be labeled, e.g. `91234567 (home) 61234567 (office)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct OtherPhones(Vec<LabeledValue>);

impl OtherPhones {
    /// Parse the other-phones field.
    ///
    /// # Errors
    ///
    /// Any labeled-value grammar or format failure, with field `other phone`.
    pub fn new(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        let text = text.as_ref();
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        parse_labeled_values(
            "other phone",
            text,
            LabelPolicy::Optional,
            &PHONE_REGEX,
            PHONE_CONSTRAINTS,
        )
        .map(Self)
    }

    pub fn entries(&self) -> &[LabeledValue] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `phone` equals one of the numbers (labels are ignored).
    pub fn contains_phone(&self, phone: &Phone) -> bool {
        self.0.iter().any(|entry| entry.value == phone.as_str())
    }
}

impl Serialize for OtherPhones {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OtherPhones {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        OtherPhones::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for OtherPhones {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_labeled_values(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = Phone::new("93121534").unwrap();
        assert_eq!(phone.as_str(), "93121534");
    }

    #[test]
    fn test_phone_validates_format() {
        assert_eq!(Phone::new(""), Err(ValidationError::BlankInput("phone")));
        assert!(Phone::new(" ").is_err());
        assert!(Phone::new("91").is_err());
        assert!(Phone::new("+65").is_err());
        assert!(Phone::new("phone").is_err());
        assert!(Phone::new("9011p041").is_err());
        assert!(Phone::new("9312 1534").is_err());
        assert!(Phone::new("+1234 5678").is_err());
        assert!(Phone::new("٩١٢٣٤٥").is_err());

        assert!(Phone::new("911").is_ok());
        assert!(Phone::new("124293842033123").is_ok());
        assert!(Phone::new("+65 91234567").is_ok());
        assert!(Phone::new("+6591234567").is_ok());
        assert!(Phone::new("91234567 x123").is_ok());
        assert!(Phone::new("+1 5551234x9").is_ok());
    }

    #[test]
    fn test_phone_serialization() {
        let phone = Phone::new("+65 91234567").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+65 91234567\"");

        let back: Phone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, phone);
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_other_phones_blank_is_empty() {
        assert!(OtherPhones::new("").unwrap().is_empty());
        assert!(OtherPhones::new("   ").unwrap().is_empty());
        assert_eq!(OtherPhones::new("").unwrap().to_string(), "");
    }

    #[test]
    fn test_other_phones_single_and_labeled() {
        let single = OtherPhones::new("61234567").unwrap();
        assert_eq!(single.entries(), &[LabeledValue::unlabeled("61234567")]);

        let many = OtherPhones::new("91234567 (home) 61234567 (office)").unwrap();
        assert_eq!(
            many.entries(),
            &[
                LabeledValue::labeled("91234567", "home"),
                LabeledValue::labeled("61234567", "office"),
            ]
        );
        assert_eq!(many.to_string(), "91234567 (home) 61234567 (office)");
    }

    #[test]
    fn test_other_phones_rejects_invalid() {
        assert!(OtherPhones::new("+65").is_err());
        assert!(OtherPhones::new("91234567 61234567").is_err());
        assert!(matches!(
            OtherPhones::new("91234567 (home) 61234567"),
            Err(ValidationError::UnpairedValue("other phone"))
        ));
        assert!(matches!(
            OtherPhones::new("91234567 (home) 91234567 (work)"),
            Err(ValidationError::DuplicateValue { .. })
        ));
    }

    #[test]
    fn test_other_phones_contains_phone_ignores_labels() {
        let others = OtherPhones::new("91234567 (home) 61234567 (office)").unwrap();
        assert!(others.contains_phone(&Phone::new("61234567").unwrap()));
        assert!(!others.contains_phone(&Phone::new("81234567").unwrap()));
        assert!(!others.contains_phone(&Phone::new("+65 61234567").unwrap()));
    }

    #[test]
    fn test_other_phones_serde() {
        let others = OtherPhones::new("91234567 (home) 61234567 (office)").unwrap();
        let json = serde_json::to_string(&others).unwrap();
        assert_eq!(json, "\"91234567 (home) 61234567 (office)\"");

        let back: OtherPhones = serde_json::from_str(&json).unwrap();
        assert_eq!(back, others);

        let empty: OtherPhones = serde_json::from_str("\"\"").unwrap();
        assert!(empty.is_empty());
    }
}
