//! Address value object.

use super::errors::ValidationError;
use crate::parsing::{parse_labeled_values, render_labeled_values, LabelPolicy, LabeledValue};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ADDRESS_CONSTRAINTS: &str = "Addresses can take any values, and it should not be blank. \
     A single address may be labeled, e.g. ADDRESS (LABEL); multiple addresses must all be \
     labeled, e.g. ADDRESS1 (LABEL1) ADDRESS2 (LABEL2)";

// First character must not be whitespace, otherwise " " would pass.
static ADDRESS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S.*$").expect("Failed to compile address regex"));

/// One or more postal addresses, each optionally labeled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(Vec<LabeledValue>);

impl Address {
    pub fn new(address: impl AsRef<str>) -> Result<Self, ValidationError> {
        parse_labeled_values(
            "address",
            address.as_ref(),
            LabelPolicy::Optional,
            &ADDRESS_REGEX,
            ADDRESS_CONSTRAINTS,
        )
        .map(Self)
    }

    pub fn is_valid(address: &str) -> bool {
        Self::new(address).is_ok()
    }

    pub fn entries(&self) -> &[LabeledValue] {
        &self.0
    }
}

impl TryFrom<String> for Address {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_labeled_values(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_valid() {
        for valid in [
            "Blk 456, Den Road, #01-355",
            "-",
            "Leng Inc; 1234 Market St; San Francisco CA 2349879; USA",
            "123 Clementi Ave 3 (home)",
            "123 Clementi Ave 3 (home) 1 Fusionopolis Way (office)",
            "  Jurong West St 74  ",
        ] {
            assert!(Address::is_valid(valid), "address {:?}", valid);
        }
    }

    #[test]
    fn test_address_invalid() {
        assert_eq!(Address::new(""), Err(ValidationError::BlankInput("address")));
        assert_eq!(Address::new("   "), Err(ValidationError::BlankInput("address")));
        assert!(matches!(
            Address::new("123 Clementi Ave 3 (home) 1 Fusionopolis Way"),
            Err(ValidationError::UnpairedValue("address"))
        ));
        assert!(matches!(
            Address::new("123 Clementi Ave 3  (home)"),
            Err(ValidationError::Spacing { .. })
        ));
        assert!(matches!(
            Address::new("A (home) B (home)"),
            Err(ValidationError::DuplicateLabel { .. })
        ));
    }

    #[test]
    fn test_address_trimmed_and_rendered() {
        let address = Address::new("  Jurong West St 74  ").unwrap();
        assert_eq!(address.entries(), &[LabeledValue::unlabeled("Jurong West St 74")]);
        assert_eq!(address.to_string(), "Jurong West St 74");
    }

    #[test]
    fn test_address_serde() {
        let address = Address::new("A (home) B (office)").unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"A (home) B (office)\"");

        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);

        let result: Result<Address, _> = serde_json::from_str("\" \"");
        assert!(result.is_err());
    }
}
