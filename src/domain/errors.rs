//! Domain validation errors.

use std::fmt;

/// Which side of a label the separating space problem was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingIssue {
    /// No single space between a value and its label (or after a label).
    Missing,

    /// More than one space between a value and its label (or after a label).
    Extra,
}

/// Errors that can occur during domain value object validation.
///
/// Every variant carries enough context to render a user-facing message; the
/// command layer turns these into feedback without touching the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input for the named field was empty or whitespace only.
    BlankInput(&'static str),

    /// The `value (label)` separator spacing is wrong.
    Spacing {
        field: &'static str,
        issue: SpacingIssue,
    },

    /// A value that needed a label did not get one.
    UnpairedValue(&'static str),

    /// The same value appears twice in one multi-value field.
    DuplicateValue { field: &'static str, value: String },

    /// The same label appears twice in one multi-value field.
    DuplicateLabel { field: &'static str, label: String },

    /// A value did not satisfy the field's format.
    ValueFormat {
        field: &'static str,
        message: &'static str,
    },

    /// A label did not satisfy the shared label format.
    LabelFormat { field: &'static str, label: String },

    /// The text matched none of the accepted date-time patterns.
    InvalidDateTimeFormat(String),

    /// The main phone number is repeated among the other phone numbers.
    DuplicateMainPhone(String),

    /// An index did not address an existing element.
    IndexOutOfBounds { index: usize, len: usize },
}

impl ValidationError {
    /// The field the error relates to, when there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::BlankInput(field) | Self::UnpairedValue(field) => Some(field),
            Self::Spacing { field, .. }
            | Self::DuplicateValue { field, .. }
            | Self::DuplicateLabel { field, .. }
            | Self::ValueFormat { field, .. }
            | Self::LabelFormat { field, .. } => Some(field),
            Self::InvalidDateTimeFormat(_) => Some("when"),
            Self::DuplicateMainPhone(_) => Some("phone"),
            Self::IndexOutOfBounds { .. } => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankInput(field) => write!(f, "The {} should not be blank", field),
            Self::Spacing {
                field,
                issue: SpacingIssue::Missing,
            } => write!(
                f,
                "Missing space in {}: separate each value and label with exactly one space, e.g. VALUE (LABEL)",
                field
            ),
            Self::Spacing {
                field,
                issue: SpacingIssue::Extra,
            } => write!(
                f,
                "Extra space in {}: separate each value and label with exactly one space, e.g. VALUE (LABEL)",
                field
            ),
            Self::UnpairedValue(field) => write!(
                f,
                "Every {} must have a label when more than one is given, e.g. VALUE1 (LABEL1) VALUE2 (LABEL2)",
                field
            ),
            Self::DuplicateValue { field, value } => {
                write!(f, "Duplicate {} found: {}", field, value)
            }
            Self::DuplicateLabel { field, label } => {
                write!(f, "Duplicate {} label found: {}", field, label)
            }
            Self::ValueFormat { message, .. } => write!(f, "{}", message),
            Self::LabelFormat { field, label } => write!(
                f,
                "Invalid {} label {}: {}",
                field,
                label,
                crate::parsing::LABEL_CONSTRAINTS
            ),
            Self::InvalidDateTimeFormat(_) => {
                write!(f, "{}", crate::parsing::DATE_TIME_CONSTRAINTS)
            }
            Self::DuplicateMainPhone(phone) => write!(
                f,
                "The main number {} already exists. Do not key in duplicate numbers",
                phone
            ),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Index {} is out of bounds for {} item(s)", index, len)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
