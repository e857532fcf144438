//! Parser for multi-value fields written as `VALUE (LABEL) VALUE2 (LABEL2) ...`.
//!
//! Extraction and validation are split: [`extract`] only enforces the spacing
//! and pairing grammar and returns the raw tokens (labels keep their
//! parentheses), while [`validate_tokens`] applies the per-field value format,
//! the shared label format and the uniqueness rules.

use crate::domain::errors::{SpacingIssue, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Constraint message shared by every labeled field.
pub const LABEL_CONSTRAINTS: &str = "Labels can be made up of alphanumerical characters, spaces, \
     and hyphens, and cannot be made up of only spaces and/or hyphens";

static LABEL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\([A-Za-z0-9 -]+\)$").expect("Failed to compile label regex"));

/// Whether a lone value may omit its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPolicy {
    /// A single value may stand alone; two or more values all need labels.
    #[default]
    Optional,

    /// Every value needs a label, even when there is only one.
    Compulsory,
}

/// One value of a multi-value field together with its optional label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LabeledValue {
    /// The raw value, e.g. `john@example.com`.
    pub value: String,

    /// The label without its parentheses, e.g. `work`.
    pub label: Option<String>,
}

impl LabeledValue {
    /// Create an unlabeled value.
    pub fn unlabeled(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
        }
    }

    /// Create a labeled value.
    pub fn labeled(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: Some(label.into()),
        }
    }
}

impl fmt::Display for LabeledValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{} ({})", self.value, label),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Render values back into the `VALUE (LABEL) ...` form accepted by [`extract`].
pub fn render_labeled_values(values: &[LabeledValue]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split `text` into alternating value and label tokens.
///
/// The input is trimmed first. Scanning starts in value mode; a value ends one
/// space before the next `(`, a label runs from `(` to the next `)` inclusive.
/// A label that is never closed runs to the end of the input.
///
/// # Errors
///
/// - `BlankInput` if `text` is blank
/// - `Spacing` if a value and label are not separated by exactly one space
/// - `UnpairedValue` if a value that needs a label has none
pub fn extract(
    field: &'static str,
    text: &str,
    policy: LabelPolicy,
) -> Result<Vec<String>, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::BlankInput(field));
    }

    let bytes = text.as_bytes();
    let len = text.len();
    let mut tokens = Vec::new();
    let mut expect_value = true;
    let mut start = 0;

    while start < len {
        let end = if expect_value {
            match text[start..].find('(') {
                Some(offset) => {
                    let open = start + offset;
                    check_value_spacing(field, bytes, start, open)?;
                    open - 1
                }
                None => len,
            }
        } else {
            match text[start..].find(')') {
                Some(offset) => {
                    let close = start + offset;
                    check_label_spacing(field, bytes, close)?;
                    close + 1
                }
                None => len,
            }
        };

        tokens.push(text[start..end].to_string());
        start = end + 1;
        expect_value = !expect_value;
    }

    check_token_count(field, &tokens, policy)?;
    Ok(tokens)
}

/// The value ending before `open` must be followed by exactly one space.
fn check_value_spacing(
    field: &'static str,
    bytes: &[u8],
    start: usize,
    open: usize,
) -> Result<(), ValidationError> {
    let issue = if open < 2 || open - 2 < start || bytes[open - 1] != b' ' {
        Some(SpacingIssue::Missing)
    } else if bytes[open - 2] == b' ' {
        Some(SpacingIssue::Extra)
    } else {
        None
    };

    match issue {
        Some(issue) => {
            debug!(field, ?issue, "value spacing rejected");
            Err(ValidationError::Spacing { field, issue })
        }
        None => Ok(()),
    }
}

/// A label closed at `close` must end the input or be followed by exactly one space.
fn check_label_spacing(
    field: &'static str,
    bytes: &[u8],
    close: usize,
) -> Result<(), ValidationError> {
    let len = bytes.len();
    if close == len - 1 {
        return Ok(());
    }

    let issue = if close + 2 >= len || bytes[close + 1] != b' ' {
        Some(SpacingIssue::Missing)
    } else if bytes[close + 2] == b' ' {
        Some(SpacingIssue::Extra)
    } else {
        None
    };

    match issue {
        Some(issue) => {
            debug!(field, ?issue, "label spacing rejected");
            Err(ValidationError::Spacing { field, issue })
        }
        None => Ok(()),
    }
}

fn check_token_count(
    field: &'static str,
    tokens: &[String],
    policy: LabelPolicy,
) -> Result<(), ValidationError> {
    if tokens.is_empty() {
        return Err(ValidationError::BlankInput(field));
    }

    let odd = tokens.len() % 2 == 1;
    let unpaired = match policy {
        LabelPolicy::Optional => tokens.len() >= 2 && odd,
        LabelPolicy::Compulsory => odd,
    };

    if unpaired {
        return Err(ValidationError::UnpairedValue(field));
    }
    Ok(())
}

/// Returns true if `label` (with parentheses) satisfies the shared label format.
pub fn is_valid_label(label: &str) -> bool {
    LABEL_REGEX.is_match(label) && label.chars().any(|c| c.is_ascii_alphanumeric())
}

/// Validate tokens produced by [`extract`].
///
/// Even positions are values checked against `value_regex`, odd positions are
/// labels. No value and no label may repeat (exact, case-sensitive match).
pub fn validate_tokens(
    field: &'static str,
    tokens: &[String],
    value_regex: &Regex,
    value_message: &'static str,
) -> Result<(), ValidationError> {
    let mut seen_values = HashSet::new();
    let mut seen_labels = HashSet::new();

    for (position, token) in tokens.iter().enumerate() {
        if position % 2 == 0 {
            if !seen_values.insert(token.as_str()) {
                return Err(ValidationError::DuplicateValue {
                    field,
                    value: token.clone(),
                });
            }
            if !value_regex.is_match(token) {
                return Err(ValidationError::ValueFormat {
                    field,
                    message: value_message,
                });
            }
        } else {
            if !seen_labels.insert(token.as_str()) {
                return Err(ValidationError::DuplicateLabel {
                    field,
                    label: token.clone(),
                });
            }
            if !is_valid_label(token) {
                return Err(ValidationError::LabelFormat {
                    field,
                    label: token.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Extract, validate and pair a multi-value field in one step.
pub fn parse_labeled_values(
    field: &'static str,
    text: &str,
    policy: LabelPolicy,
    value_regex: &Regex,
    value_message: &'static str,
) -> Result<Vec<LabeledValue>, ValidationError> {
    let tokens = extract(field, text, policy)?;
    validate_tokens(field, &tokens, value_regex, value_message)?;

    Ok(tokens
        .chunks(2)
        .map(|pair| LabeledValue {
            value: pair[0].clone(),
            label: pair.get(1).map(|label| strip_parentheses(label).to_string()),
        })
        .collect())
}

fn strip_parentheses(label: &str) -> &str {
    label
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(label)
}
