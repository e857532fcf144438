//! Free-text parsers shared by the value objects.
//!
//! - **labeled_value**: `VALUE (LABEL) VALUE2 (LABEL2)` multi-value fields
//! - **date_time**: restricted set of literal date-time patterns

pub mod date_time;
pub mod labeled_value;

pub use date_time::{format_date_time, parse_date_time, DATE_TIME_CONSTRAINTS, DISPLAY_FORMAT};
pub use labeled_value::{
    extract, is_valid_label, parse_labeled_values, render_labeled_values, validate_tokens,
    LabelPolicy, LabeledValue, LABEL_CONSTRAINTS,
};
