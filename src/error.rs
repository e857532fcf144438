//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation failures live in [`crate::domain::errors`]; the enums
//! here wrap them per layer.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by the canonical person collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A person with the same main phone already exists
    #[error("This person already exists in the address book")]
    DuplicatePerson,

    /// The target person is not in the book
    #[error("The person is not in the address book")]
    PersonNotFound,
}

/// Errors returned by command parsing and execution.
///
/// A command that fails never changes the model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A field value failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The book rejected the change
    #[error("{0}")]
    Book(#[from] BookError),

    /// Arguments do not fit the command's shape
    #[error("Invalid command format! \n{usage}")]
    InvalidFormat { usage: &'static str },

    /// The command word is not known
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// No person at the displayed index
    #[error("The person index provided is invalid")]
    InvalidPersonIndex,

    /// The person has no meeting at the given index
    #[error("The meeting index provided is invalid")]
    InvalidMeetingIndex,

    /// A single-valued prefix was given more than once
    #[error("Multiple values specified for the following single-valued field(s): {0}")]
    DuplicatePrefixes(String),

    /// An edit named no field to change
    #[error("At least one field to edit must be provided.")]
    NoFieldsEdited,

    /// Flagging a person that is already flagged
    #[error("This person is already flagged.")]
    AlreadyFlagged,

    /// Unflagging a person that is not flagged
    #[error("This person is already unflagged.")]
    AlreadyUnflagged,
}

/// Errors that can occur while reading or writing the data file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem access failed
    #[error("Could not access data file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not well-formed JSON for an address book
    #[error("Data file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A required field is absent from a stored record
    #[error("{record}'s {field} field is missing!")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    /// A stored value failed validation
    #[error("Invalid value in data file: {0}")]
    InvalidValue(#[from] ValidationError),

    /// Two stored persons share a main phone
    #[error("Persons list contains duplicate person(s).")]
    DuplicatePerson,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::DuplicatePerson;
        assert_eq!(err.to_string(), "This person already exists in the address book");

        let err = StorageError::MissingField {
            record: "Person",
            field: "phone",
        };
        assert_eq!(err.to_string(), "Person's phone field is missing!");

        let err = ConfigError::InvalidValue {
            var: "AUTOSAVE".to_string(),
            reason: "not a boolean".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for AUTOSAVE: not a boolean");
    }

    #[test]
    fn test_command_error_wraps_lower_layers() {
        let err: CommandError = ValidationError::BlankInput("name").into();
        assert_eq!(err.to_string(), "The name should not be blank");

        let err: CommandError = BookError::DuplicatePerson.into();
        assert_eq!(err, CommandError::Book(BookError::DuplicatePerson));
    }
}
