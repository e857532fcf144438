//! Address Book - a contact manager with labeled multi-value fields and meetings.
//!
//! Persons carry a name, a main phone, other phones, emails and addresses
//! (each optionally labeled, e.g. `alice@work.com (work)`), tags, meetings and
//! a flag that moves them to the top of the displayed list.
//!
//! # Architecture
//!
//! - **parsing**: `VALUE (LABEL)` multi-value parser and the date-time normalizer
//! - **domain**: Validated value objects and `ValidationError`
//! - **models**: `Person` and `Meeting` aggregates
//! - **book**: Canonical collection, filters, displayed list and `Model`
//! - **commands**: Prefixed-argument command parser and execution
//! - **storage**: JSON file persistence
//! - **session**: One input line end to end, with autosave
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod parsing;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use book::{AddressBook, Model, PersonFilter, PersonList};
pub use commands::{parse_command, Command, CommandResult};
pub use config::Config;
pub use domain::ValidationError;
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{Meeting, Person};
pub use session::{handle_line, save_if_modified};
pub use storage::{AddressBookStorage, JsonAddressBookStorage};
