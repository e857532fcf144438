//! Aggregates of the address book.
//!
//! A [`Person`] owns its [`Meeting`]s exclusively; meetings are only created,
//! edited and removed through person-scoped, copy-on-write operations.

pub mod meeting;
pub mod person;

pub use meeting::Meeting;
pub use person::Person;
